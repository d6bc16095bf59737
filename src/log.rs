use crate::error::{TdxResult, TrickdexError};
use crate::spot::{GeneralSpot, Landing};
use crate::trick::TrickDescription;
use chrono::{DateTime, NaiveDate, Utc};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Reads a rider's session log. Rows are `tokens,spots,date`: tokens
/// separated by spaces, spots by `|`, date optional (RFC 3339 or
/// `YYYY-MM-DD`). A malformed row fails the load; silently skipping
/// score-bearing data is not an option here.
pub fn load_log<R: Read>(reader: R) -> TdxResult<Vec<TrickDescription>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut descriptions = Vec::new();

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        // Header occupies line 1.
        let row = row_idx + 2;

        if rec.len() < 2 {
            return Err(TrickdexError::Log(format!(
                "row {}: expected at least tokens and spots columns",
                row
            )));
        }

        let tokens: Vec<String> = rec[0].split_whitespace().map(str::to_string).collect();
        if tokens.is_empty() {
            return Err(TrickdexError::Log(format!("row {}: empty token list", row)));
        }

        let mut landings = Vec::new();
        for raw in rec[1].split('|').map(str::trim).filter(|s| !s.is_empty()) {
            let spot = GeneralSpot::from_str(raw)
                .map_err(|_| TrickdexError::Log(format!("row {}: unknown spot '{}'", row, raw)))?;
            landings.push(Landing::new(spot));
        }

        let date = match rec.get(2).map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(parse_date(raw).ok_or_else(|| {
                TrickdexError::Log(format!("row {}: invalid date '{}'", row, raw))
            })?),
            None => None,
        };

        let mut desc = TrickDescription::new(tokens, landings);
        desc.date = date;
        descriptions.push(desc);
    }

    debug!("Loaded {} session log rows", descriptions.len());
    Ok(descriptions)
}

pub fn load_log_from_path<P: AsRef<Path>>(path: P) -> TdxResult<Vec<TrickDescription>> {
    let file = File::open(path)?;
    load_log(file)
}

/// Accepts RFC 3339 or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}
