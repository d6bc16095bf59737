use crate::reports;
use clap::Args;
use std::str::FromStr;
use trickdex::dictionary::WordDictionary;
use trickdex::error::{TdxResult, TrickdexError};
use trickdex::list::{SortDirection, TrickList, TrickListDescription};
use trickdex::log::load_log_from_path;

#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Path to the session log CSV (rows: tokens,spots,date)
    #[arg(short, long)]
    pub log: String,

    /// Comma-separated indices of pinned tricks, e.g. "1,3,4"
    #[arg(short, long)]
    pub pinned: Option<String>,

    /// Sort the table by "date" or "points"
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort order: "asc" or "desc"
    #[arg(long, default_value = "desc")]
    pub order: String,
}

pub fn run(args: SessionArgs, dict: &WordDictionary) -> TdxResult<()> {
    let descriptions = load_log_from_path(&args.log)?;

    let pinned = match &args.pinned {
        Some(raw) => parse_pinned(raw)?,
        None => Vec::new(),
    };

    let list_desc = TrickListDescription::new(descriptions, pinned)?;
    let mut list = TrickList::from_description(dict, list_desc)?;

    if let Some(field) = &args.sort {
        let direction = SortDirection::from_str(&args.order)
            .map_err(|_| TrickdexError::Config(format!("unknown order '{}'", args.order)))?;
        match field.as_str() {
            "date" => list.sort_by_date(direction),
            "points" => list.sort_by_points(direction),
            other => {
                return Err(TrickdexError::Config(format!(
                    "unknown sort field '{}'",
                    other
                )))
            }
        }
    }

    reports::print_session(&list);
    reports::print_top_five(&list);
    Ok(())
}

fn parse_pinned(raw: &str) -> TdxResult<Vec<usize>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| TrickdexError::Config(format!("invalid pinned index '{}'", s)))
        })
        .collect()
}
