use crate::reports;
use clap::Args;
use std::str::FromStr;
use trickdex::dictionary::WordDictionary;
use trickdex::error::{TdxResult, TrickdexError};
use trickdex::log::parse_date;
use trickdex::spot::{GeneralSpot, Landing};
use trickdex::trick::{Trick, TrickDescription};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Space-separated move tokens, e.g. "fakie double whip"
    #[arg(short, long)]
    pub tokens: String,

    /// Comma-separated landing spots, e.g. "flat,street"
    #[arg(short, long, default_value = "flat")]
    pub spots: String,

    /// Landing date (RFC 3339 or YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
}

pub fn run(args: ScoreArgs, dict: &WordDictionary, debug: bool) -> TdxResult<()> {
    let tokens: Vec<String> = args
        .tokens
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if tokens.is_empty() {
        return Err(TrickdexError::Config("no tokens given".to_string()));
    }

    let landings = parse_spots(&args.spots)?;

    let mut desc = TrickDescription::new(tokens, landings);
    if let Some(raw) = &args.date {
        let date = parse_date(raw)
            .ok_or_else(|| TrickdexError::Config(format!("invalid date '{}'", raw)))?;
        desc.date = Some(date);
    }

    if debug {
        reports::print_resolved_words(dict, &desc.tokens);
    }

    let trick = Trick::from_description(dict, desc)?;
    reports::print_trick_breakdown(&trick);
    Ok(())
}

fn parse_spots(raw: &str) -> TdxResult<Vec<Landing>> {
    let mut landings = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let spot = GeneralSpot::from_str(part)
            .map_err(|_| TrickdexError::Config(format!("unknown spot '{}'", part)))?;
        landings.push(Landing::new(spot));
    }
    Ok(landings)
}
