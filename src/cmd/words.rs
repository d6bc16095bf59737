use crate::reports;
use clap::Args;
use std::str::FromStr;
use trickdex::dictionary::{WordDictionary, WordKind};
use trickdex::error::{TdxResult, TrickdexError};

#[derive(Args, Debug, Clone)]
pub struct WordsArgs {
    /// Only list words of one move family, e.g. "whip"
    #[arg(short, long)]
    pub kind: Option<String>,
}

pub fn run(args: WordsArgs, dict: &WordDictionary) -> TdxResult<()> {
    let kind = match &args.kind {
        Some(raw) => Some(
            WordKind::from_str(raw)
                .map_err(|_| TrickdexError::Config(format!("unknown kind '{}'", raw)))?,
        ),
        None => None,
    };

    reports::print_words(dict, kind);
    Ok(())
}
