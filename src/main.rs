use clap::{Parser, Subcommand};
use std::path::Path;
use std::process;
use tracing::{error, info, warn};
use trickdex::dictionary::WordDictionary;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/words.json")]
    words: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Session(cmd::session::SessionArgs),
    Words(cmd::words::WordsArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let dict = if Path::new(&cli.words).exists() {
        info!("📖 Loading Words: {}", cli.words);
        WordDictionary::load_from_file(&cli.words).unwrap_or_else(|e| {
            error!("Failed to load words file: {}", e);
            process::exit(1);
        })
    } else {
        warn!("⚠️  {} not found. Using built-in defaults.", cli.words);
        WordDictionary::builtin()
    };

    let result = match cli.command {
        Commands::Score(args) => cmd::score::run(args, &dict, cli.debug),
        Commands::Session(args) => cmd::session::run(args, &dict),
        Commands::Words(args) => cmd::words::run(args, &dict),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
