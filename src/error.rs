use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrickdexError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Dictionary Error: {0}")]
    Dictionary(String),

    #[error("Session Log Error: {0}")]
    Log(String),

    #[error("Unrecognized word '{token}'")]
    UnrecognizedWord { token: String },

    #[error("Trick contains no scoring block")]
    NoBlockFound,

    #[error("Block must end in a word with positive points")]
    EmptyBlock,

    #[error("Trick '{name}' is already in the list")]
    DuplicateTrickName { name: String },

    #[error("At most 5 tricks can be pinned, got {count}")]
    PinnedOverflow { count: usize },
}

pub type TdxResult<T> = Result<T, TrickdexError>;
