pub mod dictionary;
pub mod error;
pub mod list;
pub mod log;
pub mod spot;
pub mod tier;
pub mod trick;
// cmd and reports are binary modules (declared in main.rs),
// everything scoring-related lives in the library.
