pub mod score;
pub mod session;
pub mod words;
