//! Transcript source adapters

mod answers_file;

pub use answers_file::AnswersFileSource;
