//! Corpus assembly: load the scraped document store, flatten summaries, and join them.

mod flatten;
mod loader;
pub mod types;

pub use flatten::{SUMMARY_DELIMITER, flatten, join};
pub use loader::{load_documents, parse_documents};
pub use types::{Corpus, CorpusError, DocumentStore, JobRecord};
