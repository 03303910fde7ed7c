//! In-memory inverted-index storage for the search pipeline.
//!
//! Assigns dense sequential identifiers to document paths and maintains a
//! term -> postings mapping. Tokenization happens upstream; this crate only
//! stores the (document, frequency) pairs it is handed and serves them back.

pub mod error;
pub mod index;

pub use error::{Result, StorageError};
pub use index::{DocId, Frequency, IndexStorage, IndexStore, Posting};
