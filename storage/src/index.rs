use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, StorageError};

pub type DocId = u64;
pub type Frequency = u64;

/// One (document, term-frequency) entry in a term's postings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub frequency: Frequency,
}

/// Contract for index storage backends.
pub trait IndexStorage {
    /// Assign the next sequential identifier to `path` and record it.
    fn register_document(&mut self, path: &str) -> Result<DocId>;

    /// Look up the path registered under `doc_id`.
    fn resolve_document(&self, doc_id: DocId) -> Result<String>;

    /// Append one posting per (term, frequency) entry for `doc_id`.
    ///
    /// Postings are never merged: repeating a call with the same arguments
    /// appends duplicates. An empty map is a successful no-op. The id is
    /// not checked against the registry; postings may reference documents
    /// that were never registered.
    fn update_postings(
        &mut self,
        doc_id: DocId,
        term_frequencies: HashMap<String, Frequency>,
    ) -> Result<()>;

    /// Postings for `term` in append order; empty if the term was never
    /// indexed.
    fn lookup_term(&self, term: &str) -> Result<Vec<Posting>>;
}

/// In-memory document registry plus inverted index.
///
/// Identifiers are dense and double as indices into the `paths` arena, so
/// resolving an id is O(1) and the registration counter is the arena length.
/// Everything is append-only: re-registering a path mints a fresh id (the
/// forward map then points at the newest one, while older ids still
/// resolve), and duplicate postings accumulate rather than replace.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct IndexStore {
    documents: HashMap<String, DocId>,
    paths: Vec<String>,
    postings: HashMap<String, Vec<Posting>>,
}

impl IndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier most recently assigned to `path`, if any.
    pub fn document_id(&self, path: &str) -> Option<DocId> {
        self.documents.get(path).copied()
    }

    /// Number of registrations performed (counting re-registrations).
    pub fn document_count(&self) -> usize {
        self.paths.len()
    }

    /// Number of distinct terms with at least one posting.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.postings.is_empty()
    }
}

impl IndexStorage for IndexStore {
    fn register_document(&mut self, path: &str) -> Result<DocId> {
        if path.is_empty() {
            return Err(StorageError::invalid_argument(
                "document path cannot be empty",
            ));
        }

        let doc_id = self.paths.len() as DocId;
        self.paths.push(path.to_owned());
        self.documents.insert(path.to_owned(), doc_id);
        tracing::debug!(doc_id, path, "registered document");
        Ok(doc_id)
    }

    fn resolve_document(&self, doc_id: DocId) -> Result<String> {
        self.paths
            .get(doc_id as usize)
            .cloned()
            .ok_or(StorageError::NotFound(doc_id))
    }

    fn update_postings(
        &mut self,
        doc_id: DocId,
        term_frequencies: HashMap<String, Frequency>,
    ) -> Result<()> {
        tracing::debug!(
            doc_id,
            terms = term_frequencies.len(),
            "appending postings"
        );
        for (term, frequency) in term_frequencies {
            self.postings
                .entry(term)
                .or_default()
                .push(Posting { doc_id, frequency });
        }
        Ok(())
    }

    fn lookup_term(&self, term: &str) -> Result<Vec<Posting>> {
        if term.is_empty() {
            return Err(StorageError::invalid_argument("term cannot be empty"));
        }

        Ok(self.postings.get(term).cloned().unwrap_or_default())
    }
}
