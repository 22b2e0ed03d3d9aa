//! The live document corpus.
//!
//! The host pushes every edit through [`Corpus::upsert`]. A document's
//! revision only moves when its tree actually changed, which is what lets
//! the pipeline skip documents wholesale.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use companion_foundation::{Error, ErrorContext, Result};

use crate::ast::CompilationUnit;
use crate::node::DeclarationNode;

/// Stable identifier for a document, assigned on first insertion.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub(crate) u32);

impl DocumentId {
    /// Returns the raw index of this document.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.0)
    }
}

/// One document of the corpus.
#[derive(Clone, Debug)]
pub struct Document {
    /// Identifier, stable for as long as the path stays in the corpus.
    pub id: DocumentId,
    /// Path as reported by the host.
    pub path: Arc<str>,
    /// Current tree.
    pub unit: CompilationUnit,
    /// Corpus revision at which the tree last changed.
    pub revision: u64,
}

impl Document {
    /// Snapshots every type declaration in this document.
    #[must_use]
    pub fn nodes(&self) -> Vec<DeclarationNode> {
        DeclarationNode::collect(self.id, &self.path, &self.unit)
    }
}

/// What an upsert did to the corpus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    /// A new document was added.
    Added(DocumentId),
    /// An existing document's tree changed.
    Modified(DocumentId),
    /// The tree was structurally identical; nothing changed.
    Unchanged(DocumentId),
}

impl Change {
    /// The affected document.
    #[must_use]
    pub const fn document(self) -> DocumentId {
        match self {
            Self::Added(id) | Self::Modified(id) | Self::Unchanged(id) => id,
        }
    }
}

/// A mutable collection of documents with revision tracking.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    documents: BTreeMap<DocumentId, Document>,
    by_path: HashMap<Arc<str>, DocumentId>,
    next_id: u32,
    revision: u64,
}

impl Corpus {
    /// Creates an empty corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current corpus revision. Bumped by every effective edit.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the corpus holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Inserts or replaces the document at `path`.
    ///
    /// Replacing a document with a structurally equal tree is a no-op.
    pub fn upsert(&mut self, path: &str, unit: CompilationUnit) -> Change {
        if let Some(doc) = self
            .by_path
            .get(path)
            .and_then(|id| self.documents.get_mut(id))
        {
            if doc.unit == unit {
                return Change::Unchanged(doc.id);
            }
            self.revision += 1;
            doc.unit = unit;
            doc.revision = self.revision;
            return Change::Modified(doc.id);
        }

        self.revision += 1;
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        let path: Arc<str> = Arc::from(path);
        self.by_path.insert(path.clone(), id);
        self.documents.insert(
            id,
            Document {
                id,
                path,
                unit,
                revision: self.revision,
            },
        );
        Change::Added(id)
    }

    /// Removes the document at `path`.
    ///
    /// # Errors
    /// Returns an error if no document is registered under `path`.
    pub fn remove(&mut self, path: &str) -> Result<DocumentId> {
        let id = self.by_path.remove(path).ok_or_else(|| {
            Error::document_not_found(path)
                .with_context(ErrorContext::new().with_stage("corpus remove"))
        })?;
        self.documents.remove(&id);
        self.revision += 1;
        Ok(id)
    }

    /// Looks up a document by path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Document> {
        self.by_path.get(path).and_then(|id| self.documents.get(id))
    }

    /// Looks up a document by id.
    #[must_use]
    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(&id)
    }

    /// Iterates documents in id order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    /// Returns true if a document with this id is still present.
    #[must_use]
    pub fn contains(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }
}
