//! Registry document codec.
//!
//! # Responsibility
//! - Decode the `{ "people": [...] }` JSON document into a registry.
//! - Encode a registry back into the same shape.
//!
//! # Invariants
//! - Decoding never validates genealogy: dangling parents, cycles and
//!   duplicate ids are accepted (duplicates collapse last-wins).
//! - A person entry that cannot be decoded fails with its position.

use crate::model::person::Person;
use crate::registry::person_registry::PersonRegistry;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for document codec APIs.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors from registry document decoding/encoding.
#[derive(Debug)]
pub enum DocumentError {
    /// Document is not valid JSON or lacks the `people` array.
    Json(serde_json::Error),
    /// Entry at `index` in `people` is not a valid person record.
    InvalidPerson {
        index: usize,
        source: serde_json::Error,
    },
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid registry document: {err}"),
            Self::InvalidPerson { index, source } => {
                write!(f, "invalid person at index {index}: {source}")
            }
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidPerson { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Serializable registry document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryDocument {
    pub people: Vec<Person>,
}

#[derive(Deserialize)]
struct RawDocument {
    people: Vec<serde_json::Value>,
}

impl RegistryDocument {
    /// Parses a document, decoding each person entry independently.
    pub fn from_json_str(json: &str) -> DocumentResult<Self> {
        let raw: RawDocument = serde_json::from_str(json)?;
        let people = raw
            .people
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value::<Person>(value)
                    .map_err(|source| DocumentError::InvalidPerson { index, source })
            })
            .collect::<DocumentResult<Vec<_>>>()?;
        Ok(Self { people })
    }

    /// Encodes the document as indented JSON.
    pub fn to_json_string_pretty(&self) -> DocumentResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}

impl PersonRegistry {
    /// Builds a registry from a decoded document.
    pub fn from_document(document: RegistryDocument) -> Self {
        Self::from_people(document.people)
    }

    /// Snapshot of this registry as a document.
    pub fn to_document(&self) -> RegistryDocument {
        RegistryDocument {
            people: self.people().to_vec(),
        }
    }

    /// Parses a registry straight from document JSON.
    pub fn from_json_str(json: &str) -> DocumentResult<Self> {
        RegistryDocument::from_json_str(json).map(Self::from_document)
    }
}
