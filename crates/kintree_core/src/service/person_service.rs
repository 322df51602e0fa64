//! Person CRUD use-case service.
//!
//! # Responsibility
//! - Normalize form input into a `Person` and apply write-path validation.
//! - Own the registry snapshot that CRUD, import and reset flows replace.
//!
//! # Invariants
//! - Every saved person passes `Person::validate()`.
//! - Deleting a person never rewrites other persons; their references dangle.
//! - Import accepts imperfect genealogy exactly like the document codec.

use crate::model::person::{Gender, Person, PersonId, PersonValidationError};
use crate::registry::document::DocumentError;
use crate::registry::person_registry::{PersonRegistry, UpsertOutcome};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Service error for person write flows.
#[derive(Debug)]
pub enum PersonServiceError {
    /// Normalized person failed validation.
    Validation(PersonValidationError),
    /// Target person does not exist.
    NotFound(PersonId),
    /// Import/export document failure.
    Document(DocumentError),
}

impl Display for PersonServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "person not found: {id}"),
            Self::Document(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersonServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Document(err) => Some(err),
        }
    }
}

impl From<PersonValidationError> for PersonServiceError {
    fn from(value: PersonValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DocumentError> for PersonServiceError {
    fn from(value: DocumentError) -> Self {
        Self::Document(value)
    }
}

/// Raw person form input.
///
/// Text fields are taken as typed; the service trims and normalizes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDraft {
    /// Existing id to update, or `None`/blank to create a new person.
    pub id: Option<String>,
    pub name: String,
    pub surname: String,
    pub gender: Gender,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    pub father_id: Option<String>,
    pub mother_id: Option<String>,
}

impl PersonDraft {
    /// Creates a draft for a new person with no dates and no parents.
    pub fn new(name: impl Into<String>, surname: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: None,
            name: name.into(),
            surname: surname.into(),
            gender,
            birth_date: None,
            death_date: None,
            father_id: None,
            mother_id: None,
        }
    }
}

/// Result of [`PersonService::save_person`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub person_id: PersonId,
    pub outcome: UpsertOutcome,
}

/// Use-case service wrapper around the registry snapshot.
#[derive(Debug, Clone, Default)]
pub struct PersonService {
    registry: PersonRegistry,
}

impl PersonService {
    /// Creates a service owning `registry`.
    pub fn new(registry: PersonRegistry) -> Self {
        Self { registry }
    }

    /// Current snapshot, for tree building, statistics and search.
    pub fn registry(&self) -> &PersonRegistry {
        &self.registry
    }

    /// Creates or updates one person from form input.
    ///
    /// # Contract
    /// - Blank or missing id creates a person with a generated id.
    /// - Names are trimmed and inner whitespace is collapsed.
    /// - Blank dates and parent ids are stored as `None`.
    pub fn save_person(&mut self, draft: PersonDraft) -> Result<SaveOutcome, PersonServiceError> {
        let person = normalize_draft(draft);
        if let Err(err) = person.validate() {
            warn!(
                "event=person_save module=service status=error person_id={} error={}",
                person.id, err
            );
            return Err(err.into());
        }

        let person_id = person.id.clone();
        let outcome = self.registry.upsert(person);
        info!(
            "event=person_save module=service status=ok person_id={} outcome={:?} total={}",
            person_id,
            outcome,
            self.registry.len()
        );
        Ok(SaveOutcome { person_id, outcome })
    }

    /// Deletes one person by id and returns the removed entry.
    pub fn delete_person(&mut self, id: &PersonId) -> Result<Person, PersonServiceError> {
        let removed = self
            .registry
            .remove(id)
            .ok_or_else(|| PersonServiceError::NotFound(id.clone()))?;
        info!(
            "event=person_delete module=service status=ok person_id={} total={}",
            id,
            self.registry.len()
        );
        Ok(removed)
    }

    /// Replaces the registry with the demo family.
    pub fn reset_to_demo(&mut self) {
        self.registry = PersonRegistry::demo();
        info!(
            "event=registry_reset module=service status=ok total={}",
            self.registry.len()
        );
    }

    /// Replaces the registry from document JSON and returns the new size.
    ///
    /// The current registry is kept when decoding fails.
    pub fn import_document(&mut self, json: &str) -> Result<usize, PersonServiceError> {
        let registry = match PersonRegistry::from_json_str(json) {
            Ok(registry) => registry,
            Err(err) => {
                warn!("event=registry_import module=service status=error error={err}");
                return Err(err.into());
            }
        };
        self.registry = registry;
        info!(
            "event=registry_import module=service status=ok total={}",
            self.registry.len()
        );
        Ok(self.registry.len())
    }

    /// Exports the registry as indented document JSON.
    pub fn export_document(&self) -> Result<String, PersonServiceError> {
        self.registry
            .to_document()
            .to_json_string_pretty()
            .map_err(Into::into)
    }
}

fn normalize_draft(draft: PersonDraft) -> Person {
    let id = draft
        .id
        .as_deref()
        .and_then(PersonId::parse)
        .unwrap_or_else(PersonId::generate);

    Person {
        id,
        name: normalize_name(&draft.name),
        surname: normalize_name(&draft.surname),
        gender: draft.gender,
        birth_date: non_blank(draft.birth_date),
        death_date: non_blank(draft.death_date),
        father_id: draft.father_id.as_deref().and_then(PersonId::parse),
        mother_id: draft.mother_id.as_deref().and_then(PersonId::parse),
    }
}

fn normalize_name(value: &str) -> String {
    WHITESPACE_RE.replace_all(value.trim(), " ").into_owned()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
