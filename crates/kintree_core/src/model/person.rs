//! Person domain model.
//!
//! # Responsibility
//! - Define the registry entry consumed by hierarchy, statistics and search.
//! - Normalize identifiers that arrive as JSON strings or JSON numbers.
//!
//! # Invariants
//! - `PersonId` text is trimmed and never blank.
//! - Blank parent references decode as "no parent".
//! - `name` and `surname` must be non-blank for entries written through the
//!   service layer (`Person::validate`). Read-only ingestion does not enforce it.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Canonical person identifier.
///
/// Source data carries ids as either strings (`"1"`) or numbers (`1`); both
/// decode to the same canonical text so they compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(String);

impl PersonId {
    /// Builds an id from raw text.
    ///
    /// Returns `None` when `raw` is blank after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Creates a fresh unique id for newly created persons.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the canonical text form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for PersonId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wire shapes accepted for an id before normalization.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl RawId {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Unsigned(value) => value.to_string(),
            Self::Signed(value) => value.to_string(),
        }
    }
}

impl Serialize for PersonId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PersonId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawId::deserialize(deserializer)?;
        PersonId::parse(&raw.into_text())
            .ok_or_else(|| D::Error::custom("person id must not be blank"))
    }
}

/// Recorded sex of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M", alias = "m", alias = "male")]
    Male,
    #[serde(rename = "F", alias = "f", alias = "female")]
    Female,
}

/// One registry entry.
///
/// Field names on the wire follow the import/export contract
/// (`birthDate`, `fatherId`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub surname: String,
    pub gender: Gender,
    /// Free-form date text, not validated.
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub birth_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub death_date: Option<String>,
    /// May reference an id that is not in the registry.
    #[serde(default, deserialize_with = "deserialize_parent_ref")]
    pub father_id: Option<PersonId>,
    #[serde(default, deserialize_with = "deserialize_parent_ref")]
    pub mother_id: Option<PersonId>,
}

impl Person {
    /// Creates a person with no dates and no parent references.
    pub fn new(
        id: PersonId,
        name: impl Into<String>,
        surname: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            surname: surname.into(),
            gender,
            birth_date: None,
            death_date: None,
            father_id: None,
            mother_id: None,
        }
    }

    /// Sets both parent references.
    pub fn with_parents(
        mut self,
        father_id: Option<PersonId>,
        mother_id: Option<PersonId>,
    ) -> Self {
        self.father_id = father_id;
        self.mother_id = mother_id;
        self
    }

    /// Label shown on tree nodes and search results: `"{name} {surname}"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    /// Whether neither father nor mother is recorded.
    pub fn is_root_candidate(&self) -> bool {
        self.father_id.is_none() && self.mother_id.is_none()
    }

    /// Whether `parent_id` is recorded as this person's father or mother.
    pub fn has_parent(&self, parent_id: &PersonId) -> bool {
        self.father_id.as_ref() == Some(parent_id) || self.mother_id.as_ref() == Some(parent_id)
    }

    /// Validates write-path invariants.
    ///
    /// # Errors
    /// - `EmptyName` / `EmptySurname` when the field is blank.
    /// - `SelfParent` when the person is recorded as its own parent.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if self.name.trim().is_empty() {
            return Err(PersonValidationError::EmptyName);
        }
        if self.surname.trim().is_empty() {
            return Err(PersonValidationError::EmptySurname);
        }
        if self.has_parent(&self.id) {
            return Err(PersonValidationError::SelfParent(self.id.clone()));
        }
        Ok(())
    }
}

/// Write-path validation failures for [`Person`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    EmptyName,
    EmptySurname,
    SelfParent(PersonId),
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be blank"),
            Self::EmptySurname => write!(f, "surname must not be blank"),
            Self::SelfParent(id) => write!(f, "person {id} cannot be its own parent"),
        }
    }
}

impl Error for PersonValidationError {}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

fn deserialize_parent_ref<'de, D>(deserializer: D) -> Result<Option<PersonId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| PersonId::parse(&raw.into_text())))
}
