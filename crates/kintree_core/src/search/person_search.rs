//! Substring search over person names and ids.
//!
//! # Responsibility
//! - Match a free-text query against display names and ids.
//! - Tell "query too short, nothing searched" apart from "no matches".
//!
//! # Invariants
//! - Matching is case-insensitive (Unicode lowercase) substring matching.
//! - Results keep registry order; there is no ranking.

use crate::model::person::{Gender, Person};
use crate::registry::person_registry::PersonRegistry;

/// Minimum trimmed query length, in characters, that triggers a search.
pub const MIN_QUERY_CHARS: usize = 2;

/// Search options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// User query text; trimmed before use.
    pub text: String,
    /// Optional sex filter applied after matching.
    pub gender: Option<Gender>,
    /// Optional cap on the number of matches returned.
    pub limit: Option<usize>,
}

impl SearchQuery {
    /// Creates a query with no filter and no limit.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            gender: None,
            limit: None,
        }
    }
}

/// Search result state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'r> {
    /// Query shorter than [`MIN_QUERY_CHARS`]; no search ran.
    NotSearched,
    /// Search ran; matches in registry order (possibly empty).
    Matches(Vec<&'r Person>),
}

impl<'r> SearchOutcome<'r> {
    pub fn is_searched(&self) -> bool {
        matches!(self, Self::Matches(_))
    }

    /// Matches, or an empty slice when no search ran.
    pub fn matches(&self) -> &[&'r Person] {
        match self {
            Self::NotSearched => &[],
            Self::Matches(people) => people.as_slice(),
        }
    }
}

/// Runs `query` against the registry.
pub fn search<'r>(registry: &'r PersonRegistry, query: &SearchQuery) -> SearchOutcome<'r> {
    let text = query.text.trim();
    if text.chars().count() < MIN_QUERY_CHARS {
        return SearchOutcome::NotSearched;
    }

    let needle = text.to_lowercase();
    let limit = query.limit.unwrap_or(usize::MAX);
    let matches = registry
        .people()
        .iter()
        .filter(|person| query.gender.map_or(true, |gender| person.gender == gender))
        .filter(|person| person_matches(person, &needle))
        .take(limit)
        .collect();

    SearchOutcome::Matches(matches)
}

/// Shorthand for [`search`] with a bare text query.
pub fn search_people<'r>(registry: &'r PersonRegistry, text: &str) -> SearchOutcome<'r> {
    search(registry, &SearchQuery::new(text))
}

fn person_matches(person: &Person, needle: &str) -> bool {
    let forward = format!("{} {}", person.name, person.surname).to_lowercase();
    if forward.contains(needle) {
        return true;
    }
    let reversed = format!("{} {}", person.surname, person.name).to_lowercase();
    reversed.contains(needle) || person.id.as_str().to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::person_matches;
    use crate::model::person::{Gender, Person, PersonId};

    #[test]
    fn matches_across_name_boundary_in_both_orders() {
        let person = Person::new(PersonId::from(12), "Olga", "Smirnova", Gender::Female);

        assert!(person_matches(&person, "olga smi"));
        assert!(person_matches(&person, "nova olg"));
        assert!(person_matches(&person, "12"));
        assert!(!person_matches(&person, "olgasmi"));
    }
}
