//! Ordered person registry with id index.
//!
//! # Invariants
//! - `index[id]` always points at the single entry carrying `id`.
//! - A duplicate id replaces the earlier entry in place: position of the
//!   first occurrence, value of the last one.

use crate::model::person::{Gender, Person, PersonId};
use std::collections::HashMap;

/// Result of [`PersonRegistry::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new entry was appended at the end of the registry.
    Inserted,
    /// An entry with the same id was replaced in place.
    Updated,
}

/// Flat, ordered list of persons with last-wins id lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonRegistry {
    people: Vec<Person>,
    index: HashMap<PersonId, usize>,
}

impl PersonRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from persons in source order.
    ///
    /// Duplicate ids collapse with last-wins semantics.
    pub fn from_people(people: impl IntoIterator<Item = Person>) -> Self {
        let mut registry = Self::new();
        for person in people {
            registry.upsert(person);
        }
        registry
    }

    /// Three-person demo family used for first start and data reset.
    pub fn demo() -> Self {
        let mut ivan = Person::new(PersonId::from(1), "Ivan", "Ivanov", Gender::Male);
        ivan.birth_date = Some("1950-01-01".to_string());
        let mut maria = Person::new(PersonId::from(2), "Maria", "Ivanova", Gender::Female);
        maria.birth_date = Some("1955-02-02".to_string());
        let mut alex = Person::new(PersonId::from(3), "Alex", "Ivanov", Gender::Male)
            .with_parents(Some(PersonId::from(1)), Some(PersonId::from(2)));
        alex.birth_date = Some("1980-03-03".to_string());

        Self::from_people([ivan, maria, alex])
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// All persons in registry order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Looks up one person by id.
    pub fn get(&self, id: &PersonId) -> Option<&Person> {
        self.index.get(id).map(|&position| &self.people[position])
    }

    pub fn contains(&self, id: &PersonId) -> bool {
        self.index.contains_key(id)
    }

    /// Inserts a new person or replaces the entry with the same id.
    pub fn upsert(&mut self, person: Person) -> UpsertOutcome {
        match self.index.get(&person.id) {
            Some(&position) => {
                self.people[position] = person;
                UpsertOutcome::Updated
            }
            None => {
                self.index.insert(person.id.clone(), self.people.len());
                self.people.push(person);
                UpsertOutcome::Inserted
            }
        }
    }

    /// Removes one person by id.
    ///
    /// References from other persons to the removed id are left dangling.
    pub fn remove(&mut self, id: &PersonId) -> Option<Person> {
        let position = self.index.remove(id)?;
        let removed = self.people.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Persons recording `parent_id` as father or mother, in registry order.
    pub fn children_of<'a>(
        &'a self,
        parent_id: &'a PersonId,
    ) -> impl Iterator<Item = &'a Person> {
        self.people
            .iter()
            .filter(move |person| person.has_parent(parent_id))
    }

    /// Persons with neither father nor mother recorded, in registry order.
    pub fn root_candidates(&self) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(|person| person.is_root_candidate())
    }

    /// Consumes the registry, returning persons in registry order.
    pub fn into_people(self) -> Vec<Person> {
        self.people
    }
}

#[cfg(test)]
mod tests {
    use super::{PersonRegistry, UpsertOutcome};
    use crate::model::person::{Gender, Person, PersonId};

    fn person(id: u64, name: &str) -> Person {
        Person::new(PersonId::from(id), name, "Orlov", Gender::Male)
    }

    #[test]
    fn duplicate_ids_keep_first_position_and_last_value() {
        let registry =
            PersonRegistry::from_people([person(1, "Old"), person(2, "Boris"), person(1, "New")]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.people()[0].name, "New");
        assert_eq!(registry.get(&PersonId::from(1)).unwrap().name, "New");
    }

    #[test]
    fn children_and_root_candidates_follow_registry_order() {
        let registry = PersonRegistry::demo();
        let father = PersonId::from(1);

        let children = registry
            .children_of(&father)
            .map(|person| person.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(children, vec!["Alex"]);

        let roots = registry
            .root_candidates()
            .map(|person| person.id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(roots, vec!["1", "2"]);
    }

    #[test]
    fn remove_keeps_index_consistent() {
        let mut registry =
            PersonRegistry::from_people([person(1, "A"), person(2, "B"), person(3, "C")]);

        let removed = registry.remove(&PersonId::from(1)).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(registry.get(&PersonId::from(3)).unwrap().name, "C");
        assert_eq!(registry.upsert(person(3, "C2")), UpsertOutcome::Updated);
        assert_eq!(registry.people()[1].name, "C2");
        assert!(registry.remove(&PersonId::from(1)).is_none());
    }
}
