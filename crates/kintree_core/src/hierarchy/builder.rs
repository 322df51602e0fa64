//! Root selection and depth-first hierarchy construction.
//!
//! # Invariants
//! - `visited` is seeded with the root; a child is marked before it is
//!   expanded and is never expanded twice.
//! - Dangling parent references simply never match a person.
//! - No depth limit is applied; only the visited set bounds expansion.
//! - Traversal runs on a heap stack, so lineage depth never touches the
//!   call stack.

use crate::hierarchy::node::HierarchyNode;
use crate::model::person::{Person, PersonId};
use crate::registry::person_registry::PersonRegistry;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for root-dependent hierarchy operations.
pub type HierarchyResult<T> = Result<T, HierarchyError>;

/// Recoverable conditions signaled to the immediate caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// Registry has no persons; callers show an empty state.
    EmptyRegistry,
    /// Requested root id resolves to nobody; callers fall back to the
    /// default root.
    PersonNotFound(PersonId),
}

impl Display for HierarchyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRegistry => write!(f, "person registry is empty"),
            Self::PersonNotFound(id) => write!(f, "person not found: {id}"),
        }
    }
}

impl Error for HierarchyError {}

/// Parent id to children lookup, built once per operation.
///
/// Each child list is in registry order, matching a linear scan for
/// `fatherId == id || motherId == id`.
pub(crate) struct ChildIndex<'r> {
    by_parent: HashMap<&'r PersonId, Vec<&'r Person>>,
}

impl<'r> ChildIndex<'r> {
    pub(crate) fn build(registry: &'r PersonRegistry) -> Self {
        let mut by_parent: HashMap<&'r PersonId, Vec<&'r Person>> = HashMap::new();
        for person in registry.people() {
            if let Some(father_id) = person.father_id.as_ref() {
                by_parent.entry(father_id).or_default().push(person);
            }
            if let Some(mother_id) = person.mother_id.as_ref() {
                if person.father_id.as_ref() != Some(mother_id) {
                    by_parent.entry(mother_id).or_default().push(person);
                }
            }
        }
        Self { by_parent }
    }

    pub(crate) fn children(&self, parent_id: &PersonId) -> &[&'r Person] {
        self.by_parent
            .get(parent_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Picks the root used when the caller has not chosen one.
///
/// Returns the first root candidate in registry order, or the first person
/// when every person has a recorded parent.
///
/// # Errors
/// - `EmptyRegistry` when the registry has no persons.
pub fn select_default_root(registry: &PersonRegistry) -> HierarchyResult<PersonId> {
    registry
        .root_candidates()
        .next()
        .or_else(|| registry.people().first())
        .map(|person| person.id.clone())
        .ok_or(HierarchyError::EmptyRegistry)
}

/// Expands the descendants of `root_id` into a cycle-free tree.
///
/// # Errors
/// - `PersonNotFound` when `root_id` is not in the registry.
pub fn build_hierarchy(
    registry: &PersonRegistry,
    root_id: &PersonId,
) -> HierarchyResult<HierarchyNode> {
    let root = registry
        .get(root_id)
        .ok_or_else(|| HierarchyError::PersonNotFound(root_id.clone()))?;

    let index = ChildIndex::build(registry);
    let mut visited = HashSet::new();
    visited.insert(&root.id);
    Ok(expand(&index, root, &mut visited))
}

/// Node under construction plus the children not yet considered.
struct Frame<'i, 'r> {
    node: HierarchyNode,
    pending: std::slice::Iter<'i, &'r Person>,
}

impl<'i, 'r> Frame<'i, 'r> {
    fn open(index: &'i ChildIndex<'r>, person: &'r Person) -> Self {
        Self {
            node: HierarchyNode::leaf(person),
            pending: index.children(&person.id).iter(),
        }
    }
}

/// Depth-first expansion on a heap stack.
///
/// A child is marked visited when its parent's loop reaches it, after every
/// earlier sibling subtree has been fully expanded.
fn expand<'r>(
    index: &ChildIndex<'r>,
    root: &'r Person,
    visited: &mut HashSet<&'r PersonId>,
) -> HierarchyNode {
    let mut root_frame = Frame::open(index, root);
    let mut stack: Vec<Frame<'_, 'r>> = Vec::new();
    loop {
        let frame = stack.last_mut().unwrap_or(&mut root_frame);
        if let Some(&child) = frame.pending.next() {
            if visited.insert(&child.id) {
                stack.push(Frame::open(index, child));
            }
            continue;
        }
        match stack.pop() {
            Some(done) => stack
                .last_mut()
                .unwrap_or(&mut root_frame)
                .node
                .children
                .push(done.node),
            None => return root_frame.node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChildIndex;
    use crate::model::person::{Gender, Person, PersonId};
    use crate::registry::person_registry::PersonRegistry;

    #[test]
    fn child_index_lists_same_parent_once() {
        let id = |value: u64| Some(PersonId::from(value));
        let registry = PersonRegistry::from_people([
            Person::new(PersonId::from(1), "Root", "X", Gender::Male),
            Person::new(PersonId::from(2), "Odd", "X", Gender::Female).with_parents(id(1), id(1)),
            Person::new(PersonId::from(3), "Next", "X", Gender::Male).with_parents(None, id(1)),
        ]);

        let index = ChildIndex::build(&registry);
        let children = index
            .children(&PersonId::from(1))
            .iter()
            .map(|person| person.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(children, vec!["Odd", "Next"]);
        assert!(index.children(&PersonId::from(9)).is_empty());
    }

    #[test]
    fn child_index_agrees_with_registry_scan() {
        let id = |value: u64| Some(PersonId::from(value));
        let registry = PersonRegistry::from_people([
            Person::new(PersonId::from(1), "Root", "X", Gender::Male),
            Person::new(PersonId::from(2), "Wife", "X", Gender::Female),
            Person::new(PersonId::from(3), "A", "X", Gender::Male).with_parents(id(1), id(2)),
            Person::new(PersonId::from(4), "B", "X", Gender::Female).with_parents(id(3), id(3)),
            Person::new(PersonId::from(5), "C", "X", Gender::Male).with_parents(None, id(2)),
            Person::new(PersonId::from(6), "D", "X", Gender::Male).with_parents(id(9), id(3)),
        ]);

        let index = ChildIndex::build(&registry);
        let missing = PersonId::from(9);
        let parents = registry.people().iter().map(|person| &person.id);
        for parent in parents.chain([&missing]) {
            let indexed = index
                .children(parent)
                .iter()
                .map(|person| &person.id)
                .collect::<Vec<_>>();
            let scanned = registry
                .children_of(parent)
                .map(|person| &person.id)
                .collect::<Vec<_>>();
            assert_eq!(indexed, scanned, "children of {parent}");
        }
    }
}
