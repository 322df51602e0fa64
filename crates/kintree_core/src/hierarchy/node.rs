//! Tree node handed to the renderer.

use crate::model::person::{Gender, Person, PersonId};
use serde::Serialize;

/// One person inside a specific rooted traversal.
///
/// Nodes are rebuilt wholesale on every build request and carry no identity
/// across builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyNode {
    #[serde(rename = "id")]
    pub person_id: PersonId,
    /// `"{name} {surname}"`.
    #[serde(rename = "name")]
    pub label: String,
    pub gender: Gender,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Creates a childless node for `person`.
    pub fn leaf(person: &Person) -> Self {
        Self {
            person_id: person.id.clone(),
            label: person.display_name(),
            gender: person.gender,
            children: Vec::new(),
        }
    }

    /// Total nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Number of levels in this subtree; a leaf has one.
    pub fn generation_count(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1_usize)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    pub fn contains(&self, id: &PersonId) -> bool {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.person_id == *id {
                return true;
            }
            stack.extend(node.children.iter());
        }
        false
    }

    /// Person ids in pre-order (node before its children, children in order).
    pub fn person_ids(&self) -> Vec<&PersonId> {
        let mut ids = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            ids.push(&node.person_id);
            stack.extend(node.children.iter().rev());
        }
        ids
    }
}

impl Drop for HierarchyNode {
    // Flattens the subtree so dropping a deep chain never recurses.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
