//! Generation depth over the whole registry.

use crate::hierarchy::builder::ChildIndex;
use crate::model::person::{Person, PersonId};
use crate::registry::person_registry::PersonRegistry;
use std::collections::HashSet;

/// Counts the distinct depth levels reached from every root candidate.
///
/// Roots start at depth 1 and each parent->child edge adds one. One visited
/// set spans the whole computation, so a person reachable from several
/// roots counts once, at the depth of the first traversal that reaches it.
/// When no root candidate exists the first person seeds the traversal.
///
/// Returns 0 for an empty registry.
pub fn compute_generation_count(registry: &PersonRegistry) -> usize {
    let Some(first) = registry.people().first() else {
        return 0;
    };

    let mut seeds = registry.root_candidates().collect::<Vec<_>>();
    if seeds.is_empty() {
        seeds.push(first);
    }

    let index = ChildIndex::build(registry);
    let mut visited = HashSet::new();
    let mut deepest = 0;
    for seed in seeds {
        if !visited.insert(&seed.id) {
            continue;
        }
        deepest = deepest.max(deepest_level(&index, seed, &mut visited));
    }
    deepest
}

/// Deepest level reached below `seed` (at depth 1), marking every person
/// it expands.
fn deepest_level<'r>(
    index: &ChildIndex<'r>,
    seed: &'r Person,
    visited: &mut HashSet<&'r PersonId>,
) -> usize {
    let mut deepest = 1;
    let mut stack = vec![(index.children(&seed.id).iter(), 1_usize)];
    while let Some((pending, depth)) = stack.last_mut() {
        let depth = *depth;
        match pending.next() {
            Some(&child) => {
                if visited.insert(&child.id) {
                    deepest = deepest.max(depth + 1);
                    stack.push((index.children(&child.id).iter(), depth + 1));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
    deepest
}
