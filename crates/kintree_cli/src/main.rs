//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `kintree_core` linkage without any UI host.
//! - Print deterministic output for the built-in demo family.

use kintree_core::{PersonRegistry, TreeService};

fn main() {
    println!("kintree_core ping={}", kintree_core::ping());
    println!("kintree_core version={}", kintree_core::core_version());

    let registry = PersonRegistry::demo();
    match TreeService::new(&registry).render_view(None) {
        Ok(view) => {
            println!(
                "demo root={} nodes={} total={} male={} female={} generations={}",
                view.root_id,
                view.hierarchy.node_count(),
                view.stats.total,
                view.stats.male,
                view.stats.female,
                view.stats.generations
            );
        }
        Err(err) => eprintln!("demo tree unavailable: {err}"),
    }
}
