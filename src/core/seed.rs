//! Demo allocations for an empty planner.

use crate::models::resource::Resource;
use crate::store::AllocationStore;

pub const DEMO_PROJECTS: [&str; 4] = ["CBTC SERRA", "CANCELAS AR-4", "PROJ X", "MANUTENÇÃO"];
const DEMO_HOURS: [f64; 3] = [2.0, 4.0, 6.0];

/// Populate a staggered demo load: resource `i` gets `(i % 3) + 1`
/// allocations spread over consecutive days. Does nothing when the store
/// already holds allocations. Returns the number created.
pub fn seed_demo(store: &mut AllocationStore, roster: &[Resource], visible_days: u32) -> usize {
    if !store.allocations().is_empty() || visible_days == 0 {
        return 0;
    }

    let mut created = 0;
    for (i, r) in roster.iter().enumerate() {
        for a in 0..(i % 3) + 1 {
            let project = DEMO_PROJECTS[(i + a) % DEMO_PROJECTS.len()];
            let day = ((i + a) % visible_days as usize) as u32;
            store.create_allocation(project, &r.id, day, DEMO_HOURS[a % 3], None);
            created += 1;
        }
    }
    created
}
