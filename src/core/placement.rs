//! First-fit placement of new demand on the capacity grid.

use super::capacity::CapacityIndex;
use crate::models::resource::Resource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub resource_id: String,
    pub day: u32,
}

/// Earliest `(resource, day)` whose start cell can absorb `hours`.
///
/// Scan order is day-major, resource-minor, following the roster order.
/// No packing is attempted: the first cell where
/// `hours_used + hours <= capacity` wins. Returns `None` when nothing in
/// `0..visible_days` fits.
pub fn auto_fit(
    index: &CapacityIndex,
    resources: &[Resource],
    visible_days: u32,
    capacity: f64,
    hours: f64,
) -> Option<Slot> {
    (0..visible_days).find_map(|day| {
        resources
            .iter()
            .find(|r| index.hours_used(&r.id, day) + hours <= capacity)
            .map(|r| Slot {
                resource_id: r.id.clone(),
                day,
            })
    })
}

/// Number of grid days a demand of `hours` covers when rendered.
pub fn span_for_hours(hours: f64, capacity: f64) -> u32 {
    let days = (hours / capacity).ceil();
    if days.is_finite() && days >= 1.0 {
        days as u32
    } else {
        1
    }
}
