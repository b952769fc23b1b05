use super::HOURS_PER_DAY;
use super::placement::{Slot, auto_fit, span_for_hours};
use crate::errors::{AppError, AppResult};
use crate::models::allocation::AllocationId;
use crate::models::resource::Resource;
use crate::store::AllocationStore;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedDemand {
    pub id: AllocationId,
    pub slot: Slot,
    pub span_days: u32,
}

/// Place new demand in the first feasible slot and create its allocation.
///
/// Nothing is written when no slot fits.
pub fn create_demand(
    store: &mut AllocationStore,
    roster: &[Resource],
    visible_days: u32,
    project: &str,
    hours: f64,
) -> AppResult<PlacedDemand> {
    if hours.is_nan() || hours <= 0.0 {
        return Err(AppError::InvalidHours(format!(
            "demand must be greater than 0h (got {})",
            hours
        )));
    }

    let slot = auto_fit(
        store.capacity(),
        roster,
        visible_days,
        HOURS_PER_DAY,
        hours,
    )
    .ok_or(AppError::NoCapacityAvailable { hours })?;

    let span_days = span_for_hours(hours, HOURS_PER_DAY);
    let id = store.create_allocation(project, &slot.resource_id, slot.day, hours, Some(span_days));

    Ok(PlacedDemand {
        id,
        slot,
        span_days,
    })
}
