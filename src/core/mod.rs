pub mod capacity;
pub mod clock;
pub mod demand;
pub mod gesture;
pub mod placement;
pub mod reconcile;
pub mod seed;

/// Per-day capacity of one resource on the planning grid.
pub const HOURS_PER_DAY: f64 = 8.0;

/// Ceiling on logged hours for one collaborator on one date.
pub const MAX_DAILY_HOURS: f64 = 24.0;

/// Activity type stamped on logs projected from allocations.
pub const ALLOCATION_ACTIVITY: &str = "allocation";
