//! One-way projection of allocations into the time-log ledger.

use super::ALLOCATION_ACTIVITY;
use crate::errors::ValidationError;
use crate::models::allocation::{Allocation, AllocationId};
use crate::models::demand_type::DemandType;
use crate::models::phase::ProjectPhase;
use crate::models::resource::{Resource, display_name};
use crate::models::time_log::NewTimeLog;
use crate::store::AllocationStore;
use chrono::{Days, NaiveDate};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SyncReport {
    /// Logs written by this pass.
    pub created: usize,
    /// Allocations whose projected log was already in the ledger.
    pub already_projected: usize,
    /// Allocations the ledger refused; they stay unprojected until a later pass.
    pub rejected: Vec<(AllocationId, ValidationError)>,
    /// Allocations whose day offset lands past the last representable date.
    pub unprojectable: Vec<AllocationId>,
}

/// Calendar date an allocation lands on when projected from `reference`.
pub fn projected_date(reference: NaiveDate, allocation: &Allocation) -> Option<NaiveDate> {
    reference.checked_add_days(Days::new(allocation.day as u64))
}

/// Create one log per allocation that has no matching log yet.
///
/// Day offsets are resolved against the store clock's current date, so the
/// same allocation can land on a different date when synced on another day.
/// Rejections and unprojectable offsets are collected, never raised, and existing logs are never
/// touched. Running it twice in a row creates nothing the second time.
pub fn sync_allocations_to_logs(store: &mut AllocationStore, roster: &[Resource]) -> SyncReport {
    let reference = store.today();
    let allocations = store.allocations().to_vec();
    let mut report = SyncReport::default();

    for a in &allocations {
        let Some(date) = projected_date(reference, a) else {
            report.unprojectable.push(a.id);
            continue;
        };

        if store
            .find_log(&a.resource_id, date, &a.project, ALLOCATION_ACTIVITY)
            .is_some()
        {
            report.already_projected += 1;
            continue;
        }

        let entry = NewTimeLog {
            collaborator_id: a.resource_id.clone(),
            collaborator_name: display_name(roster, &a.resource_id).to_string(),
            date,
            demand_type: DemandType::Project,
            project_id: a.project.clone(),
            project_name: a.project.clone(),
            phase: ProjectPhase::NotApplicable,
            activity_type: ALLOCATION_ACTIVITY.to_string(),
            hours: a.hours,
            observation: Some(format!("Projected from allocation #{}", a.id)),
        };

        match store.create_log(entry) {
            Ok(_) => report.created += 1,
            Err(e) => report.rejected.push((a.id, e)),
        }
    }

    report
}
