use rplanner::core::ALLOCATION_ACTIVITY;
use rplanner::core::clock::FixedClock;
use rplanner::core::reconcile::{projected_date, sync_allocations_to_logs};
use rplanner::errors::ValidationError;
use rplanner::models::phase::ProjectPhase;
use rplanner::store::AllocationStore;

mod common;
use common::{date, entry, roster, store_on};

#[test]
fn test_sync_projects_allocation_from_today() {
    let mut store = store_on("2024-01-01");
    let people = roster(&["R1"]);
    store.create_allocation("DEMO", "R1", 2, 16.0, Some(2));

    let report = sync_allocations_to_logs(&mut store, &people);

    assert_eq!(report.created, 1);
    assert!(report.rejected.is_empty());
    let log = &store.logs()[0];
    assert_eq!(log.date, date("2024-01-03"));
    assert_eq!(log.hours, 16.0);
    assert_eq!(log.activity_type, ALLOCATION_ACTIVITY);
    assert_eq!(log.project_id, "DEMO");
    assert_eq!(log.collaborator_id, "R1");
    assert_eq!(log.collaborator_name, "Name R1");
    assert_eq!(log.phase, ProjectPhase::NotApplicable);
}

#[test]
fn test_sync_is_idempotent() {
    let mut store = store_on("2024-01-01");
    let people = roster(&["R1", "R2"]);
    store.create_allocation("DEMO", "R1", 2, 16.0, Some(2));
    store.create_allocation("PROJ X", "R2", 0, 4.0, None);

    assert_eq!(sync_allocations_to_logs(&mut store, &people).created, 2);

    let again = sync_allocations_to_logs(&mut store, &people);
    assert_eq!(again.created, 0);
    assert_eq!(again.already_projected, 2);
    assert_eq!(store.logs().len(), 2);
}

#[test]
fn test_sync_never_touches_existing_logs() {
    let mut store = store_on("2024-01-01");
    let people = roster(&["R1"]);
    store.create_allocation("DEMO", "R1", 0, 4.0, None);
    let mut manual = entry("R1", "2024-01-01", "DEMO", ALLOCATION_ACTIVITY, 1.0);
    manual.collaborator_name = "Manual".into();
    store.create_log(manual).unwrap();

    let report = sync_allocations_to_logs(&mut store, &people);

    assert_eq!(report.created, 0);
    assert_eq!(report.already_projected, 1);
    assert_eq!(store.logs()[0].hours, 1.0);
}

#[test]
fn test_sync_collects_rejections_and_retries_later() {
    let mut store = store_on("2024-01-01");
    let people = roster(&["R1"]);
    let full = store.create_log(entry("R1", "2024-01-01", "OTHER", "design", 20.0)).unwrap();
    let blocked = store.create_allocation("DEMO", "R1", 0, 8.0, None);
    store.create_allocation("PROJ X", "R1", 1, 4.0, None);

    let report = sync_allocations_to_logs(&mut store, &people);
    assert_eq!(report.created, 1);
    assert_eq!(report.rejected, vec![(blocked, ValidationError::DailyCapExceeded)]);

    // freeing capacity lets a later pass pick it up
    store.delete_log(full);
    let retry = sync_allocations_to_logs(&mut store, &people);
    assert_eq!(retry.created, 1);
    assert!(retry.rejected.is_empty());
}

#[test]
fn test_sync_on_another_day_lands_on_another_date() {
    let people = roster(&["R1"]);
    let mut first = store_on("2024-01-01");
    first.create_allocation("DEMO", "R1", 2, 4.0, None);
    sync_allocations_to_logs(&mut first, &people);

    let mut later = AllocationStore::from_parts(
        first.allocations().to_vec(),
        first.logs().to_vec(),
        Vec::new(),
        Box::new(FixedClock::on(date("2024-01-02"))),
    );
    let report = sync_allocations_to_logs(&mut later, &people);

    assert_eq!(report.created, 1);
    let dates: Vec<_> = later.logs().iter().map(|l| l.date).collect();
    assert!(dates.contains(&date("2024-01-03")));
    assert!(dates.contains(&date("2024-01-04")));
}

#[test]
fn test_projected_date_adds_day_offset() {
    let mut store = store_on("2024-02-27");
    let id = store.create_allocation("X", "R1", 3, 1.0, None);
    let a = store.allocation(id).unwrap();
    assert_eq!(projected_date(date("2024-02-27"), a), Some(date("2024-03-01")));
}

#[test]
fn test_unknown_resource_falls_back_to_id() {
    let mut store = store_on("2024-01-01");
    store.create_allocation("X", "ghost", 0, 1.0, None);
    sync_allocations_to_logs(&mut store, &roster(&["R1"]));
    assert_eq!(store.logs()[0].collaborator_name, "ghost");
}

#[test]
fn test_offsets_past_the_calendar_are_reported() {
    let mut store = store_on("2024-01-01");
    let far = store.create_allocation("X", "R1", u32::MAX, 1.0, None);
    store.create_allocation("Y", "R1", 0, 1.0, None);

    let report = sync_allocations_to_logs(&mut store, &roster(&["R1"]));

    assert_eq!(report.created, 1);
    assert_eq!(report.unprojectable, vec![far]);
    assert!(report.rejected.is_empty());
    assert_eq!(store.logs().len(), 1);
}
