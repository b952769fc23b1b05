#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rplanner::core::clock::FixedClock;
use rplanner::core::gesture::GridGeometry;
use rplanner::models::resource::Resource;
use rplanner::models::time_log::NewTimeLog;
use rplanner::planner::Planner;
use rplanner::store::AllocationStore;
use rplanner::store::persistence::MemoryBackend;
use std::env;
use std::fs;
use std::path::PathBuf;

/// CLI command isolated from the user's real configuration: HOME points to
/// a per-test directory so defaults are used.
pub fn rpl(name: &str) -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_rplanner_home", name));
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rplanner");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rplanner.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh DB initialized through the CLI.
pub fn init_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    rpl(name)
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn roster(ids: &[&str]) -> Vec<Resource> {
    ids.iter()
        .map(|id| Resource::new(*id, format!("Name {}", id)))
        .collect()
}

pub fn store_on(day: &str) -> AllocationStore {
    AllocationStore::new(Box::new(FixedClock::on(date(day))))
}

pub fn planner_on(day: &str, ids: &[&str]) -> Planner<MemoryBackend> {
    planner_with(MemoryBackend::new(), day, ids)
}

pub fn planner_with(backend: MemoryBackend, day: &str, ids: &[&str]) -> Planner<MemoryBackend> {
    Planner::load(
        backend,
        Box::new(FixedClock::on(date(day))),
        roster(ids),
        GridGeometry::new(1600.0, 10),
    )
    .expect("planner loads")
}

/// Minimal log entry; override fields with struct update syntax.
pub fn entry(who: &str, day: &str, project: &str, activity: &str, hours: f64) -> NewTimeLog {
    use rplanner::models::demand_type::DemandType;
    use rplanner::models::phase::ProjectPhase;

    NewTimeLog {
        collaborator_id: who.to_string(),
        collaborator_name: format!("Name {}", who),
        date: date(day),
        demand_type: DemandType::Project,
        project_id: project.to_string(),
        project_name: project.to_string(),
        phase: ProjectPhase::NotApplicable,
        activity_type: activity.to_string(),
        hours,
        observation: None,
    }
}
