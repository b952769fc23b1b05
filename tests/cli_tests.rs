use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, rpl, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rpl("cli_init")
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_resources_lists_default_roster() {
    let db_path = init_db("cli_resources");

    rpl("cli_resources")
        .args(["--db", &db_path, "resources"])
        .assert()
        .success()
        .stdout(contains("Raphael").and(contains("Antônio Leal")));
}

#[test]
fn test_alloc_add_and_list() {
    let db_path = init_db("cli_alloc_add");

    rpl("cli_alloc_add")
        .args(["--db", &db_path, "alloc", "add", "CBTC SERRA", "1", "0", "6"])
        .assert()
        .success()
        .stdout(contains("Allocation #1 created: CBTC SERRA on Raphael day 0 (6h)"));

    rpl("cli_alloc_add")
        .args(["--db", &db_path, "alloc", "list"])
        .assert()
        .success()
        .stdout(contains("CBTC SERRA").and(contains("Raphael")));
}

#[test]
fn test_alloc_add_unknown_resource_fails() {
    let db_path = init_db("cli_alloc_unknown");

    rpl("cli_alloc_unknown")
        .args(["--db", &db_path, "alloc", "add", "X", "99", "0", "2"])
        .assert()
        .failure()
        .stderr(contains("Unknown resource: 99"));
}

#[test]
fn test_demand_is_auto_placed() {
    let db_path = init_db("cli_demand");

    rpl("cli_demand")
        .args(["--db", &db_path, "alloc", "add", "OLD", "1", "0", "6"])
        .assert()
        .success();

    rpl("cli_demand")
        .args(["--db", &db_path, "demand", "4", "--project", "PROJ X"])
        .assert()
        .success()
        .stdout(contains("Allocated PROJ X (4h) on Abner Orra day 0"));
}

#[test]
fn test_demand_larger_than_a_day_is_rejected() {
    let db_path = init_db("cli_demand_full");

    rpl("cli_demand_full")
        .args(["--db", &db_path, "demand", "12"])
        .assert()
        .success()
        .stdout(contains("No capacity available for 12h"));

    rpl("cli_demand_full")
        .args(["--db", &db_path, "alloc", "list"])
        .assert()
        .success()
        .stdout(contains("No allocations."));
}

#[test]
fn test_move_and_resize() {
    let db_path = init_db("cli_gestures");

    rpl("cli_gestures")
        .args(["--db", &db_path, "alloc", "add", "PROJ X", "1", "1", "4"])
        .assert()
        .success();

    rpl("cli_gestures")
        .args(["--db", &db_path, "alloc", "move", "1", "2", "--day", "3"])
        .assert()
        .success()
        .stdout(contains("Allocation #1 moved to Abner Orra day 3."));

    rpl("cli_gestures")
        .args(["--db", &db_path, "alloc", "resize", "1", "--day", "5"])
        .assert()
        .success()
        .stdout(contains("Allocation #1 now spans 3 day(s), 24h."));

    // pointer past the window clamps to the last visible day
    rpl("cli_gestures")
        .args(["--db", &db_path, "alloc", "resize", "1", "--x", "99999"])
        .assert()
        .success()
        .stdout(contains("now spans 7 day(s), 56h."));
}

#[test]
fn test_gesture_on_missing_allocation_is_stale() {
    let db_path = init_db("cli_stale");

    rpl("cli_stale")
        .args(["--db", &db_path, "alloc", "resize", "42", "--day", "2"])
        .assert()
        .success()
        .stdout(contains("Allocation #42 not found, nothing changed."));

    rpl("cli_stale")
        .args(["--db", &db_path, "alloc", "del", "42"])
        .assert()
        .success()
        .stdout(contains("not found"));
}

#[test]
fn test_move_requires_a_target() {
    let db_path = init_db("cli_move_target");

    rpl("cli_move_target")
        .args(["--db", &db_path, "alloc", "move", "1", "2"])
        .assert()
        .failure();
}

#[test]
fn test_move_into_full_cell_warns_overbooked() {
    let db_path = init_db("cli_overbook");

    rpl("cli_overbook")
        .args(["--db", &db_path, "alloc", "add", "A", "1", "0", "6"])
        .assert()
        .success();
    rpl("cli_overbook")
        .args(["--db", &db_path, "alloc", "add", "B", "2", "0", "6"])
        .assert()
        .success();

    rpl("cli_overbook")
        .args(["--db", &db_path, "alloc", "move", "2", "1", "--day", "0"])
        .assert()
        .success()
        .stdout(contains("Raphael is overbooked on day 0: 12h of 8h"));
}

#[test]
fn test_log_validation_rejections() {
    let db_path = init_db("cli_log_rules");

    rpl("cli_log_rules")
        .args(["--db", &db_path, "log", "add", "1", "2025-03-03", "P1", "design", "20"])
        .assert()
        .success()
        .stdout(contains("Time log #1 added"));

    rpl("cli_log_rules")
        .args(["--db", &db_path, "log", "add", "1", "2025-03-03", "P2", "review", "5"])
        .assert()
        .success()
        .stdout(contains("cannot exceed 24h"));

    rpl("cli_log_rules")
        .args(["--db", &db_path, "log", "add", "1", "2025-03-03", "P1", "design", "1"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    rpl("cli_log_rules")
        .args(["--db", &db_path, "log", "list", "--who", "1"])
        .assert()
        .success()
        .stdout(contains("Total: 20.00h in 1 log(s)"));
}

#[test]
fn test_log_add_rejects_bad_input() {
    let db_path = init_db("cli_log_input");

    rpl("cli_log_input")
        .args(["--db", &db_path, "log", "add", "1", "03/03/2025", "P1", "design", "2"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    rpl("cli_log_input")
        .args(["--db", &db_path, "log", "add", "1", "2025-03-03", "P1", "design", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid hours"));

    rpl("cli_log_input")
        .args([
            "--db", &db_path, "log", "add", "1", "2025-03-03", "P1", "design", "2", "--phase", "XYZ",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid project phase"));
}

#[test]
fn test_sync_uses_pinned_today_and_is_idempotent() {
    let db_path = init_db("cli_sync");

    rpl("cli_sync")
        .args(["--db", &db_path, "alloc", "add", "DEMO", "1", "2", "16", "--span", "2"])
        .assert()
        .success();

    rpl("cli_sync")
        .args(["--db", &db_path, "--today", "2024-01-01", "sync"])
        .assert()
        .success()
        .stdout(contains("1 time log(s) created"));

    rpl("cli_sync")
        .args(["--db", &db_path, "--today", "2024-01-01", "sync"])
        .assert()
        .success()
        .stdout(contains("0 time log(s) created").and(contains("1 allocation(s) already projected")));

    rpl("cli_sync")
        .args(["--db", &db_path, "log", "list", "--date", "2024-01-03"])
        .assert()
        .success()
        .stdout(contains("allocation").and(contains("16.00")));
}

#[test]
fn test_seed_then_plan() {
    let db_path = init_db("cli_seed");

    rpl("cli_seed")
        .args(["--db", &db_path, "seed"])
        .assert()
        .success()
        .stdout(contains("Seeded 12 demo allocation(s)."));

    rpl("cli_seed")
        .args(["--db", &db_path, "seed"])
        .assert()
        .success()
        .stdout(contains("nothing seeded"));

    rpl("cli_seed")
        .args(["--db", &db_path, "--today", "2025-03-03", "plan"])
        .assert()
        .success()
        .stdout(contains("Raphael").and(contains("CBTC SERRA")));
}

#[test]
fn test_projects_add_list_close() {
    let db_path = init_db("cli_projects");

    rpl("cli_projects")
        .args(["--db", &db_path, "project", "add", "CBTC SERRA", "--code", "CB-01"])
        .assert()
        .success()
        .stdout(contains("Project 'CBTC SERRA' added as p-1."));

    rpl("cli_projects")
        .args(["--db", &db_path, "project", "close", "p-1"])
        .assert()
        .success()
        .stdout(contains("Project p-1 closed."));

    rpl("cli_projects")
        .args(["--db", &db_path, "project", "list"])
        .assert()
        .success()
        .stdout(contains("CB-01").and(contains("closed")));
}

#[test]
fn test_audit_records_operations() {
    let db_path = init_db("cli_audit");

    rpl("cli_audit")
        .args(["--db", &db_path, "alloc", "add", "X", "1", "0", "2"])
        .assert()
        .success();

    rpl("cli_audit")
        .args(["--db", &db_path, "audit", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied").and(contains("alloc_add")));
}

#[test]
fn test_db_info_and_check() {
    let db_path = init_db("cli_db_info");

    rpl("cli_db_info")
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success();

    rpl("cli_db_info")
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_invalid_today_is_refused() {
    let db_path = init_db("cli_bad_today");

    rpl("cli_bad_today")
        .args(["--db", &db_path, "--today", "yesterday", "plan"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_alloc_add_outside_visible_window_is_refused() {
    let db_path = init_db("cli_alloc_window");

    rpl("cli_alloc_window")
        .args(["--db", &db_path, "alloc", "add", "P", "1", "4294967295", "8", "--span", "2"])
        .assert()
        .failure()
        .stderr(contains("outside the visible window"));

    rpl("cli_alloc_window")
        .args(["--db", &db_path, "alloc", "add", "P", "1", "10", "8"])
        .assert()
        .failure();

    rpl("cli_alloc_window")
        .args(["--db", &db_path, "plan"])
        .assert()
        .success()
        .stdout(contains("No allocations yet"));
}

#[test]
fn test_plan_lists_allocations_once_present() {
    let db_path = init_db("cli_plan_list");

    rpl("cli_plan_list")
        .args(["--db", &db_path, "alloc", "add", "PROJ X", "1", "9", "8", "--span", "3"])
        .assert()
        .success();

    rpl("cli_plan_list")
        .args(["--db", &db_path, "plan"])
        .assert()
        .success()
        .stdout(contains("day 9..11").and(contains("No allocations yet").not()));
}
