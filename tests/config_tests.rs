use rplanner::config::Config;
use rplanner::config::migrate::{add_missing_keys, missing_keys};
use rplanner::models::resource::Resource;
use rplanner::utils::path::resolve_in;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

mod common;
use common::rpl;

fn temp_conf(name: &str, content: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_rplanner.conf", name));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_default_config_is_valid() {
    let cfg = Config::default();
    assert_eq!(cfg.visible_days, 10);
    assert_eq!(cfg.grid_width, 1600.0);
    assert_eq!(cfg.resources.len(), 6);
    assert_eq!(cfg.resource("1").map(|r| r.name.as_str()), Some("Raphael"));
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut cfg = Config::default();
    cfg.visible_days = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = Config::default();
    cfg.grid_width = -1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = Config::default();
    cfg.resources.push(Resource::new("1", "Someone Else"));
    assert!(cfg.validate().is_err());
}

#[test]
fn test_missing_keys_are_reported_and_added() {
    let path = temp_conf("cfg_missing", "database: /tmp/x.sqlite\nvisible_days: 5\n");

    let missing = missing_keys(&path).unwrap();
    assert!(missing.contains(&"grid_width".to_string()));
    assert!(missing.contains(&"resources".to_string()));
    assert!(!missing.contains(&"database".to_string()));

    let added = add_missing_keys(&path).unwrap();
    assert_eq!(added.len(), missing.len());
    assert!(missing_keys(&path).unwrap().is_empty());

    // existing values are kept
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("visible_days: 5"));
    assert!(content.contains("/tmp/x.sqlite"));
}

#[test]
fn test_relative_database_names_land_in_base_dir() {
    let base = Path::new("/srv/rplanner");
    assert_eq!(resolve_in(base, "team.sqlite"), base.join("team.sqlite"));
    assert_eq!(resolve_in(base, "/data/p.sqlite"), PathBuf::from("/data/p.sqlite"));
}

#[test]
fn test_config_check_without_file_uses_defaults() {
    rpl("cfg_check_nofile")
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(predicates::str::contains("defaults in use"));
}
