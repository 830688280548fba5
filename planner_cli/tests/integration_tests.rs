//! Integration tests for the wplan binary.
//!
//! These tests verify end-to-end behavior including:
//! - Plan generation in text and JSON form
//! - Seeded reproducibility
//! - Catalog loading from CSV and config
//! - Input validation failures

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a test directory holding an empty config file
fn setup_test_dir() -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "").expect("Failed to write config");
    (temp_dir, config_path)
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("wplan"))
}

fn plan_json(config: &PathBuf, extra: &[&str]) -> serde_json::Value {
    let output = cli()
        .arg("--config")
        .arg(config)
        .args(["plan", "--weight", "70", "--height", "1.75", "--json"])
        .args(extra)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    serde_json::from_slice(&output).expect("plan output should be JSON")
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personalized workout plan generator"));
}

#[test]
fn test_plan_text_output() {
    let (_temp_dir, config) = setup_test_dir();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["plan", "--weight", "70", "--height", "1.75", "--days", "2", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your calculated BMI is: 22.9"))
        .stdout(predicate::str::contains("Planning for focus: General_Fitness"))
        .stdout(predicate::str::contains("Day 1:"))
        .stdout(predicate::str::contains("Day 2:"))
        .stdout(predicate::str::contains("Prescription:"));
}

#[test]
fn test_plan_json_has_requested_days() {
    let (_temp_dir, config) = setup_test_dir();

    let plan = plan_json(&config, &["--days", "4", "--per-day", "3", "--seed", "9"]);
    let days = plan.as_object().expect("plan should be an object");

    let labels: Vec<_> = days.keys().cloned().collect();
    assert_eq!(labels, vec!["Day 1", "Day 2", "Day 3", "Day 4"]);

    for exercises in days.values() {
        for ex in exercises.as_array().unwrap() {
            assert!(ex["Exercise"].is_string());
            assert!(ex["Type"].is_string());
            assert!(ex["BodyPart"].is_string());
            assert!(ex["Sets"].as_u64().unwrap() >= 3);
            assert!(ex["Reps"].as_u64().unwrap() >= 8);
        }
    }
}

#[test]
fn test_same_seed_same_output() {
    let (_temp_dir, config) = setup_test_dir();
    let args = [
        "--days", "5", "--per-day", "6", "--focus", "Weight_Loss", "--prefer", "hiit",
        "--body-parts", "Glutes,Chest", "--seed", "2024",
    ];

    let first = plan_json(&config, &args);
    let second = plan_json(&config, &args);
    assert_eq!(first, second);
}

#[test]
fn test_seed_from_config() {
    let (temp_dir, _) = setup_test_dir();
    let config = temp_dir.path().join("seeded.toml");
    fs::write(&config, "[planner]\nseed = 31\n").unwrap();

    let first = plan_json(&config, &["--days", "3"]);
    let second = plan_json(&config, &["--days", "3"]);
    assert_eq!(first, second);
}

#[test]
fn test_goal_override() {
    let (_temp_dir, config) = setup_test_dir();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["plan", "--weight", "70", "--height", "1.75", "--focus", "General_Fitness"])
        .args(["--goal", "muscle", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planning for focus: Muscle_Gain"))
        .stdout(predicate::str::contains("Strength, Powerlifting"));
}

#[test]
fn test_preference_message() {
    let (_temp_dir, config) = setup_test_dir();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["plan", "--weight", "70", "--height", "1.75", "--prefer", "strength"])
        .assert()
        .success()
        .stdout(predicate::str::contains("primarily use Strength workouts"));
}

#[test]
fn test_csv_catalog() {
    let (temp_dir, config) = setup_test_dir();
    let catalog = temp_dir.path().join("exercises.csv");
    fs::write(
        &catalog,
        "Title,Type,BodyPart,Level\n\
         Kettlebell Deadlift,Strength,Legs,Beginner\n\
         Farmer Carry,Strength,Forearms,Beginner\n",
    )
    .unwrap();

    let plan = plan_json(
        &config,
        &["--catalog", catalog.to_str().unwrap(), "--days", "2", "--seed", "5"],
    );

    let titles: Vec<String> = plan
        .as_object()
        .unwrap()
        .values()
        .flat_map(|day| day.as_array().unwrap().clone())
        .map(|ex| ex["Exercise"].as_str().unwrap().to_string())
        .collect();
    assert!(!titles.is_empty());
    assert!(titles
        .iter()
        .all(|t| t == "Kettlebell Deadlift" || t == "Farmer Carry"));
}

#[test]
fn test_csv_catalog_missing_columns_fails() {
    let (temp_dir, config) = setup_test_dir();
    let catalog = temp_dir.path().join("broken.csv");
    fs::write(&catalog, "Title,Type\nPush-up,Strength\n").unwrap();

    cli()
        .arg("--config")
        .arg(&config)
        .arg("--catalog")
        .arg(&catalog)
        .args(["plan", "--weight", "70", "--height", "1.75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required column"));
}

#[test]
fn test_invalid_days_fails() {
    let (_temp_dir, config) = setup_test_dir();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["plan", "--weight", "70", "--height", "1.75", "--days", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("workout days"));
}

#[test]
fn test_unknown_body_part_fails() {
    let (_temp_dir, config) = setup_test_dir();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["plan", "--weight", "70", "--height", "1.75", "--body-parts", "Elbows"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown body part"));
}

#[test]
fn test_bmi_command() {
    let (_temp_dir, config) = setup_test_dir();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["bmi", "--weight", "100", "--height", "1.8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your calculated BMI is: 30.9"))
        .stdout(predicate::str::contains("Fat_Loss"))
        .stdout(predicate::str::contains(
            "Consult a healthcare professional for personalized advice.",
        ));
}

#[test]
fn test_bmi_command_healthy_band() {
    let (_temp_dir, config) = setup_test_dir();

    cli()
        .arg("--config")
        .arg(&config)
        .args(["bmi", "--weight", "70", "--height", "1.75"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fitness goal: Maintain a healthy weight and focus on overall fitness.",
        ));
}

#[test]
fn test_init_config_writes_loadable_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = temp_dir.path().join("wplan").join("config.toml");

    cli()
        .arg("--config")
        .arg(&config)
        .arg("init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let contents = fs::read_to_string(&config).unwrap();
    assert!(contents.contains("finisher_placement = \"literal\""));

    // The written file is accepted by the plan command
    plan_json(&config, &["--days", "1", "--seed", "4"]);

    cli()
        .arg("--config")
        .arg(&config)
        .arg("init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cli()
        .arg("--config")
        .arg(&config)
        .args(["init-config", "--force"])
        .assert()
        .success();
}

#[test]
fn test_catalog_command() {
    let (_temp_dir, config) = setup_test_dir();

    cli()
        .arg("--config")
        .arg(&config)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("45 exercises"))
        .stdout(predicate::str::contains("stretching"));
}
