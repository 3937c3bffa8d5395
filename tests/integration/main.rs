//! Integration tests for the archcheck CLI
//!
//! Each test builds a project in a temporary directory and runs the binary
//! from inside it, the way a CI job would.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

use std::fs;

use archcheck::core::models::ArtifactName;
use assert_cmd::cargo;
use predicates::prelude::*;

use common::{Project, fixtures};

const SUMMARY: &str = "✓ Architecture conformance checks passed\n";

/// Helper function to create an archcheck command inside `project`
fn archcheck(project: &Project) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("archcheck"));
    cmd.current_dir(project.path()).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Check
// =============================================================================

#[test]
fn compliant_project_exits_zero() {
    let project = Project::compliant();

    archcheck(&project)
        .assert()
        .success()
        .stdout(predicate::str::ends_with(SUMMARY))
        .stdout(predicate::str::contains("✗").not());
}

#[test]
fn explicit_check_matches_default_run() {
    let project = Project::compliant();

    let default = archcheck(&project).output().unwrap();
    let explicit = archcheck(&project).arg("check").output().unwrap();

    assert_eq!(default.stdout, explicit.stdout);
}

#[test]
fn missing_service_is_the_only_line() {
    let project = Project::compliant();
    project.remove(ArtifactName::Service);

    archcheck(&project)
        .assert()
        .code(1)
        .stdout("✗ missing service artifact (src/cryptoinvest/service.py)\n");
}

#[test]
fn runs_are_idempotent() {
    let project = Project::compliant();
    project.write(
        ArtifactName::Service,
        &fixtures::SERVICE.replace("    return app\n", &format!("{}\n    return app\n", fixtures::STARTUP_HOOK)),
    );

    let first = archcheck(&project).output().unwrap();
    let second = archcheck(&project).output().unwrap();

    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn worker_without_closed_candle_slice_fails() {
    let project = Project::compliant();
    project.write(
        ArtifactName::Worker,
        &fixtures::WORKER.replace("raw.iloc[:-1] if len(raw) > 1 else raw", "raw"),
    );

    archcheck(&project)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ worker artifact does not drop the last"))
        .stdout(predicate::str::contains("Snapshot schema").not());
}

#[test]
fn compose_without_worker_fails_last() {
    let project = Project::compliant();
    project.write(ArtifactName::Compose, &fixtures::COMPOSE.replace("  worker:\n", ""));

    archcheck(&project)
        .assert()
        .code(1)
        .stdout(predicate::str::ends_with(
            "✗ deployment descriptor does not declare service worker\n",
        ));
}

#[test]
fn discovery_works_from_a_subdirectory() {
    let project = Project::compliant();

    archcheck(&project)
        .current_dir(project.path().join("src/cryptoinvest"))
        .assert()
        .success()
        .stdout(predicate::str::ends_with(SUMMARY));
}

#[test]
fn explicit_root_skips_discovery() {
    let project = Project::compliant();
    let elsewhere = tempfile::TempDir::new().unwrap();

    archcheck(&project)
        .current_dir(elsewhere.path())
        .arg("-C")
        .arg(project.path())
        .assert()
        .success();
}

#[test]
fn config_file_relocates_artifacts() {
    let project = Project::compliant();
    fs::create_dir_all(project.path().join("deploy")).unwrap();
    fs::rename(
        project.artifact_path(ArtifactName::Compose),
        project.path().join("deploy/compose.yml"),
    )
    .unwrap();

    archcheck(&project).assert().code(1);

    fs::write(
        project.path().join(".archcheck.toml"),
        "[artifacts]\ncompose = \"deploy/compose.yml\"\n",
    )
    .unwrap();
    archcheck(&project).assert().success();
}

#[test]
fn collect_all_reports_every_violation() {
    let project = Project::compliant();
    project.write(ArtifactName::Compose, &fixtures::COMPOSE.replace("  redis:\n", ""));
    project.write(ArtifactName::Worker, &fixtures::WORKER.replace("[:-1]", ""));

    archcheck(&project)
        .args(["check", "--all"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ worker artifact does not drop the last"))
        .stdout(predicate::str::contains("✗ deployment descriptor does not declare service redis"))
        .stdout(predicate::str::ends_with("✗ 2 architecture violation(s)\n"));
}

#[test]
fn json_report_on_failure() {
    let project = Project::compliant();
    project.remove(ArtifactName::Snapshot);

    let output = archcheck(&project).arg("--json").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["passed"], false);
    assert_eq!(report["failed_at"], "snapshot-exists");
    assert_eq!(
        report["results"].as_array().unwrap().last().unwrap()["message"],
        "missing snapshot artifact (src/cryptoinvest/snapshot.py)"
    );
}

// =============================================================================
// Infrastructure errors
// =============================================================================

#[test]
fn unreadable_artifact_exits_two() {
    let project = Project::compliant();
    project.remove(ArtifactName::Service);
    fs::create_dir(project.artifact_path(ArtifactName::Service)).unwrap();

    archcheck(&project)
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("infrastructure error"))
        .stderr(predicate::str::contains("service"));
}

#[test]
fn artifacts_agree_with_check_on_unreadable_artifact() {
    let project = Project::compliant();
    project.remove(ArtifactName::Service);
    fs::create_dir(project.artifact_path(ArtifactName::Service)).unwrap();

    archcheck(&project)
        .arg("artifacts")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot read service artifact"));
}

#[test]
fn invalid_config_exits_two() {
    let project = Project::compliant();
    fs::write(project.path().join(".archcheck.toml"), "[artifacts]\nqueue = \"q.py\"\n").unwrap();

    archcheck(&project)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown artifact: queue"));
}

#[test]
fn missing_explicit_root_exits_two() {
    let project = Project::compliant();

    archcheck(&project)
        .args(["-C", "does/not/exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}

// =============================================================================
// Listings
// =============================================================================

#[test]
fn rules_are_listed_in_order() {
    let project = Project::compliant();

    let output = archcheck(&project).arg("rules").output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();

    let service = text.find("service-exists").unwrap();
    let endpoints = text.find("service-endpoints").unwrap();
    let compose = text.find("compose-topology").unwrap();
    assert!(service < endpoints && endpoints < compose);
}

#[test]
fn rules_json_lists_every_rule() {
    let project = Project::compliant();

    let output = archcheck(&project).args(["rules", "--json"]).output().unwrap();
    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let rules = listing["rules"].as_array().unwrap();
    assert_eq!(rules.len(), 14);
    assert_eq!(rules[0]["predicate"], "file-exists");
}

#[test]
fn artifacts_show_presence() {
    let project = Project::compliant();
    project.remove(ArtifactName::Store);

    let output = archcheck(&project).args(["artifacts", "--json"]).output().unwrap();
    assert!(output.status.success());
    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let artifacts = listing["artifacts"].as_array().unwrap();
    assert_eq!(artifacts.len(), 5);
    let store = artifacts.iter().find(|a| a["name"] == "store").unwrap();
    assert_eq!(store["present"], false);
    assert_eq!(store["path"], "src/cryptoinvest/store.py");
}

#[test]
fn version_flag() {
    let project = Project::compliant();

    archcheck(&project)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
