//! Integration tests for the entigen binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn entigen() -> Command {
    Command::cargo_bin("entigen").unwrap()
}

fn init_service(dir: &TempDir, extra: &[&str]) {
    let mut cmd = entigen();
    cmd.current_dir(dir.path())
        .args(["init", "--app-name", "myapp"])
        .args(extra)
        .assert()
        .success();
}

#[test]
fn help_flag() {
    entigen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("entity"))
        .stdout(predicate::str::contains("init"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn version_flag() {
    entigen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stderr(predicate::str::is_empty());
}

#[test]
fn init_writes_service_metadata() {
    let dir = TempDir::new().unwrap();
    init_service(&dir, &["--database", "mongodb"]);

    let raw = fs::read_to_string(dir.path().join(".entigen/service.json")).unwrap();
    assert!(raw.contains("\"applicationName\": \"myapp\""));
    assert!(raw.contains("\"databaseType\": \"mongodb\""));
}

#[test]
fn init_twice_requires_force() {
    let dir = TempDir::new().unwrap();
    init_service(&dir, &[]);

    entigen()
        .current_dir(dir.path())
        .args(["init", "--app-name", "other"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    entigen()
        .current_dir(dir.path())
        .args(["init", "--app-name", "other", "--force"])
        .assert()
        .success();
}

#[test]
fn entity_generation_persists_record_and_artifacts() {
    let dir = TempDir::new().unwrap();
    init_service(&dir, &[]);

    entigen()
        .current_dir(dir.path())
        .args([
            "entity",
            "Foo",
            "--field",
            "title:String",
            "--dto",
            "mapstruct",
            "--service-layer",
            "service-class",
        ])
        .assert()
        .success();

    let record = fs::read_to_string(dir.path().join(".entigen/Foo.json")).unwrap();
    assert!(record.contains("\"dto\": \"mapstruct\""));
    assert!(record.contains("\"changelogDate\""));

    assert!(dir.path().join("server/src/repository/foo_repository.rs").is_file());
    assert!(dir.path().join("server/src/service/foo_service.rs").is_file());
    assert!(dir.path().join("server/src/service/mapper/foo_mapper.rs").is_file());
    assert!(dir.path().join("client/src/app/entities/foo/foo.model.ts").is_file());
}

#[test]
fn entity_name_is_normalised() {
    let dir = TempDir::new().unwrap();
    init_service(&dir, &[]);

    entigen()
        .current_dir(dir.path())
        .args(["entity", "bank-account"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BankAccount"));

    assert!(dir.path().join(".entigen/BankAccount.json").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    init_service(&dir, &[]);

    entigen()
        .current_dir(dir.path())
        .args(["entity", "Foo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!dir.path().join(".entigen/Foo.json").exists());
    assert!(!dir.path().join("server").exists());
}

#[test]
fn entity_without_init_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();

    entigen()
        .current_dir(dir.path())
        .args(["entity", "Foo"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("entigen init"));
}

#[test]
fn conflicting_options_exit_as_user_error() {
    let dir = TempDir::new().unwrap();
    init_service(&dir, &[]);

    entigen()
        .current_dir(dir.path())
        .args([
            "entity",
            "Foo",
            "--dto",
            "mapstruct",
            "--service-layer",
            "no",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("conflicting options"));

    assert!(!dir.path().join(".entigen/Foo.json").exists());
}

#[test]
fn invalid_field_spec_is_rejected() {
    let dir = TempDir::new().unwrap();
    init_service(&dir, &[]);

    entigen()
        .current_dir(dir.path())
        .args(["entity", "Foo", "--field", "title"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("name:Type"));
}

#[test]
fn list_shows_persisted_entities() {
    let dir = TempDir::new().unwrap();
    init_service(&dir, &[]);

    entigen()
        .current_dir(dir.path())
        .args(["entity", "Zebra"])
        .assert()
        .success();
    entigen()
        .current_dir(dir.path())
        .args(["entity", "Apple"])
        .assert()
        .success();

    entigen()
        .current_dir(dir.path())
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Apple\nZebra"));

    entigen()
        .current_dir(dir.path())
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Apple\""));
}

#[test]
fn gateway_imports_entity_from_microservice() {
    // Owning microservice generates Bar.
    let micro = TempDir::new().unwrap();
    entigen()
        .current_dir(micro.path())
        .args(["init", "--app-name", "inventory", "--app-type", "microservice"])
        .assert()
        .success();
    entigen()
        .current_dir(micro.path())
        .args(["entity", "Bar", "--field", "amount:Long"])
        .assert()
        .success();

    // Microservice entities have no client tier of their own.
    assert!(!micro.path().join("client").exists());

    // Gateway consumes it by path.
    let gateway = TempDir::new().unwrap();
    entigen()
        .current_dir(gateway.path())
        .args([
            "init",
            "--app-name",
            "portal",
            "--app-type",
            "gateway",
            "--with-translation",
            "--languages",
            "en",
        ])
        .assert()
        .success();

    entigen()
        .current_dir(gateway.path())
        .args(["entity", "Bar", "--from-service"])
        .arg(micro.path())
        .assert()
        .success();

    let record = fs::read_to_string(gateway.path().join(".entigen/Bar.json")).unwrap();
    assert!(record.contains("\"microserviceName\": \"inventory\""));
    assert!(record.contains("\"clientRootFolder\": \"inventory\""));

    // Client artifacts under the owning service's namespace; no server tier.
    assert!(
        gateway
            .path()
            .join("client/src/app/entities/inventory/bar/bar.model.ts")
            .is_file()
    );
    assert!(
        gateway
            .path()
            .join("client/src/i18n/en/inventoryBar.json")
            .is_file()
    );
    assert!(!gateway.path().join("server").exists());
}

#[test]
fn import_from_missing_service_is_not_found() {
    let gateway = TempDir::new().unwrap();
    let nowhere = TempDir::new().unwrap();
    entigen()
        .current_dir(gateway.path())
        .args(["init", "--app-name", "portal", "--app-type", "gateway"])
        .assert()
        .success();

    entigen()
        .current_dir(gateway.path())
        .args(["entity", "Bar", "--from-service"])
        .arg(nowhere.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("no service"));
}
