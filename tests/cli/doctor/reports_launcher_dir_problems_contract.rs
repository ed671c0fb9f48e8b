use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn doctor_passes_for_complete_launcher_dir() {
    let ctx = TestContext::new();
    ctx.write_app();

    ctx.cli()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("looks ready"));
}

#[test]
fn doctor_fails_on_missing_files() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("doctor")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[ERROR] requirements.txt"))
        .stderr(predicate::str::contains("[ERROR] config.json"));
}

#[test]
fn doctor_strict_fails_on_missing_backup_folder() {
    let ctx = TestContext::new();
    ctx.write_app();

    ctx.cli()
        .args(["doctor", "--variant", "backup"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[WARN] backup folder"));

    ctx.cli().args(["doctor", "--strict", "--variant", "backup"]).assert().code(2);
}
