use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BACKUP_DIR: &str =
    r"C:\Program Files (x86)\Microsoft SQL Server\MSSQL12.SQLEXPRESS\MSSQL\Backup";

fn scada_launch(root: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scada-launch"));
    cmd.env_remove("SCADA_SYNC_PYTHON")
        .env_remove("SCADA_SYNC_ROOT")
        .arg("--root")
        .arg(root.path());
    cmd
}

#[test]
fn plan_renders_backup_variant_from_launcher_toml() {
    let root = TempDir::new().expect("Failed to create launcher directory");
    fs::write(root.path().join("launcher.toml"), "variant = \"backup\"\n")
        .expect("Failed to write launcher.toml");

    scada_launch(&root)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interpreter: python"))
        .stdout(predicate::str::contains("Variant: backup"))
        .stdout(predicate::str::contains("2. Installing pyodbc: python -m pip install pyodbc"))
        .stdout(predicate::str::contains(format!(
            "python -m streamlit run sqlserver_to_postgres_app.py \"{}\"",
            BACKUP_DIR
        )))
        .stdout(predicate::str::contains("5. Wait for a key press"));
}

#[test]
fn plan_without_config_is_plain() {
    let root = TempDir::new().expect("Failed to create launcher directory");

    scada_launch(&root)
        .args(["plan", "--python", "py", "--no-pause"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Interpreter: py"))
        .stdout(predicate::str::contains("pyodbc").not())
        .stdout(predicate::str::contains("Wait for a key press").not());
}

#[test]
fn plan_rejects_unknown_variant() {
    let root = TempDir::new().expect("Failed to create launcher directory");

    scada_launch(&root)
        .args(["plan", "--variant", "nightly"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid variant 'nightly'"));
}
