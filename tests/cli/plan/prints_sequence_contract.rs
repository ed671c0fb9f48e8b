use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn plan_defaults_to_python_interpreter() {
    let ctx = TestContext::new();

    ctx.cli()
        .env_remove("SCADA_SYNC_PYTHON")
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interpreter: python\n"))
        .stdout(predicate::str::contains("1. Upgrading pip: python -m pip install --upgrade pip"));

    assert!(ctx.invocations().is_empty());
}

#[test]
fn plan_honours_root_override() {
    let ctx = TestContext::new();
    let other = ctx.caller_dir().join("launcher.toml");
    std::fs::write(&other, "python = \"py\"\n").unwrap();

    ctx.cli()
        .env_remove("SCADA_SYNC_PYTHON")
        .args(["plan", "--root"])
        .arg(ctx.caller_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Interpreter: py\n"));
}
