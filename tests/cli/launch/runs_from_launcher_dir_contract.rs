use crate::harness::TestContext;

#[test]
fn launch_runs_every_step_in_launcher_dir() {
    let ctx = TestContext::new();
    ctx.write_app();

    ctx.cli().arg("--no-pause").assert().success();

    let invocations = ctx.invocations();
    let expected_dir = ctx.launcher_dir_canonical();
    assert_eq!(invocations.len(), 3);
    assert!(
        invocations.iter().all(|i| i.cwd == expected_dir),
        "every step should run in {}: {:?}",
        expected_dir,
        invocations
    );
    assert_ne!(ctx.caller_dir(), ctx.launcher_dir());
}

#[test]
fn launch_steps_keep_fixed_order() {
    let ctx = TestContext::new();
    ctx.write_app();

    ctx.cli().args(["launch", "--no-pause"]).assert().success();

    let args: Vec<Vec<String>> = ctx.invocations().into_iter().map(|i| i.args).collect();
    assert_eq!(
        args,
        vec![
            vec!["-m", "pip", "install", "--upgrade", "pip"],
            vec!["-m", "pip", "install", "-r", "requirements.txt"],
            vec!["-m", "streamlit", "run", "sqlserver_to_postgres_app.py"],
        ]
    );
}
