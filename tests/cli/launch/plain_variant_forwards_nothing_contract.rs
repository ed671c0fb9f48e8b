use crate::harness::TestContext;

#[test]
fn plain_variant_starts_app_without_arguments() {
    let ctx = TestContext::new();
    ctx.write_app();

    ctx.cli().args(["--variant", "plain", "--no-pause"]).assert().success();

    let invocations = ctx.invocations();
    let run = invocations.last().expect("app run recorded");
    assert!(run.is_app_run());
    assert!(run.app_arguments().is_empty());
    assert!(!invocations.iter().any(|i| i.args.contains(&"pyodbc".to_string())));
}
