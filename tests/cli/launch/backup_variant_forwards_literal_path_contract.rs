use crate::harness::TestContext;
use proptest::prelude::*;

const BACKUP_DIR: &str =
    r"C:\Program Files (x86)\Microsoft SQL Server\MSSQL12.SQLEXPRESS\MSSQL\Backup";

#[test]
fn backup_variant_installs_pyodbc_and_forwards_backup_dir() {
    let ctx = TestContext::new();
    ctx.write_app();

    ctx.cli().args(["--variant", "backup", "--no-pause"]).assert().success();

    let invocations = ctx.invocations();
    assert_eq!(invocations.len(), 4);
    assert_eq!(invocations[1].args, vec!["-m", "pip", "install", "pyodbc"]);
    let run = &invocations[3];
    assert!(run.is_app_run());
    assert_eq!(run.app_arguments(), [BACKUP_DIR.to_string()]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn backup_dir_reaches_app_unaltered(dir in "[A-Za-z0-9 ():._\\\\/-]{1,40}") {
        let ctx = TestContext::new();
        ctx.write_app();

        ctx.cli().arg("--no-pause").arg(format!("--backup-dir={}", dir)).assert().success();

        let invocations = ctx.invocations();
        let run = invocations.last().expect("app run recorded");
        prop_assert_eq!(run.app_arguments(), [dir.clone()]);
    }
}
