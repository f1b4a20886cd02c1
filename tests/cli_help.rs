use std::process::Command;

#[test]
fn test_help_mentions_default_invocation() {
    let bin = env!("CARGO_BIN_EXE_sentinel-audit");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Run 'sentinel-audit' without arguments to audit the current directory."),
        "help output should mention the default invocation; got:\n{}",
        stdout
    );
    assert!(
        stdout.contains("audit"),
        "help output should list the audit subcommand; got:\n{}",
        stdout
    );
}
