//! CLI tests for `report explain` and `report identifier`.
//!
//! Spawns the report binary and verifies output and exit codes for explained,
//! unexplained and scalar inputs.

use std::process::Command;

use report::exit_codes;

fn report_command(dir: &std::path::Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_report"));
    command.current_dir(dir).args(["--color", "never"]);
    command
}

#[test]
fn explain_existence_prints_plain_summary() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = report_command(temp.path())
        .args(["explain", "--operator", "exists", "--subject", "$\".selector\""])
        .output()
        .expect("report explain");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "* Element $\".selector\" identified by:\n    - CSS selector: .selector\n    - ordinal position: 1\n  does not exist\n"
    );
}

#[test]
fn explain_scalar_comparison() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = report_command(temp.path())
        .args([
            "explain",
            "--operator",
            "is",
            "--subject",
            "$page.title",
            "--value",
            "\"Home\"",
            "--expected",
            "Home",
            "--actual",
            "About",
        ])
        .output()
        .expect("report explain");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "* About is not equal to Home\n"
    );
}

#[test]
fn explain_without_diagnostic_exits_with_no_diagnostic_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = report_command(temp.path())
        .args(["explain", "--operator", "exists", "--subject", "$page.title"])
        .output()
        .expect("report explain");

    assert_eq!(output.status.code(), Some(exit_codes::NO_DIAGNOSTIC));
    assert!(output.stdout.is_empty());
}

#[test]
fn identifier_describes_hierarchy() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = report_command(temp.path())
        .args(["identifier", "$\"//main\" >> $\".item\":last"])
        .output()
        .expect("report identifier");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Element $\"//main\" >> $\".item\":-1\n  - CSS selector: .item\n  - ordinal position: -1\nwith parent:\n  - XPath expression: //main\n  - ordinal position: 1\n"
    );
}

#[test]
fn identifier_rejects_scalar() {
    let temp = tempfile::tempdir().expect("tempdir");
    let status = report_command(temp.path())
        .args(["identifier", "$env.HOME"])
        .status()
        .expect("report identifier");

    assert_eq!(status.code(), Some(exit_codes::NO_DIAGNOSTIC));
}

#[test]
fn invalid_config_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(temp.path().join("report.toml"), "[styles]\ncomment = \"mauve\"\n")
        .expect("write config");
    let status = report_command(temp.path())
        .args(["identifier", "$\".a\""])
        .status()
        .expect("report identifier");

    assert_eq!(status.code(), Some(exit_codes::INVALID));
}
