use std::io::Write;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

const BIN_NAME: &str = "teller_cli";

fn script_command(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("TELLER_CLI_SCRIPT", "1");
    cmd.env("TELLER_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn help_prints_the_command_overview() {
    let config = tempfile::TempDir::new().unwrap();

    script_command(&config)
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(contains("Available commands"));
}

#[test]
fn version_prints_build_metadata() {
    let config = tempfile::TempDir::new().unwrap();

    script_command(&config)
        .write_stdin("version\nexit\n")
        .assert()
        .success()
        .stdout(contains("Teller Core"));
}

#[test]
fn demo_reports_the_expected_policy_failures() {
    let config = tempfile::TempDir::new().unwrap();

    script_command(&config)
        .write_stdin("demo\nexit\n")
        .assert()
        .success()
        .stdout(
            contains("withdrawal limit")
                .and(contains("insufficient balance"))
                .and(contains("must be positive")),
        );
}

#[test]
fn accounts_open_and_list_in_one_session() {
    let config = tempfile::TempDir::new().unwrap();

    script_command(&config)
        .write_stdin("open regular \"Avery Quinn\" 100\naccounts\nexit\n")
        .assert()
        .success()
        .stdout(contains("Opened account").and(contains("Avery Quinn")));
}

#[test]
fn divide_reads_operands_from_a_file() {
    let config = tempfile::TempDir::new().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "10\n4\n").unwrap();

    script_command(&config)
        .write_stdin(format!("divide {}\nexit\n", file.path().display()))
        .assert()
        .success()
        .stdout(contains("10 / 4 = 2.5"));
}

#[test]
fn divide_rejects_a_zero_divisor_without_exiting() {
    let config = tempfile::TempDir::new().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "1\n0\n").unwrap();

    script_command(&config)
        .write_stdin(format!("divide {}\nhelp\nexit\n", file.path().display()))
        .assert()
        .success()
        .stdout(contains("division by zero").and(contains("Available commands")));
}

#[test]
fn read_prints_file_contents() {
    let config = tempfile::TempDir::new().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ledger line one").unwrap();

    script_command(&config)
        .write_stdin(format!("read {}\nexit\n", file.path().display()))
        .assert()
        .success()
        .stdout(contains("ledger line one"));
}

#[test]
fn prompting_commands_require_arguments_in_script_mode() {
    let config = tempfile::TempDir::new().unwrap();

    script_command(&config)
        .write_stdin("divide\nexit\n")
        .assert()
        .success()
        .stdout(contains("script mode"));
}

#[test]
fn unknown_commands_suggest_an_alternative() {
    let config = tempfile::TempDir::new().unwrap();

    script_command(&config)
        .write_stdin("depositt 1 10\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command").and(contains("Suggestion: `deposit`?")));
}
