//! Runs the `demo` binary and checks its exit status and output.

use std::process::{Command, Output};

fn run_demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_demo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Could not run the demo binary")
}

#[test]
fn default_withdrawal_terminates_with_invalid_argument() {
    let output = run_demo(&[]);

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("InvalidArgument"),
        "stderr did not name the error: {stderr}"
    );
    assert!(
        stderr.contains("Withdrawal amount must be greater than zero."),
        "stderr did not include the error message: {stderr}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn valid_withdrawal_prints_balance() {
    let output = run_demo(&["--amount", "400"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Balance: $600.00\n");
}

#[test]
fn overdraft_prints_negative_json_balance() {
    let output = run_demo(&["--amount", "1500", "--json"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\"balance\":-50000}\n"
    );
}
