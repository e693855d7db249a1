use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

const EXPECTED_ROOT_HELP: &str = "Caixa - cash ledger for retail store groups

Usage:
  caixa <command>

Start here:
  caixa group create <name>
  caixa store add <group> <store> --balance 1000
  caixa day check <group>

Run `caixa --help` for the full command list.
";

static TEST_COUNTER: AtomicU64 = AtomicU64::new(1);

fn unique_test_home() -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    let stamp = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(value) => value.as_nanos(),
        Err(_) => 0,
    };
    let sequence = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!(
        "caixa-cli-test-{}-{stamp}-{sequence}",
        std::process::id()
    ));
    path
}

fn run_cli_in_home(home: &std::path::Path, args: &[&str]) -> (bool, String) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_caixa"));
    for arg in args {
        command.arg(arg);
    }
    command.env("CAIXA_HOME", home);
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let spawned = command.spawn();
    assert!(spawned.is_ok());
    if let Ok(child) = spawned {
        let output = child.wait_with_output();
        assert!(output.is_ok());
        if let Ok(result) = output {
            let stdout = String::from_utf8(result.stdout);
            assert!(stdout.is_ok());
            if let Ok(stdout_text) = stdout {
                return (result.status.success(), stdout_text);
            }
        }
    }

    (false, String::new())
}

fn run_cli(args: &[&str]) -> (bool, String, std::path::PathBuf) {
    let home = unique_test_home();
    let (ok, body) = run_cli_in_home(&home, args);
    (ok, body, home)
}

fn write_entries_file(home: &std::path::Path, name: &str, body: &str) -> std::path::PathBuf {
    let create_home = fs::create_dir_all(home);
    assert!(create_home.is_ok());

    let file_path = home.join(name);
    let write = fs::write(&file_path, body);
    assert!(write.is_ok());
    file_path
}

fn parse_json(body: &str) -> Value {
    let parsed = serde_json::from_str::<Value>(body);
    assert!(parsed.is_ok());
    if let Ok(value) = parsed {
        return value;
    }
    Value::Null
}

fn assert_pipe_close_does_not_panic(args: &[&str], expect_success: bool) {
    let home = unique_test_home();
    let mut producer = Command::new(env!("CARGO_BIN_EXE_caixa"));
    producer.args(args);
    producer.env("CAIXA_HOME", &home);
    producer.stdout(Stdio::piped());
    producer.stderr(Stdio::piped());

    let producer_spawn = producer.spawn();
    assert!(producer_spawn.is_ok());
    if let Ok(mut producer_child) = producer_spawn {
        let producer_stdout = producer_child.stdout.take();
        let producer_stderr = producer_child.stderr.take();
        assert!(producer_stdout.is_some());
        assert!(producer_stderr.is_some());

        if let Some(stdout_pipe) = producer_stdout {
            let mut reader = BufReader::new(stdout_pipe);
            let mut first_line = String::new();
            let read_result = reader.read_line(&mut first_line);
            assert!(read_result.is_ok());
            assert!(!first_line.is_empty());
            drop(reader);
        }

        let status = producer_child.wait();
        assert!(status.is_ok());
        if let Ok(exit_status) = status {
            assert_eq!(exit_status.success(), expect_success);
        }

        if let Some(mut stderr_pipe) = producer_stderr {
            let mut stderr_bytes = Vec::new();
            let stderr_read = stderr_pipe.read_to_end(&mut stderr_bytes);
            assert!(stderr_read.is_ok());
            let stderr = String::from_utf8(stderr_bytes);
            assert!(stderr.is_ok());
            if let Ok(stderr_text) = stderr {
                assert!(!stderr_text.contains("Broken pipe"));
                assert!(!stderr_text.contains("failed printing to stdout"));
            }
        }
    }
}

fn assert_text_error_contract(body: &str, code: &str) {
    assert!(body.contains("Something went wrong, but it's easy to fix."));
    assert!(body.contains(&format!("  Error:    {code}")));
    assert!(body.contains("  Details:"));
    assert!(body.contains("What to do next:"));
}

fn assert_json_error_contract(body: &str, code: &str) -> Value {
    let payload = parse_json(body);
    assert_eq!(payload["ok"], Value::Bool(false));
    assert_eq!(payload["error"]["code"], Value::String(code.to_string()));
    assert!(payload["error"]["message"].is_string());
    assert!(payload["error"]["recovery_steps"].is_array());
    payload
}

#[test]
fn root_command_uses_short_plaintext_help() {
    let (ok, body, _) = run_cli(&[]);
    assert!(ok);
    assert_eq!(body, EXPECTED_ROOT_HELP);
}

#[test]
fn help_and_version_return_success_output() {
    let (help_ok, help_body, _) = run_cli(&["--help"]);
    assert!(help_ok);
    assert!(help_body.contains("cash ledger for retail store groups"));
    assert!(help_body.contains("group"));
    assert!(help_body.contains("transfer"));
    assert!(help_body.contains("day"));

    let (version_ok, version_body, _) = run_cli(&["--version"]);
    assert!(version_ok);
    assert_eq!(version_body.trim(), "caixa 0.1.0");
}

#[test]
fn help_output_pipe_close_does_not_panic() {
    assert_pipe_close_does_not_panic(&["--help"], true);
}

#[test]
fn success_output_pipe_close_does_not_panic() {
    assert_pipe_close_does_not_panic(&["group", "list"], true);
}

#[test]
fn error_output_pipe_close_does_not_panic() {
    assert_pipe_close_does_not_panic(&["totals", "Matriz", "Centro"], false);
}

#[test]
fn group_and_store_flow_supports_text_and_json_contracts() {
    let home = unique_test_home();

    let (create_ok, create_body) = run_cli_in_home(&home, &["group", "create", "Matriz"]);
    assert!(create_ok);
    assert_eq!(create_body.trim(), "Group `Matriz` created.");

    let (add_ok, add_body) = run_cli_in_home(
        &home,
        &["store", "add", "Matriz", "Centro", "--balance", "1000"],
    );
    assert!(add_ok);
    assert!(add_body.contains("Store `Centro` in group `Matriz` now opens at 1000.00."));

    let (text_ok, text_body) = run_cli_in_home(&home, &["totals", "Matriz", "Centro"]);
    assert!(text_ok);
    assert!(text_body.contains("Totals for `Matriz` / `Centro`:"));
    assert!(text_body.contains("Balance:"));

    let (json_ok, json_body) = run_cli_in_home(&home, &["totals", "Matriz", "Centro", "--json"]);
    assert!(json_ok);
    let payload = parse_json(&json_body);
    assert_eq!(payload["ok"], Value::Bool(true));
    assert_eq!(payload["command"], Value::String("totals".to_string()));
    assert_eq!(payload["version"], Value::String("0.1.0".to_string()));
    assert!(payload["data"]["totals"]["balance"].is_number());
}

#[test]
fn imported_entry_can_be_toggled_and_moved_between_stores() {
    let home = unique_test_home();

    for setup in [
        vec!["group", "create", "Matriz"],
        vec!["store", "add", "Matriz", "Centro", "--balance", "1000"],
        vec!["store", "add", "Matriz", "Bairro", "--balance", "500"],
    ] {
        let (ok, _) = run_cli_in_home(&home, &setup);
        assert!(ok);
    }

    let file_path = write_entries_file(
        &home,
        "dda.json",
        r#"[
  {"beneficiary":"CEMIG","document_id":"1001","due_date":"2026-09-01","amount":412.37}
]"#,
    );
    let file_arg = file_path.display().to_string();
    let (import_ok, import_body) = run_cli_in_home(
        &home,
        &["import", "Matriz", "Centro", "--list", "debits", &file_arg],
    );
    assert!(import_ok);
    assert!(import_body.contains("Imported 1 debits entries into `Centro`."));

    let (toggle_ok, toggle_body) = run_cli_in_home(
        &home,
        &[
            "entry", "toggle", "Matriz", "Centro", "--list", "debits", "--index", "0",
        ],
    );
    assert!(toggle_ok);
    assert_eq!(
        toggle_body.trim(),
        "Entry 0 in the debits list of `Centro` is now scheduled."
    );

    let (move_ok, move_body) = run_cli_in_home(
        &home,
        &[
            "entry", "move", "Matriz", "--from", "Centro", "--to", "Bairro", "--list", "debits",
            "--index", "0", "--json",
        ],
    );
    assert!(move_ok);
    let payload = parse_json(&move_body);
    assert_eq!(payload["ok"], Value::Bool(true));
    assert_eq!(payload["command"], Value::String("entry move".to_string()));
    assert_eq!(
        payload["data"]["to_store"],
        Value::String("Bairro".to_string())
    );

    let (entries_ok, entries_body) = run_cli_in_home(&home, &["entries", "Matriz", "Bairro"]);
    assert!(entries_ok);
    assert!(entries_body.contains("CEMIG"));
    assert!(entries_body.contains("scheduled"));

    let (source_ok, source_body) = run_cli_in_home(&home, &["entries", "Matriz", "Centro"]);
    assert!(source_ok);
    assert!(source_body.contains("Store `Centro` has no entries to show."));
}

#[test]
fn unknown_group_uses_plaintext_error_contract() {
    let (ok, body, _) = run_cli(&["totals", "Matriz", "Centro"]);
    assert!(!ok);
    assert_text_error_contract(&body, "group_not_found");
    assert!(body.contains("caixa group list"));
}

#[test]
fn unknown_group_json_error_uses_failure_envelope() {
    let (ok, body, _) = run_cli(&["totals", "Matriz", "Centro", "--json"]);
    assert!(!ok);
    let payload = assert_json_error_contract(&body, "group_not_found");
    assert!(
        payload["error"]["message"]
            .as_str()
            .unwrap_or_default()
            .contains("Matriz")
    );
}

#[test]
fn parse_errors_are_json_when_json_flag_is_present() {
    let (ok, body, _) = run_cli(&["totals", "Matriz", "--json"]);
    assert!(!ok);
    let _payload = assert_json_error_contract(&body, "invalid_argument");
}

#[test]
fn parse_errors_default_to_plaintext_contract() {
    let (ok, body, _) = run_cli(&["entry", "toggle", "Matriz", "Centro", "--list", "nope"]);
    assert!(!ok);
    assert_text_error_contract(&body, "invalid_argument");
}
