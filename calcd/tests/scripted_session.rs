//! Scripted calculator sessions
//!
//! Runs whole scripts through the host runtime and checks the rendered
//! frames and the final engine state.

use calc_core::{CalculatorSnapshot, Operator, Status};
use calcd::{HostMode, HostRuntime, HostRuntimeConfig, HostSettings};
use std::io;

fn run_script(script: &str, settings: HostSettings) -> (HostRuntime<Vec<u8>>, String) {
    let config = HostRuntimeConfig {
        mode: HostMode::Script,
        script: Some(script.to_string()),
        settings,
        max_steps: 0,
        print_snapshot: false,
    };
    let mut runtime = HostRuntime::new(config, Vec::new()).expect("runtime should start");
    runtime.run(io::empty()).expect("script should run");
    let output = String::from_utf8(runtime.output().clone()).unwrap();
    (runtime, output)
}

fn last_frame(output: &str, lines_per_frame: usize) -> Vec<&str> {
    let lines: Vec<&str> = output.lines().collect();
    lines[lines.len() - lines_per_frame..].to_vec()
}

#[test]
fn test_chaining_session_renders_grouped_result() {
    let (runtime, output) = run_script("1200\n*\n3\n+\n400\n=", HostSettings::default());
    assert_eq!(runtime.engine().current_entry(), "4000");
    assert_eq!(last_frame(&output, 3), vec!["  0", "> 4,000", "  [Result]"]);
}

#[test]
fn test_history_line_while_operator_pending() {
    let (_, output) = run_script("12345\nsubtract", HostSettings::default());
    assert_eq!(
        last_frame(&output, 3),
        vec!["  12,345 −", "> 12,345", "  [Operator selected]"]
    );
}

#[test]
fn test_operator_update_status() {
    let (runtime, output) = run_script("8\n+\n*", HostSettings::default());
    assert_eq!(runtime.engine().pending_operator(), Some(Operator::Multiply));
    assert!(output.ends_with("  8 ×\n> 8\n  [Operator updated]\n"));
}

#[test]
fn test_division_by_zero_session() {
    let (runtime, output) = run_script("9\n/\n0\nEnter", HostSettings::default());
    assert!(runtime.engine().is_error());
    assert_eq!(last_frame(&output, 3), vec!["  0", "> Error", "  [Result]"]);
}

#[test]
fn test_clear_after_error() {
    let (runtime, _) = run_script("9/0=\nEscape", HostSettings::default());
    let snapshot = runtime.engine().snapshot();
    assert_eq!(snapshot.current_entry, "0");
    assert_eq!(snapshot.status, Status::Cleared);
}

#[test]
fn test_snapshot_command_prints_json() {
    let (_, output) = run_script("5\n+\n:snapshot", HostSettings::default());
    let json_line = output
        .lines()
        .find(|line| line.starts_with('{'))
        .expect("snapshot line");
    let snapshot: CalculatorSnapshot = serde_json::from_str(json_line).unwrap();
    assert_eq!(snapshot.pending_value.as_deref(), Some("5"));
    assert_eq!(snapshot.pending_operator, Some(Operator::Add));
    assert!(snapshot.awaiting_new_entry);
}

#[test]
fn test_settings_shape_the_display() {
    let settings = HostSettings {
        thousands_separator: String::from("."),
        precision: 2,
        show_history: false,
        ..HostSettings::default()
    };
    let (runtime, output) = run_script("10000/3=", settings);
    assert_eq!(runtime.engine().current_entry(), "3333.33");
    assert_eq!(last_frame(&output, 2), vec!["> 3.333.33", "  [Result]"]);
}

#[test]
fn test_max_digits_setting() {
    let settings = HostSettings {
        max_digits: Some(4),
        ..HostSettings::default()
    };
    let (runtime, _) = run_script("123456", settings);
    assert_eq!(runtime.engine().current_entry(), "1234");
}

#[test]
fn test_bundled_demo_script() {
    let script = include_str!("../scripts/chain.calc");
    let (runtime, output) = run_script(script, HostSettings::default());
    assert!(output.contains("> 20\n"));
    assert!(output.contains("> Error\n"));
    assert_eq!(runtime.engine().current_entry(), "-12.5");
    assert_eq!(runtime.engine().status(), Status::SignFlipped);
}
