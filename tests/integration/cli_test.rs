use std::process::{Command, Output};

fn run_queens(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_queens"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute queens")
}

fn stdout_of(output: &Output) -> String {
    if !output.status.success() {
        panic!(
            "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
    }
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_default_strategy_counts_eight_queens() {
    let stdout = stdout_of(&run_queens(&["8", "4"]));

    assert!(
        stdout.contains("8 queens: 92 solutions"),
        "Should report 92 solutions, got:\n{}",
        stdout
    );
    assert!(
        stdout.contains("work-sharing with 4 workers"),
        "Should default to the work-sharing strategy"
    );
    assert!(stdout.contains("Execution time:"), "Should report timing");
}

#[test]
fn test_each_strategy_reports_same_count() {
    for strategy in ["sequential", "partitioned", "work-sharing"] {
        let stdout = stdout_of(&run_queens(&["9", "3", "--strategy", strategy]));
        assert!(
            stdout.contains("9 queens: 352 solutions"),
            "{} should find 352 solutions, got:\n{}",
            strategy,
            stdout
        );
    }
}

#[test]
fn test_all_strategies_in_one_run() {
    let stdout = stdout_of(&run_queens(&["6", "2", "--strategy", "all", "--repeat", "2"]));

    assert_eq!(stdout.matches("6 queens: 4 solutions").count(), 6);
    assert!(stdout.contains("Strategy: sequential"));
    assert!(stdout.contains("Strategy: partitioned with 2 workers"));
    assert!(stdout.contains("Strategy: work-sharing with 2 workers"));
}

#[test]
fn test_print_solutions_for_four_queens() {
    let stdout = stdout_of(&run_queens(&[
        "4",
        "10",
        "--strategy",
        "partitioned",
        "--print-solutions",
        "--verify",
    ]));

    let mut placements: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("Solution "))
        .map(|line| line.split_once(": ").map(|(_, rows)| rows).unwrap_or(""))
        .collect();
    placements.sort_unstable();

    assert_eq!(placements, vec!["2 4 1 3", "3 1 4 2"]);
    assert!(stdout.contains("4 queens: 2 solutions"));
}

#[test]
fn test_rejects_three_queens() {
    let output = run_queens(&["3", "2"]);

    assert!(!output.status.success(), "N = 3 must be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid board size 3"),
        "Should explain the rejection, got:\n{}",
        stderr
    );
    assert!(
        !String::from_utf8_lossy(&output.stdout).contains("solutions"),
        "No search may run with an invalid board"
    );
}

#[test]
fn test_rejects_zero_threads() {
    let output = run_queens(&["8", "0", "--strategy", "partitioned"]);

    assert!(!output.status.success(), "W = 0 must be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid worker count 0"),
        "Should explain the rejection, got:\n{}",
        stderr
    );
}

#[test]
fn test_rejects_non_numeric_board_size() {
    let output = run_queens(&["eight", "2"]);
    assert!(!output.status.success());
}
