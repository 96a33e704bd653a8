//! Drives the `cli` binary as a subprocess: feeds it stdin, checks stdout
//! and the exit code. This is the only place the stdin wire format and
//! the exit-code contract are exercised end to end.

use std::io::Write;
use std::process::{Command, Stdio};

fn run(input: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cli"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn cli binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn two_intersecting_triangles_print_both_ids_sorted() {
    let input = "2\n\
        0 0 0  2 0 0  0 2 0\n\
        1 1 0  3 1 0  1 3 0\n";
    let (code, stdout, _) = run(input);
    assert_eq!(code, 0);
    assert_eq!(stdout, "0\n1\n");
}

#[test]
fn disjoint_triangles_print_nothing_but_still_exit_zero() {
    let input = "2\n\
        0 0 0  1 0 0  0 1 0\n\
        100 100 100  101 100 100  100 101 100\n";
    let (code, stdout, _) = run(input);
    assert_eq!(code, 0);
    assert_eq!(stdout, "");
}

#[test]
fn empty_set_exits_zero_with_no_output() {
    let (code, stdout, _) = run("0\n");
    assert_eq!(code, 0);
    assert_eq!(stdout, "");
}

#[test]
fn malformed_triangle_count_exits_nonzero_and_names_count() {
    let (code, _, stderr) = run("not-a-number\n");
    assert_eq!(code, 1);
    assert!(stderr.contains("count"), "stderr was: {stderr}");
}

#[test]
fn truncated_triangle_exits_nonzero_and_names_its_index() {
    let (code, _, stderr) = run("2\n0 0 0 1 0 0 0 1 0\n1 1");
    assert_eq!(code, 1);
    assert!(stderr.contains('1'), "stderr was: {stderr}");
}

#[test]
fn ids_are_sorted_regardless_of_intersection_discovery_order() {
    let input = "3\n\
        50 50 50  51 50 50  50 51 50\n\
        0 0 0  2 0 0  0 2 0\n\
        1 1 0  3 1 0  1 3 0\n";
    let (code, stdout, _) = run(input);
    assert_eq!(code, 0);
    assert_eq!(stdout, "1\n2\n");
}
