//! Behavioral specs for `strmatch search`.

use crate::prelude::*;

const ALGORITHMS: [&str; 5] = ["naive", "kmp", "boyer-moore", "rabin-karp", "z"];

// =============================================================================
// Text Output
// =============================================================================

/// > Prints one `input:offset` line per match, then a summary
#[test]
fn search_reports_offset_in_file() {
    strmatch_cmd()
        .args(["search", "ABABCAB", "abab.txt"])
        .current_dir(fixture("corpus"))
        .assert()
        .success()
        .stdout("abab.txt:10\n1 match (kmp)\n");
}

/// > Overlapping occurrences are all reported, from stdin when no paths are given
#[test]
fn search_reports_overlapping_matches_from_stdin() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["search", "AA"])
        .current_dir(project.path())
        .write_stdin("AAAAA")
        .assert()
        .success()
        .stdout("-:0\n-:1\n-:2\n-:3\n4 matches (kmp)\n");
}

/// > Every algorithm produces the same offsets
#[test]
fn search_every_algorithm_reports_same_offsets() {
    let project = Project::empty();
    for name in ALGORITHMS {
        strmatch_cmd()
            .args(["search", "--algorithm", name, "AABA"])
            .current_dir(project.path())
            .write_stdin("AABAACAADAABAABA")
            .assert()
            .success()
            .stdout(format!("-:0\n-:9\n-:12\n3 matches ({name})\n"));
    }
}

/// > Algorithm names accept common aliases, case-insensitively
#[test]
fn search_accepts_algorithm_alias() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["search", "-a", "Knuth-Morris-Pratt", "needle"])
        .current_dir(project.path())
        .write_stdin("haystack with a needle")
        .assert()
        .success()
        .stdout(predicates::str::contains("(kmp)"));
}

/// > --all-algorithms runs every algorithm and reports agreement
#[test]
fn search_all_algorithms_agree() {
    strmatch_cmd()
        .args(["search", "--all-algorithms", "he", "ushers.txt"])
        .current_dir(fixture("corpus"))
        .assert()
        .success()
        .stdout(predicates::str::contains("ushers.txt:2\n"))
        .stdout(predicates::str::contains("ushers.txt:15\n"))
        .stdout(predicates::str::contains(
            "2 matches (naive, kmp, boyer-moore, rabin-karp, z agree)",
        ));
}

/// > Matches across several inputs keep input order
#[test]
fn search_multiple_inputs_in_order() {
    strmatch_cmd()
        .args(["search", "AB", "abab.txt", "plain.txt", "ushers.txt"])
        .current_dir(fixture("corpus"))
        .assert()
        .success()
        .stdout(predicates::str::starts_with("abab.txt:0\nabab.txt:2\n"))
        .stdout(predicates::str::contains("plain.txt").not())
        .stdout(predicates::str::contains("ushers.txt").not());
}

// =============================================================================
// JSON Output
// =============================================================================

/// > --output json emits pattern, algorithms, total and per-input offsets
#[test]
fn search_json_output() {
    let output = strmatch_cmd()
        .args(["search", "-o", "json", "ABABCAB", "abab.txt"])
        .current_dir(fixture("corpus"))
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["pattern"], "ABABCAB");
    assert_eq!(json["algorithms"], serde_json::json!(["kmp"]));
    assert_eq!(json["total"], 1);
    assert_eq!(json["inputs"][0]["input"], "abab.txt");
    assert_eq!(json["inputs"][0]["offsets"], serde_json::json!([10]));
}

// =============================================================================
// Exit Codes
// =============================================================================

/// > Exit code 1 when nothing matches
#[test]
fn search_no_match_exits_one() {
    strmatch_cmd()
        .args(["search", "zebra", "plain.txt"])
        .current_dir(fixture("corpus"))
        .assert()
        .code(1)
        .stdout("0 matches (kmp)\n");
}

/// > Pattern longer than the text is not an error
#[test]
fn search_pattern_longer_than_text_exits_one() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["search", "ABCDEFGH"])
        .current_dir(project.path())
        .write_stdin("ABC")
        .assert()
        .code(1);
}

/// > Empty pattern is rejected with exit code 2
#[test]
fn search_empty_pattern_exits_two() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["search", ""])
        .current_dir(project.path())
        .write_stdin("anything")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("pattern must not be empty"));
}

/// > Unknown algorithm names are rejected with exit code 2
#[test]
fn search_unknown_algorithm_exits_two() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["search", "--algorithm", "horspool", "abc"])
        .current_dir(project.path())
        .write_stdin("abc")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported algorithm: horspool"));
}

/// > --algorithm and --all-algorithms are mutually exclusive
#[test]
fn search_algorithm_conflicts_with_all_algorithms() {
    strmatch_cmd()
        .args(["search", "--all-algorithms", "--algorithm", "kmp", "abc"])
        .assert()
        .code(2);
}

/// > Missing input files are reported with their path
#[test]
fn search_missing_file_exits_two() {
    strmatch_cmd()
        .args(["search", "abc", "does-not-exist.txt"])
        .current_dir(fixture("corpus"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("does-not-exist.txt"));
}

// =============================================================================
// Color
// =============================================================================

/// > Output is plain when stdout is not a terminal
#[test]
fn search_output_is_plain_when_piped() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["search", "b"])
        .current_dir(project.path())
        .write_stdin("abc")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

/// > --color forces ANSI escapes
#[test]
fn search_color_flag_forces_escapes() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["search", "--color", "b"])
        .current_dir(project.path())
        .write_stdin("abc")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}

/// > --no-color wins over --color
#[test]
fn search_no_color_wins_over_color() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["search", "--color", "--no-color", "b"])
        .current_dir(project.path())
        .write_stdin("abc")
        .assert()
        .success()
        .stdout("-:1\n1 match (kmp)\n");
}
