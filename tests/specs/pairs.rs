//! Behavioral specs for `strmatch lcs` and `strmatch distance`.

use crate::prelude::*;

// =============================================================================
// Longest Common Substring
// =============================================================================

/// > Prints the substring, its length and every occurrence pair
#[test]
fn lcs_reports_text_length_and_occurrences() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["lcs", "GeeksforGeeks", "GeeksQuiz"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("Geeks\nlength: 5\noccurrences: (0, 0), (8, 0)\n");
}

/// > Exit code 1 when the strings share no symbol
#[test]
fn lcs_nothing_in_common_exits_one() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["lcs", "abc", "xyz"])
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("length: 0"));
}

/// > Offsets count characters, and multi-byte characters are never split
#[test]
fn lcs_counts_characters() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["lcs", "naïve café", "café naïve"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("naïve\nlength: 5\noccurrences: (0, 5)\n");
}

/// > A shared UTF-8 lead byte is not a common substring
#[test]
fn lcs_distinct_multibyte_characters_share_nothing() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["lcs", "é", "ã"])
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout("\nlength: 0\noccurrences: \n");
}

/// > JSON output includes both inputs
#[test]
fn lcs_json_output() {
    let project = Project::empty();
    let output = strmatch_cmd()
        .args(["lcs", "-o", "json", "ABABC", "BABCA"])
        .current_dir(project.path())
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["a"], "ABABC");
    assert_eq!(json["b"], "BABCA");
    assert_eq!(json["text"], "BABC");
    assert_eq!(json["length"], 4);
    assert_eq!(json["occurrences"], serde_json::json!([[1, 0]]));
}

// =============================================================================
// Edit Distance
// =============================================================================

/// > Prints the Levenshtein distance
#[test]
fn distance_kitten_sitting() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["distance", "kitten", "sitting"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("3\n");
}

/// > Identical strings are distance zero and still succeed
#[test]
fn distance_identical_is_zero() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["distance", "same", "same"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("0\n");
}

/// > Distance counts characters, not bytes
#[test]
fn distance_counts_unicode_scalars() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["distance", "café", "cafe"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("1\n");
}
