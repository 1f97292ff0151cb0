//! Behavioral specs for strmatch.toml discovery and loading.

use crate::prelude::*;

/// > Discovered config selects the algorithm and output format
#[test]
fn discovered_config_sets_algorithm_and_format() {
    let output = strmatch_cmd()
        .args(["search", "at", "input.txt"])
        .current_dir(fixture("config-json"))
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["algorithms"], serde_json::json!(["boyer-moore"]));
    assert_eq!(json["inputs"][0]["offsets"], serde_json::json!([5, 9, 20]));
}

/// > Config is discovered from a parent directory
#[test]
fn config_discovered_from_subdirectory() {
    let project = Project::with_config("version = 1\n\n[search]\nalgorithm = \"z\"\n");
    project.file("nested/deeper/input.txt", "abcabc");

    strmatch_cmd()
        .args(["search", "bc", "input.txt"])
        .current_dir(project.path().join("nested/deeper"))
        .assert()
        .success()
        .stdout("input.txt:1\ninput.txt:4\n2 matches (z)\n");
}

/// > Command-line flags override config values
#[test]
fn flags_override_config() {
    strmatch_cmd()
        .args(["search", "-a", "naive", "-o", "text", "cat", "input.txt"])
        .current_dir(fixture("config-json"))
        .assert()
        .success()
        .stdout("input.txt:4\n1 match (naive)\n");
}

/// > --config loads an explicit file instead of discovering one
#[test]
fn explicit_config_flag() {
    let project = Project::empty();
    project.file("custom.toml", "version = 1\n\n[search]\nalgorithm = \"rabin-karp\"\n");

    strmatch_cmd()
        .args(["--config", "custom.toml", "search", "b"])
        .current_dir(project.path())
        .write_stdin("abb")
        .assert()
        .success()
        .stdout("-:1\n-:2\n2 matches (rabin-karp)\n");
}

/// > STRMATCH_CONFIG is equivalent to --config
#[test]
fn config_from_environment() {
    let project = Project::empty();
    project.file("env.toml", "version = 1\n\n[output]\nformat = \"json\"\n");

    let output = strmatch_cmd()
        .args(["distance", "flaw", "lawn"])
        .env("STRMATCH_CONFIG", project.path().join("env.toml"))
        .current_dir(project.path())
        .output()
        .expect("command should run");

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["distance"], 2);
}

/// > Rabin-Karp parameters come from config
#[test]
fn config_rabin_karp_parameters() {
    let project = Project::with_config(concat!(
        "version = 1\n\n[search]\nalgorithm = \"rabin-karp\"\n\n",
        "[rabin_karp]\nbase = 2\nmodulus = 3\n",
    ));

    strmatch_cmd()
        .args(["search", "aba"])
        .current_dir(project.path())
        .write_stdin("abababa")
        .assert()
        .success()
        .stdout("-:0\n-:2\n-:4\n3 matches (rabin-karp)\n");
}

// =============================================================================
// Invalid Config
// =============================================================================

/// > Unknown algorithm in config is a config error
#[test]
fn config_unknown_algorithm_exits_two() {
    strmatch_cmd()
        .args(["search", "cat", "input.txt"])
        .current_dir(fixture("config-bad"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported algorithm: horspool"));
}

/// > Unsupported config version is rejected
#[test]
fn config_unsupported_version_exits_two() {
    let project = Project::with_config("version = 9\n");
    strmatch_cmd()
        .args(["distance", "a", "b"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 9"));
}

/// > Invalid Rabin-Karp parameters are rejected
#[test]
fn config_invalid_rabin_karp_exits_two() {
    let project = Project::with_config("version = 1\n\n[rabin_karp]\nbase = 1\n");
    strmatch_cmd()
        .args(["distance", "a", "b"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid argument"));
}

/// > Malformed TOML names the file
#[test]
fn config_parse_error_exits_two() {
    let project = Project::with_config("version = [\n");
    strmatch_cmd()
        .args(["distance", "a", "b"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("strmatch.toml"));
}

/// > Explicit config path that does not exist is an error
#[test]
fn config_missing_explicit_file_exits_two() {
    let project = Project::empty();
    strmatch_cmd()
        .args(["-C", "missing.toml", "distance", "a", "b"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("missing.toml"));
}
