//! Integration tests for the `scratchwipe` binary.

mod common;

use common::*;

#[test]
fn cli_cleans_given_path_and_prints_summary() {
    let env = TestEnv::new();
    let root = sample_tree(env.workspace.path());

    let result = env.run(&["--path", &path_arg(&root), "--mode", "sequential"]);

    assert!(result.success, "clean failed:\n{}", result.combined_output());
    assert!(!root.exists());
    assert!(result.stdout.contains("Cleaned"), "{}", result.stdout);
    assert!(result.stdout.contains("6 files, 5 directories deleted"));
    assert!(result.stderr.contains("Deleted file: "));
}

#[test]
fn cli_keep_root_empties_directory() {
    let env = TestEnv::new();
    let root = sample_tree(env.workspace.path());

    let result = env.run(&["--path", &path_arg(&root), "--keep-root", "-q"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(root.is_dir());
    assert_eq!(remaining_entries(&root), 0);
    assert!(result.stdout.is_empty(), "quiet prints no summary: {}", result.stdout);
    assert!(!result.stderr.contains("Deleted file: "));
}

#[test]
fn cli_json_emits_events_and_summary() {
    let env = TestEnv::new();
    let root = sample_tree(env.workspace.path());

    let result = env.run(&["--path", &path_arg(&root), "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let lines: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("every stdout line is JSON"))
        .collect();
    let deleted = lines.iter().filter(|v| v["type"] == "deleted").count();
    assert_eq!(deleted, 11);
    let summary = lines.last().unwrap();
    assert_eq!(summary["type"], "clean_complete");
    assert_eq!(summary["success"], true);
}

#[test]
fn cli_missing_path_exits_non_zero() {
    let env = TestEnv::new();
    let missing = env.path("does-not-exist");

    let result = env.run(&["--path", &path_arg(&missing)]);

    assert!(!result.success);
    assert_eq!(
        result.stderr.matches("does not exist").count(),
        1,
        "printed once:\n{}",
        result.combined_output()
    );
}

#[test]
fn cli_reads_path_from_user_config() {
    let env = TestEnv::new();
    let root = sample_tree(env.workspace.path());
    env.write_user_config(&format!(
        "[clean]\npath = {:?}\nmode = \"sequential\"\n",
        path_arg(&root)
    ));

    let result = env.run(&[]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!root.exists());
}

#[test]
fn cli_env_overrides_user_config() {
    let env = TestEnv::new();
    let root = sample_tree(env.workspace.path());
    env.write_user_config("[clean]\nkeep_root = false\n");

    let result = env.run_with_env(
        &["--path", &path_arg(&root)],
        &[("SCRATCHWIPE_KEEP_ROOT", "true")],
    );

    assert!(result.success, "{}", result.combined_output());
    assert!(root.is_dir());
}

#[test]
fn cli_warns_on_unknown_config_key() {
    let env = TestEnv::new();
    let root = sample_tree(env.workspace.path());
    let config = env.path("custom.toml");
    std::fs::write(&config, "[clean]\nkeep_rot = true\n").unwrap();

    let result = env.run(&["--path", &path_arg(&root), "--config", &path_arg(&config)]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("unknown config key 'keep_rot'"));
    assert!(result.stderr.contains("did you mean 'keep_root'?"));
}

#[test]
fn cli_invalid_config_is_a_hard_failure() {
    let env = TestEnv::new();
    let config = env.path("broken.toml");
    std::fs::write(&config, "[clean]\nthreads = \"lots\"\n").unwrap();

    let result = env.run(&["--config", &path_arg(&config)]);

    assert!(!result.success);
    assert!(result.stderr.contains("failed to load configuration"));
}

#[test]
fn cli_broken_user_config_is_ignored_with_warning() {
    let env = TestEnv::new();
    let root = sample_tree(env.workspace.path());
    env.write_user_config("[clean]\nkeep_root = \"nope\"\n");

    let result = env.run(&["--path", &path_arg(&root)]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!root.exists(), "defaults apply, root removed");
    assert!(
        result.stderr.contains("ignoring user config"),
        "{}",
        result.stderr
    );
}
