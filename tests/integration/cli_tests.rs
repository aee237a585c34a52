//! CLI integration tests
//!
//! These tests verify that the binary works end to end against fixture
//! projects created on the fly.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn deadstyle() -> Command {
    Command::cargo_bin("deadstyle").expect("binary should build")
}

/// Lay out a minimal project under a fresh temp dir.
fn write_project(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (rel, content) in files {
        let path = temp.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    temp
}

#[test]
fn test_cli_help() {
    deadstyle()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deadstyle"))
        .stdout(predicate::str::contains("--parallel"))
        .stdout(predicate::str::contains("--fail-on-unused"));
}

#[test]
fn test_cli_version() {
    deadstyle()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("deadstyle"));
}

#[test]
fn test_cli_reports_unused_selector() {
    let temp = write_project(&[
        (
            "app/assets/sass/main.scss",
            ".foo { color: red }\n.bar { color: blue }\n",
        ),
        (
            "app/pages/index.vue",
            "<template><div class=\"foo\"></div></template>\n",
        ),
    ]);

    deadstyle()
        .arg(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 unique classes defined."))
        .stdout(predicate::str::contains("Found 1 used classes."))
        .stdout(predicate::str::contains("[UNUSED] bar (defined in"))
        .stdout(predicate::str::contains("main.scss:2"))
        .stdout(predicate::str::contains("[UNUSED] foo").not());
}

#[test]
fn test_cli_clean_project_reports_none() {
    let temp = write_project(&[
        ("app/assets/sass/main.scss", ".used { color: red }\n"),
        ("app/pages/index.vue", "<div class=\"used\"></div>\n"),
    ]);

    deadstyle()
        .arg(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("No unused classes found!"));
}

#[test]
fn test_cli_exit_code_defaults_to_success_with_findings() {
    let temp = write_project(&[
        ("app/assets/sass/main.scss", ".dead { color: red }\n"),
        ("app/pages/index.vue", "<div></div>\n"),
    ]);

    deadstyle().arg(temp.path()).arg("--quiet").assert().success();
}

#[test]
fn test_cli_fail_on_unused() {
    let temp = write_project(&[
        ("app/assets/sass/main.scss", ".dead { color: red }\n"),
        ("app/pages/index.vue", "<div></div>\n"),
    ]);

    deadstyle()
        .arg(temp.path())
        .arg("--quiet")
        .arg("--fail-on-unused")
        .assert()
        .code(1);
}

#[test]
fn test_cli_fail_on_unused_clean_project_succeeds() {
    let temp = write_project(&[
        ("app/assets/sass/main.scss", ".used { color: red }\n"),
        ("app/pages/index.vue", "<div class=\"used\"></div>\n"),
    ]);

    deadstyle()
        .arg(temp.path())
        .arg("--quiet")
        .arg("--fail-on-unused")
        .assert()
        .success();
}

#[test]
fn test_cli_json_format() {
    let temp = write_project(&[
        ("app/assets/sass/main.scss", ".dead { color: red }\n"),
        ("app/pages/index.vue", "<div></div>\n"),
    ]);

    let output = deadstyle()
        .arg(temp.path())
        .arg("--quiet")
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["defined_classes"], 1);
    assert_eq!(json["total_unused"], 1);
    assert_eq!(json["unused"][0]["name"], "dead");
    assert_eq!(json["unused"][0]["locations"][0]["line"], 1);
}

#[test]
fn test_cli_missing_project_dir_fails() {
    deadstyle()
        .arg("/definitely/not/a/project")
        .arg("--quiet")
        .assert()
        .failure();
}

#[test]
fn test_cli_missing_sass_dir_fails_with_diagnostic() {
    let temp = write_project(&[("app/pages/index.vue", "<div></div>\n")]);

    deadstyle()
        .arg(temp.path())
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("sass"));
}

#[test]
fn test_cli_custom_dirs_and_extensions() {
    let temp = write_project(&[
        ("styles/theme.css", ".banner { color: red }\n.hidden { }\n"),
        ("src/page.jsx", "<div className=\"banner\" />\n"),
    ]);

    deadstyle()
        .arg(temp.path())
        .arg("--quiet")
        .args(["--sass-dir", "styles"])
        .args(["--search-dir", "src"])
        .args(["--source-ext", ".jsx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[UNUSED] hidden"))
        .stdout(predicate::str::contains("[UNUSED] banner").not());
}

#[test]
fn test_cli_exclude_flag() {
    let temp = write_project(&[
        ("app/assets/sass/main.scss", ".ghost { color: red }\n"),
        ("app/legacy/old.js", "const ghost = 1\n"),
        ("app/pages/index.vue", "<div></div>\n"),
    ]);

    // Without the exclusion the legacy dir marks the selector used
    deadstyle()
        .arg(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("No unused classes found!"));

    deadstyle()
        .arg(temp.path())
        .arg("--quiet")
        .args(["--exclude", "legacy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[UNUSED] ghost"));
}

#[test]
fn test_cli_config_file() {
    let temp = write_project(&[
        ("styles/site.scss", ".only-here { color: red }\n"),
        ("web/index.ts", "console.log('nothing')\n"),
        (
            ".deadstyle.yml",
            "sass_dir: styles\nsearch_dirs:\n  - web\n",
        ),
    ]);

    deadstyle()
        .arg(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("[UNUSED] only-here"));
}

#[test]
fn test_cli_parallel_matches_sequential_output() {
    let temp = write_project(&[
        (
            "app/assets/sass/main.scss",
            ".a { }\n.b { }\n.c { }\n",
        ),
        ("app/pages/index.vue", "<div class=\"b\"></div>\n"),
    ]);

    let sequential = deadstyle()
        .arg(temp.path())
        .arg("--quiet")
        .output()
        .unwrap();
    let parallel = deadstyle()
        .arg(temp.path())
        .arg("--quiet")
        .arg("--parallel")
        .output()
        .unwrap();

    assert_eq!(
        String::from_utf8_lossy(&sequential.stdout),
        String::from_utf8_lossy(&parallel.stdout)
    );
}
