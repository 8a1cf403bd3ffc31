//! End-to-End CLI Tests for modernsite

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the modernsite binary, isolated from any
/// config file in the caller's working directory
fn modernsite(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("modernsite");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let temp = TempDir::new().expect("temp dir");
        modernsite(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("print"))
            .stdout(predicate::str::contains("content"));
    }

    #[test]
    fn shows_version() {
        let temp = TempDir::new().expect("temp dir");
        modernsite(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_menu_state() {
        let temp = TempDir::new().expect("temp dir");
        modernsite(&temp)
            .args(["print", "--menu", "ajar"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown menu state"));
    }
}

mod print {
    use super::*;

    #[test]
    fn prints_document_with_all_anchors() {
        let temp = TempDir::new().expect("temp dir");
        let assert = modernsite(&temp).arg("print").assert().success();
        let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");

        assert!(stdout.starts_with("<!DOCTYPE html>"));
        for id in ["home", "features", "about", "services", "contact"] {
            assert!(stdout.contains(&format!("id=\"{}\"", id)), "missing #{}", id);
        }
        assert!(stdout.contains("<script>"));
    }

    #[test]
    fn static_open_snapshot() {
        let temp = TempDir::new().expect("temp dir");
        modernsite(&temp)
            .args(["print", "--menu", "open", "--static"])
            .assert()
            .success()
            .stdout(predicate::str::contains("data-menu-state=\"open\""))
            .stdout(predicate::str::contains("data-role=\"mobile-panel\""))
            .stdout(predicate::str::contains("<script>").not());
    }

    #[test]
    fn logs_stay_off_stdout() {
        let temp = TempDir::new().expect("temp dir");
        modernsite(&temp)
            .args(["--log-level", "debug", "print", "--static"])
            .assert()
            .success()
            .stdout(predicate::str::contains("rendered page").not());
    }
}

mod build {
    use super::*;

    #[test]
    fn writes_index_into_out_dir() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("public");
        modernsite(&temp)
            .args(["build", "--out-dir"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let html = std::fs::read_to_string(out.join("index.html")).expect("index written");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Most Popular"));
    }

    #[test]
    fn honours_config_file() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("modernsite.toml"),
            "title = \"Acme Launch\"\nout_dir = \"site\"\nfile_name = \"landing.html\"\ninteractive = false\n",
        )
        .expect("write config");

        modernsite(&temp).arg("build").assert().success();

        let html = std::fs::read_to_string(temp.path().join("site").join("landing.html"))
            .expect("landing written");
        assert!(html.contains("<title>Acme Launch</title>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn invalid_file_name_fails() {
        let temp = TempDir::new().expect("temp dir");
        modernsite(&temp)
            .args(["build", "--file-name", "nested/index.html"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid output file name"));
    }
}

mod content {
    use super::*;

    #[test]
    fn prints_tables_as_json() {
        let temp = TempDir::new().expect("temp dir");
        let assert = modernsite(&temp).arg("content").assert().success();
        let json: serde_json::Value =
            serde_json::from_slice(&assert.get_output().stdout).expect("valid json");

        assert_eq!(json["navigation"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["pricing_tiers"][1]["name"], "Professional");
        assert_eq!(json["pricing_tiers"][1]["highlighted"], true);
    }
}
