use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::TempTree;

fn arborealize() -> Command {
    Command::new(env!("CARGO_BIN_EXE_arborealize"))
}

#[test]
fn shows_help() {
    arborealize()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--root").and(predicate::str::contains("--output")));
}

#[test]
fn writes_document_to_stdout() {
    let tree = TempTree::sample("smoke_stdout");
    arborealize()
        .arg("--root")
        .arg(tree.path())
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("<html>\n")
                .and(predicate::str::contains(r#"<label for="docs_img_">img</label>"#))
                .and(predicate::str::contains(r#"<span class="filesize">2 KB</span>"#))
                .and(predicate::str::ends_with("</body>\n</html>\n")),
        );
}

#[test]
fn defaults_to_working_directory() {
    let tree = TempTree::sample("smoke_cwd");
    arborealize()
        .current_dir(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"href="docs/readme.md""#));
}

#[test]
fn writes_document_to_file() {
    let tree = TempTree::sample("smoke_file");
    let out_dir = TempTree::new("smoke_out");
    let target = out_dir.path().join("tree.html");

    arborealize()
        .arg("--root")
        .arg(tree.path())
        .arg("--output")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = std::fs::read_to_string(&target).unwrap();
    assert!(html.contains(r#"href="a.txt""#));
}

#[test]
fn missing_root_fails_without_output() {
    let tree = TempTree::new("smoke_missing");
    arborealize()
        .arg("--root")
        .arg(tree.path().join("absent"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let tree = TempTree::sample("smoke_verbose");
    arborealize()
        .arg("--root")
        .arg(tree.path())
        .arg("-v")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("3 files"))
        .stdout(predicate::str::contains("3 files").not());
}
