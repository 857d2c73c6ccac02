// tests/integration/end_to_end.rs
use arborealize::{app::render_document, cli::Args, config::Config};
use clap::Parser;

#[path = "../common/mod.rs"]
mod common;
use common::TempTree;

fn config_for(tree: &TempTree, extra: &[&str]) -> Config {
    let root = tree.path().to_str().expect("utf-8 temp path");
    let mut argv = vec!["arborealize", "--root", root];
    argv.extend_from_slice(extra);
    Config::from_args(Args::try_parse_from(argv).unwrap()).unwrap()
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle).unwrap_or_else(|| panic!("missing {needle} in\n{html}"))
}

#[test]
fn sample_tree_renders_nested_outline() {
    let tree = TempTree::sample("end_to_end");
    let html = render_document(&config_for(&tree, &[])).unwrap();

    let title = format!("<title>{}/</title>", tree.path().display());
    assert!(html.contains(&title));

    let docs = position(&html, r#"<label for="docs_">docs</label>"#);
    let img = position(&html, r#"<label for="docs_img_">img</label>"#);
    let logo = position(&html, r#"href="docs/img/logo.png""#);
    let readme = position(&html, r#"href="docs/readme.md""#);
    let top = position(&html, r#"href="a.txt""#);
    assert!(docs < img && img < logo && logo < readme && readme < top);

    assert!(html.contains(r#">readme.md <span class="filesize">2 KB</span>"#));
    assert!(html.contains(r#">logo.png <span class="filesize">500 bytes</span>"#));
    assert!(html.contains(r#">a.txt <span class="filesize">10 bytes</span>"#));

    // img is indented deeper than docs
    let indent_of = |needle: &str| {
        html.lines().find(|line| line.contains(needle)).map(|line| line.len() - line.trim_start().len())
    };
    assert!(indent_of("for=\"docs_img_\"") > indent_of("for=\"docs_\""));
}

#[test]
fn empty_directories_are_left_out() {
    let tree = TempTree::new("end_to_end_empty");
    tree.create_dir("nothing/here");
    tree.write_file("kept/file.bin", 1);

    let html = render_document(&config_for(&tree, &[])).unwrap();
    assert!(html.contains(">kept</label>"));
    assert!(!html.contains(">nothing</label>"));
    assert!(!html.contains(">here</label>"));
}

#[test]
fn empty_root_renders_minimal_outline() {
    let tree = TempTree::new("end_to_end_bare");
    let html = render_document(&config_for(&tree, &[])).unwrap();

    assert!(html.contains(r#"<ol class="tree">"#));
    assert!(html.contains(r#"<label for="root">/</label>"#));
    assert!(!html.contains("<li class=\"file\">"));
    assert!(html.ends_with("</body>\n</html>\n"));
}

#[test]
fn repeated_runs_are_identical() {
    let tree = TempTree::sample("end_to_end_repeat");
    for name in ["zz.txt", "mm.txt", "aa.txt"] {
        tree.write_file(&format!("docs/{name}"), 3);
    }
    let config = config_for(&tree, &[]);
    assert_eq!(render_document(&config).unwrap(), render_document(&config).unwrap());
}

#[test]
fn presentation_flags_reach_the_document() {
    let tree = TempTree::sample("end_to_end_flags");
    let html = render_document(&config_for(&tree, &["--no-sizes", "--stylesheet", "local.css"])).unwrap();

    assert!(html.contains(r#"<link rel="stylesheet" href="local.css" />"#));
    assert!(!html.contains("filesize"));
    assert!(html.contains(r#"<a href="a.txt">a.txt</a>"#));
}

#[test]
fn missing_root_fails() {
    let tree = TempTree::new("end_to_end_missing");
    let missing = tree.path().join("absent");
    let argv = ["arborealize", "--root", missing.to_str().unwrap()];
    let config = Config::from_args(Args::try_parse_from(argv).unwrap()).unwrap();

    let err = render_document(&config).unwrap_err();
    assert!(format!("{err:#}").contains("failed to scan directory tree"));
}

#[cfg(unix)]
#[test]
fn non_utf8_sibling_directories_stay_separate() {
    use std::{ffi::OsStr, fs, os::unix::ffi::OsStrExt};

    let tree = TempTree::new("end_to_end_bytes");
    let pairs: [(&[u8], &[u8]); 2] = [(b"d\xfe", b"f\xfe"), (b"d\xff", b"f\xff")];
    for (dir, file) in pairs {
        let dir = tree.path().join(OsStr::from_bytes(dir));
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join(OsStr::from_bytes(file)), "x").unwrap();
    }

    let html = render_document(&config_for(&tree, &[])).unwrap();

    assert_eq!(html.matches("<label for=").count(), 3);
    assert_eq!(html.matches("<li class=\"file\">").count(), 2);
    let fe = position(&html, r#"<label for="d-fe_">"#);
    let ff = position(&html, r#"<label for="d-ff_">"#);
    assert!(fe < ff);
    assert!(html.contains(r#"href="d%FE/f%FE""#));
    assert!(html.contains(r#"href="d%FF/f%FF""#));
}
