//! End-to-end tests for building the static story pages from a dataset file.

use camino::{Utf8Path, Utf8PathBuf};
use rstest::{fixture, rstest};
use storyfeed::site::{CAROUSEL_HTML, CAROUSEL_JSON, MANIFEST_JSON};
use storyfeed::{SiteBuilder, SiteManifest, StoryfeedConfig, load_stories};
use tempfile::TempDir;

const DATASET: &str = r#"[
  {"name": "Ada", "text": "Loved it", "role": "Engineer", "img": "ada.png"},
  {"name": "Grace", "text": "Great docs", "img": "grace.png", "linkedin": "https://example.com/grace"},
  {"name": "Linus", "text": "Fast"},
  {"name": "Mary", "text": "Clear", "img": "mary.png"}
]"#;

struct Workspace {
    _temp: TempDir,
    root: Utf8PathBuf,
}

#[fixture]
fn workspace() -> Workspace {
    let temp = TempDir::new().expect("create temp dir");
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("UTF-8 temp path");
    std::fs::write(root.join("stories.json"), DATASET).expect("write dataset");
    Workspace { _temp: temp, root }
}

fn read(dir: &Utf8Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).expect("generated file should exist")
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("expected {needle} in page:\n{html}"))
}

fn build(workspace: &Workspace, page_size: usize) -> (Utf8PathBuf, SiteManifest) {
    let config = StoryfeedConfig {
        page_size,
        ..StoryfeedConfig::default()
    };
    let stories = load_stories(&workspace.root.join("stories.json")).expect("dataset loads");
    let out_dir = workspace.root.join("site");
    let manifest = SiteBuilder::from_config(&config, stories)
        .expect("valid configuration")
        .write(&out_dir)
        .expect("site should be written");
    (out_dir, manifest)
}

#[rstest]
fn dataset_builds_paginated_site(workspace: Workspace) {
    let (out_dir, manifest) = build(&workspace, 2);

    assert_eq!(manifest.page_count, 2);
    assert_eq!(manifest.story_count, 4);
    let first = read(&out_dir, "feedback-1.html");
    let second = read(&out_dir, "feedback-2.html");
    assert!(first.contains(">Grace</h3>"));
    assert!(!first.contains(">Linus</h3>"));
    assert!(second.contains(">Mary</h3>"));

    let written: SiteManifest =
        serde_json::from_str(&read(&out_dir, MANIFEST_JSON)).expect("manifest should parse");
    assert_eq!(written, manifest);
}

#[rstest]
fn photo_side_alternates_across_pages(workspace: Workspace) {
    let (out_dir, _manifest) = build(&workspace, 2);
    let first = read(&out_dir, "feedback-1.html");
    let second = read(&out_dir, "feedback-2.html");

    assert!(position(&first, ">Ada</h3>") < position(&first, "alt=\"Ada\""));
    assert!(position(&first, "alt=\"Grace\"") < position(&first, ">Grace</h3>"));
    assert!(position(&second, ">Mary</h3>") < position(&second, "alt=\"Mary\""));
    assert!(second.contains("col-md-12 p-5"));
}

#[rstest]
fn carousel_files_accompany_the_pages(workspace: Workspace) {
    let (out_dir, _manifest) = build(&workspace, 5);

    let carousel = read(&out_dir, CAROUSEL_HTML);
    assert!(carousel.contains("swiper-wrapper"));
    assert!(carousel.contains("Linus"));

    let config: serde_json::Value =
        serde_json::from_str(&read(&out_dir, CAROUSEL_JSON)).expect("carousel JSON parses");
    assert_eq!(config["carousel"]["slidesPerView"], 3);
}

#[rstest]
fn malformed_dataset_is_rejected(workspace: Workspace) {
    let path = workspace.root.join("broken.json");
    std::fs::write(&path, "{\"name\": \"not an array\"}").expect("write dataset");

    let result = load_stories(&path);

    assert!(matches!(
        result,
        Err(storyfeed::FeedError::InvalidStories { .. })
    ));
}

#[rstest]
fn output_dir_may_climb_out_of_a_subdirectory(workspace: Workspace) {
    let nested = workspace.root.join("docs");
    std::fs::create_dir(&nested).expect("create nested dir");
    let out_dir = nested.join("../public");
    let stories = load_stories(&workspace.root.join("stories.json")).expect("dataset loads");

    let manifest = SiteBuilder::from_config(&StoryfeedConfig::default(), stories)
        .expect("valid configuration")
        .write(&out_dir)
        .expect("site should be written beside the subdirectory");

    assert_eq!(manifest.page_count, 1);
    let public = workspace.root.join("public");
    assert!(read(&public, "feedback-1.html").contains(">Ada</h3>"));
    assert!(public.join(MANIFEST_JSON).is_file());
}
