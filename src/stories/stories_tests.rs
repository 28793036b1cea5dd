//! Unit tests for story records and dataset loading.

use std::io::Write;

use camino::Utf8PathBuf;
use rstest::rstest;

use super::*;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[rstest]
fn parse_accepts_site_field_names() -> TestResult {
    let stories = parse_stories(
        r#"[
            {"name": "Ada", "text": "Great docs", "role": "Engineer",
             "img": "/img/ada.png", "linkedin": "https://www.linkedin.com/in/ada"},
            {"name": "Grace", "text": "Helped a lot"}
        ]"#,
    )?;

    let first = stories.first().ok_or("missing first story")?;
    assert_eq!(first.role_label(), Some("Engineer"));
    assert_eq!(first.image_url(), Some("/img/ada.png"));
    assert!(first.image_first, "first story with a photo leads with text");

    let second = stories.get(1).ok_or("missing second story")?;
    assert!(second.role.is_none());
    assert!(!second.has_image());
    Ok(())
}

#[rstest]
fn parse_accepts_long_field_aliases() -> TestResult {
    let stories = parse_stories(
        r#"[{"name": "Lin", "text": "Nice", "image": "/lin.png", "link": "https://example.com"}]"#,
    )?;

    let story = stories.first().ok_or("missing story")?;
    assert_eq!(story.image_url(), Some("/lin.png"));
    assert!(story.profile_url().is_some());
    Ok(())
}

#[rstest]
fn parse_ignores_image_first_in_source() -> TestResult {
    let stories = parse_stories(r#"[{"name": "A", "text": "B", "image_first": true}]"#)?;

    let story = stories.first().ok_or("missing story")?;
    assert!(!story.image_first);
    Ok(())
}

#[rstest]
#[case::not_an_array(r#"{"name": "A"}"#)]
#[case::missing_text(r#"[{"name": "A"}]"#)]
#[case::truncated("[{")]
fn parse_rejects_malformed_input(#[case] source: &str) {
    let result = parse_stories(source);

    assert!(
        matches!(result, Err(FeedError::InvalidStories { .. })),
        "expected InvalidStories, got {result:?}"
    );
}

#[rstest]
#[case::https("https://example.com/in/a", true)]
#[case::http("http://example.com", true)]
#[case::mailto("mailto:a@example.com", false)]
#[case::relative("/profile/a", false)]
#[case::blank("  ", false)]
fn profile_url_only_keeps_web_links(#[case] link: &str, #[case] kept: bool) {
    let story = Story::new("a", "b").with_profile_link(link);

    assert_eq!(story.profile_url().is_some(), kept);
}

#[rstest]
fn blank_role_is_omitted() {
    let story = Story::new("a", "b").with_role(" ");

    assert_eq!(story.role_label(), None);
}

#[rstest]
fn load_reads_file_from_disk() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = Utf8PathBuf::from_path_buf(dir.path().join("stories.json"))
        .map_err(|_| "temporary path is not UTF-8")?;
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, r#"[{{"name": "A", "text": "B", "img": "/a.png"}}]"#)?;

    let stories = load_stories(&path)?;

    assert_eq!(stories.len(), 1);
    assert!(stories.iter().all(|story| story.image_first));
    Ok(())
}

#[rstest]
fn load_reports_missing_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.json"))
        .map_err(|_| "temporary path is not UTF-8")?;

    let result = load_stories(&path);

    assert!(matches!(result, Err(FeedError::Io { .. })), "got {result:?}");
    Ok(())
}
