//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Writes a small but realistic archive: two threads (one with a photo),
/// one reply, one retweet, one bare mention.
fn write_fixture_archive(root: &Path) {
    let data = root.join("data");
    fs::create_dir_all(data.join("tweets_media")).unwrap();
    fs::write(data.join("tweets_media").join("12-ABC.jpg"), b"\xff\xd8fakejpeg").unwrap();

    let tweets = r#"window.YTD.tweets.part0 = [ {
  "tweet" : {
    "id" : "10",
    "full_text" : "Thread start https://t.co/xyz",
    "created_at" : "Wed Oct 10 20:19:24 +0000 2018",
    "entities" : { "urls" : [ {
      "url" : "https://t.co/xyz",
      "display_url" : "example.com",
      "expanded_url" : "https://example.com/page"
    } ] }
  }
}, {
  "tweet" : {
    "id" : "11",
    "full_text" : "@ada more thoughts",
    "created_at" : "Wed Oct 10 20:25:00 +0000 2018",
    "in_reply_to_status_id_str" : "10",
    "entities" : { "urls" : [ ] }
  }
}, {
  "tweet" : {
    "id" : "12",
    "full_text" : "Look https://t.co/pic",
    "created_at" : "Thu Oct 11 09:00:00 +0000 2018",
    "entities" : { "urls" : [ ] },
    "extended_entities" : { "media" : [ {
      "url" : "https://t.co/pic",
      "media_url" : "http://pbs.twimg.com/media/ABC.jpg",
      "type" : "photo"
    } ] }
  }
}, {
  "tweet" : {
    "id" : "13",
    "full_text" : "RT @other: boosted",
    "created_at" : "Thu Oct 11 10:00:00 +0000 2018",
    "entities" : { "urls" : [ ] }
  }
}, {
  "tweet" : {
    "id" : "14",
    "full_text" : "@stranger hello",
    "created_at" : "Thu Oct 11 11:00:00 +0000 2018",
    "entities" : { "urls" : [ ] }
  }
} ]"#;
    fs::write(data.join("tweets.js"), tweets).unwrap();
}

fn bin() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("thread-press"))
}

#[test]
fn test_cli_version() {
    let mut cmd = bin();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("thread-press"));
}

#[test]
fn test_cli_help() {
    let mut cmd = bin();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Convert a Twitter/X archive"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("info"));
}

#[test]
fn test_info_reports_counts() {
    let archive = TempDir::new().unwrap();
    write_fixture_archive(archive.path());

    let mut cmd = bin();
    cmd.args(["info", archive.path().to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("5 tweets loaded"))
        .stdout(predicate::str::contains("2 threads found"))
        .stdout(predicate::str::contains("1 replies found"))
        .stdout(predicate::str::contains("1 threads carry media"));
}

#[test]
fn test_export_writes_posts_and_media() {
    let archive = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fixture_archive(archive.path());

    let mut cmd = bin();
    cmd.args([
        "export",
        archive.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
        "--author",
        "Ada",
        "--tag",
        "archive",
    ]);
    cmd.assert().success().stdout(predicate::str::contains("2 threads found"));

    // Thread without media: standalone file.
    let plain = output.path().join("20181010-10.md");
    let body = fs::read_to_string(&plain).unwrap();
    assert!(body.starts_with("---\ntitle: 10\ndate: 2018-10-10T20:19:24+00:00\n"));
    assert!(body.contains("author: Ada"));
    assert!(body.contains("tags: [\"archive\"]"));
    assert!(body.contains("[example.com](https://example.com/page)"));
    // The reply lost its leading mention and joined as a new paragraph.
    assert!(body.contains("\n\nmore thoughts\n"));
    // The retweet and the bare mention are nowhere in the output.
    assert!(!body.contains("boosted"));
    assert!(!body.contains("stranger"));

    // Thread with media: page bundle with renamed attachment.
    let bundle = output.path().join("20181011-12");
    let index = fs::read_to_string(bundle.join("index.md")).unwrap();
    assert!(index.contains("[![](1.jpg)](1.jpg)"));
    assert!(bundle.join("1.jpg").is_file());
}

#[test]
fn test_export_csv_summary() {
    let archive = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fixture_archive(archive.path());
    let csv_path = output.path().join("threads.csv");

    let mut cmd = bin();
    cmd.args([
        "export",
        archive.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
        "--csv",
        csv_path.to_str().unwrap(),
        "--username",
        "ada",
    ]);
    cmd.assert().success();

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("id,date,time,replies,media,link,body\n"));
    assert!(csv.contains("https://x.com/ada/status/10"));
    // Descending id order: thread 12 before thread 10.
    assert!(csv.find("\n12,").unwrap() < csv.find("\n10,").unwrap());
}

#[test]
fn test_export_csv_requires_username() {
    let archive = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fixture_archive(archive.path());
    let csv_path = output.path().join("threads.csv");

    let mut cmd = bin();
    cmd.args([
        "export",
        archive.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
        "--csv",
        csv_path.to_str().unwrap(),
    ]);
    cmd.assert().failure().stderr(predicate::str::contains("--csv requires --username"));
}

#[test]
fn test_export_date_filter_excludes_threads() {
    let archive = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fixture_archive(archive.path());

    let mut cmd = bin();
    cmd.args([
        "export",
        archive.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
        "--after",
        "2018-10-11",
    ]);
    cmd.assert().success().stdout(predicate::str::contains("1 threads found"));
    assert!(!output.path().join("20181010-10.md").exists());
    assert!(output.path().join("20181011-12").join("index.md").is_file());
}

#[test]
fn test_export_rejects_bad_date_filter() {
    let archive = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fixture_archive(archive.path());

    let mut cmd = bin();
    cmd.args([
        "export",
        archive.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
        "--after",
        "someday",
    ]);
    cmd.assert().failure().stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_export_aborts_on_unsupported_media() {
    let archive = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let data = archive.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("tweets.js"),
        r#"window.YTD.tweets.part0 = [ {
  "tweet" : {
    "id" : "20",
    "full_text" : "odd https://t.co/m",
    "created_at" : "Wed Oct 10 20:19:24 +0000 2018",
    "entities" : { "urls" : [ ] },
    "extended_entities" : { "media" : [ {
      "url" : "https://t.co/m",
      "media_url" : "http://pbs.twimg.com/media/weird.bin",
      "type" : "hologram"
    } ] }
  }
} ]"#,
    )
    .unwrap();

    let mut cmd = bin();
    cmd.args([
        "export",
        archive.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unsupported media type 'hologram'"));
}

#[test]
fn test_missing_archive_fails() {
    let output = TempDir::new().unwrap();
    let mut cmd = bin();
    cmd.args(["export", "/nonexistent/archive", output.path().to_str().unwrap()]);
    cmd.assert().failure().stderr(predicate::str::contains("Failed reading archive file"));
}
