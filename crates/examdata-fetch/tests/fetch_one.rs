use std::path::Path;

use bytes::Bytes;
use examdata_fetch::mock::MockClient;
use examdata_fetch::{DownloadResult, FetchError, Fetcher, FileName, Variant};
use tempfile::tempdir;

const BASE: &str = "https://example.test/exam/";

fn url(name: &FileName) -> String { format!("{BASE}{name}") }

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_chunked_body_is_written_verbatim() {
    let dir = tempdir().unwrap();
    let name = FileName::new(9, 2, Variant::Train);
    let client = MockClient::new().chunks(
        url(&name),
        vec![
            Bytes::from_static(b"a,b,c\n"),
            Bytes::from_static(b"1,2,3\n"),
            Bytes::from_static(b"4,5,6\n"),
        ],
    );
    let fetcher = Fetcher::new(client, BASE, dir.path());

    let result = fetcher.fetch_one(&name).await;

    assert!(matches!(result, DownloadResult::Success { bytes: 18 }));
    assert_eq!(
        std::fs::read(dir.path().join("09_2_train.csv")).unwrap(),
        b"a,b,c\n1,2,3\n4,5,6\n"
    );
    assert_eq!(dir_entries(dir.path()), ["09_2_train.csv"]);
}

#[tokio::test]
async fn test_success_overwrites_previous_copy() {
    let dir = tempdir().unwrap();
    let name = FileName::new(6, 1, Variant::Number(2));
    std::fs::write(dir.path().join("06_1_2.csv"), "stale").unwrap();
    let client = MockClient::new().body(url(&name), "fresh");
    let fetcher = Fetcher::new(client, BASE, dir.path());

    assert!(fetcher.fetch_one(&name).await.is_success());
    assert_eq!(std::fs::read_to_string(dir.path().join("06_1_2.csv")).unwrap(), "fresh");
}

#[tokio::test]
async fn test_not_found_keeps_existing_file() {
    let dir = tempdir().unwrap();
    let name = FileName::new(5, 3, Variant::Number(3));
    std::fs::write(dir.path().join("05_3_3.csv"), "kept").unwrap();
    let client = MockClient::new().status(url(&name), 404);
    let fetcher = Fetcher::new(client, BASE, dir.path());

    let result = fetcher.fetch_one(&name).await;

    assert!(matches!(result, DownloadResult::Skipped(FetchError::Network(_))));
    assert_eq!(std::fs::read_to_string(dir.path().join("05_3_3.csv")).unwrap(), "kept");
}

#[tokio::test]
async fn test_unreachable_host_is_skipped() {
    let dir = tempdir().unwrap();
    let name = FileName::new(8, 1, Variant::Number(1));
    let client = MockClient::new().unreachable(url(&name));
    let fetcher = Fetcher::new(client, BASE, dir.path());

    let result = fetcher.fetch_one(&name).await;

    assert!(result.is_skipped());
    assert!(dir_entries(dir.path()).is_empty());
}

#[tokio::test]
async fn test_interrupted_body_leaves_no_partial_file() {
    let dir = tempdir().unwrap();
    let name = FileName::new(7, 2, Variant::Test);
    let client = MockClient::new().interrupted(url(&name), vec![Bytes::from_static(b"half,of\n")]);
    let fetcher = Fetcher::new(client, BASE, dir.path());

    let result = fetcher.fetch_one(&name).await;

    match result {
        DownloadResult::Skipped(FetchError::Stream(reason)) => assert!(reason.contains("connection reset")),
        other => panic!("expected stream error, got {other:?}"),
    }
    assert!(dir_entries(dir.path()).is_empty());
}

#[tokio::test]
async fn test_missing_destination_directory_is_skipped() {
    let dir = tempdir().unwrap();
    let name = FileName::new(10, 1, Variant::Number(3));
    let client = MockClient::new().body(url(&name), "data");
    let fetcher = Fetcher::new(client, BASE, dir.path().join("absent"));

    let result = fetcher.fetch_one(&name).await;

    assert!(matches!(result, DownloadResult::Skipped(FetchError::Fs(_))));
}

#[tokio::test]
async fn test_each_fetch_issues_exactly_one_request() {
    let dir = tempdir().unwrap();
    let name = FileName::new(10, 2, Variant::Test);
    let fetcher = Fetcher::new(MockClient::new().status(url(&name), 500), BASE, dir.path());

    fetcher.fetch_one(&name).await;

    assert_eq!(fetcher.client().requests(), [url(&name)]);
}
