// tests/fetcher_test.rs

use post_kit::{
    client::HttpClient,
    config::AppConfig,
    error::{AppError, AppResult},
    fetcher::{FetchOutcome, FetchStats, ImageFetcher, find_descriptors},
};
use std::fs;
use tempfile::tempdir;

fn fetcher() -> ImageFetcher {
    ImageFetcher::new(HttpClient::new(&AppConfig::default()).expect("client"))
}

#[tokio::test]
async fn test_fetcher_downloads_skips_and_continues_after_failures() -> AppResult<()> {
    // --- 1. Arrange (准备阶段) ---
    let mut server = mockito::Server::new_async().await;
    let server_url = server.url();

    let plain_mock = server
        .mock("GET", "/plain.jpg")
        .match_header("user-agent", "Mozilla/5.0")
        .with_status(200)
        .with_body("PLAIN")
        .expect(1)
        .create_async()
        .await;
    // 带 "→" 前缀的链接只能请求箭头后面的部分
    let arrow_mock = server
        .mock("GET", "/arrow.png")
        .with_status(200)
        .with_body("ARROW")
        .expect(1)
        .create_async()
        .await;
    let missing_mock = server
        .mock("GET", "/missing.jpg")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let dir = tempdir()?;
    let root = dir.path().join("18");
    fs::create_dir_all(root.join("1_春/nested"))?;
    fs::create_dir_all(root.join("2_夏"))?;
    fs::write(
        root.join("1_春/image_1_url.txt"),
        format!("  {}/plain.jpg\n", server_url),
    )?;
    fs::write(
        root.join("1_春/nested/image_2_url.txt"),
        format!("7→ignored→{}/arrow.png", server_url),
    )?;
    fs::write(root.join("2_夏/image_1_url.txt"), "   \n")?;
    fs::write(
        root.join("2_夏/image_2_url.txt"),
        format!("{}/missing.jpg", server_url),
    )?;
    fs::write(root.join("2_夏/image_3.txt"), "not a descriptor")?;
    // 已存在的图片会被覆盖
    fs::write(root.join("1_春/image_1.jpg"), "STALE")?;

    // --- 2. Act (执行阶段) ---
    let report = fetcher().run(&root).await?;

    // --- 3. Assert (断言阶段) ---
    assert_eq!(
        report.stats(),
        &FetchStats {
            total: 4,
            success: 2,
            skipped: 1,
            failed: 1
        }
    );
    assert_eq!(fs::read_to_string(root.join("1_春/image_1.jpg"))?, "PLAIN");
    assert_eq!(fs::read_to_string(root.join("1_春/nested/image_2.jpg"))?, "ARROW");
    assert!(!root.join("2_夏/image_1.jpg").exists());
    assert!(!root.join("2_夏/image_2.jpg").exists());
    assert!(report.failures()[0].0.ends_with("image_2_url.txt"));

    plain_mock.assert_async().await;
    arrow_mock.assert_async().await;
    missing_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_unreachable_host_is_reported_per_file() -> AppResult<()> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("image_1_url.txt"),
        "http://127.0.0.1:9/never.jpg",
    )?;
    fs::write(dir.path().join("image_2_url.txt"), "not a url at all")?;

    let report = fetcher().run(dir.path()).await?;
    assert_eq!(report.stats().failed, 2);
    assert_eq!(report.stats().success, 0);
    Ok(())
}

#[tokio::test]
async fn test_empty_descriptor_is_skipped_without_request() -> AppResult<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("image_1_url.txt"), "")?;
    let descriptors = find_descriptors(dir.path())?;
    assert_eq!(descriptors.len(), 1);

    let outcome = fetcher().process(&descriptors[0]).await?;
    assert_eq!(outcome, FetchOutcome::EmptyDescriptor);
    assert!(!descriptors[0].image_path.exists());
    Ok(())
}

#[tokio::test]
async fn test_missing_root_is_an_error_for_the_caller() {
    let dir = tempdir().unwrap();
    let result = fetcher().run(&dir.path().join("18")).await;
    assert!(matches!(result, Err(AppError::RootNotFound(_))));
}

#[tokio::test]
async fn test_marker_without_url_is_a_failure_not_a_skip() -> AppResult<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("image_1_url.txt"), "1→")?;

    let descriptors = find_descriptors(dir.path())?;
    let err = fetcher().process(&descriptors[0]).await.unwrap_err();
    assert!(matches!(err, AppError::Url(_)));

    let report = fetcher().run(dir.path()).await?;
    assert_eq!(
        report.stats(),
        &FetchStats {
            total: 1,
            success: 0,
            skipped: 0,
            failed: 1
        }
    );
    assert!(!dir.path().join("image_1.jpg").exists());
    Ok(())
}
