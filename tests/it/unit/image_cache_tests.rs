//! Unit tests for image_cache module.

use httpmock::prelude::*;
use photocraft::image_cache::{ImageCache, ImageCacheError, cache_key};
use std::fs;
use tempfile::tempdir;

const JPEG_BYTES: &[u8] = b"\xff\xd8\xff\xe0fake-jpeg";

#[test]
fn test_cache_key_is_hex_sha256() {
    let key = cache_key("https://example.com/a.jpg");
    assert_eq!(key.len(), 64);
    assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(key, cache_key("https://example.com/a.jpg"));
    assert_ne!(key, cache_key("https://example.com/b.jpg"));
}

#[test]
fn test_known_digest() {
    assert_eq!(
        cache_key(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_path_for_lives_under_root() {
    let dir = tempdir().unwrap();
    let cache = ImageCache::new(dir.path());
    let path = cache.path_for("https://example.com/a.jpg");
    assert_eq!(path.parent(), Some(dir.path()));
    assert!(!cache.is_cached("https://example.com/a.jpg"));
    assert!(cache.cached_path("https://example.com/a.jpg").is_none());
}

#[test]
fn test_fetch_writes_file() {
    let server = MockServer::start();
    let image = server.mock(|when, then| {
        when.method(GET).path("/photo.jpg");
        then.status(200)
            .header("Content-Type", "image/jpeg")
            .body(JPEG_BYTES);
    });

    let dir = tempdir().unwrap();
    let cache = ImageCache::new(dir.path().join("images"));
    let url = server.url("/photo.jpg");

    let path = cache.fetch(&url).unwrap();
    image.assert();
    assert_eq!(path, cache.path_for(&url));
    assert_eq!(fs::read(&path).unwrap(), JPEG_BYTES);
    assert!(cache.is_cached(&url));
}

#[test]
fn test_cache_hit_skips_network() {
    let server = MockServer::start();
    let image = server.mock(|when, then| {
        when.method(GET).path("/photo.jpg");
        then.status(200).body(JPEG_BYTES);
    });

    let dir = tempdir().unwrap();
    let cache = ImageCache::new(dir.path());
    let url = server.url("/photo.jpg");

    cache.fetch(&url).unwrap();
    cache.fetch(&url).unwrap();
    image.assert_hits(1);
}

#[test]
fn test_http_error_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing.jpg");
        then.status(404);
    });

    let dir = tempdir().unwrap();
    let cache = ImageCache::new(dir.path());
    let url = server.url("/missing.jpg");

    let err = cache.fetch(&url).unwrap_err();
    match err {
        ImageCacheError::Status { status, url: failed } => {
            assert_eq!(status, 404);
            assert_eq!(failed, url);
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(!cache.is_cached(&url), "failed downloads leave no file");
}

#[test]
fn test_prefetch_reports_each_url_in_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/one.jpg");
        then.status(200).body(JPEG_BYTES);
    });
    server.mock(|when, then| {
        when.method(GET).path("/two.jpg");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path("/three.jpg");
        then.status(200).body(JPEG_BYTES);
    });

    let dir = tempdir().unwrap();
    let cache = ImageCache::new(dir.path());
    let urls: Vec<String> = ["/one.jpg", "/two.jpg", "/three.jpg"]
        .iter()
        .map(|p| server.url(*p))
        .collect();

    let events = cache.prefetch(urls.clone()).unwrap().wait();
    assert_eq!(events.len(), 3);
    for (event, url) in events.iter().zip(&urls) {
        assert_eq!(&event.url, url);
    }
    assert!(events[0].result.is_ok());
    assert!(matches!(
        events[1].result,
        Err(ImageCacheError::Status { status: 500, .. })
    ));
    assert!(events[2].result.is_ok());
}

#[test]
fn test_prefetch_empty_list() {
    let dir = tempdir().unwrap();
    let cache = ImageCache::new(dir.path());
    let events = cache.prefetch(Vec::new()).unwrap().wait();
    assert!(events.is_empty());
}
