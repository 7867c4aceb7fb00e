mod common;

use axum::http::{StatusCode, header};
use common::TestContext;
use serde_json::json;
use std::path::Path;

/// Decodes the single QR code in a PNG file.
fn decode_qr(path: &Path) -> String {
    let img = image::open(path).unwrap().to_luma8();
    let (width, height) = img.dimensions();

    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        width as usize,
        height as usize,
        |x, y| img.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1);

    let (_meta, content) = grids[0].decode().unwrap();
    content
}

#[tokio::test]
async fn test_qr_success() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/qr")
        .json(&json!({ "url": "https://example.com/page?x=1" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com/page?x=1");

    let qr_file = json["qr_file"].as_str().unwrap();
    assert!(qr_file.starts_with("qrcodes/"));
    assert!(qr_file.ends_with(".png"));

    let path = ctx.static_dir.path().join(qr_file);
    assert_eq!(decode_qr(&path), "https://example.com/page?x=1");
}

#[tokio::test]
async fn test_qr_encodes_input_verbatim() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/qr")
        .json(&json!({ "url": "example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "example.com");

    let path = ctx.static_dir.path().join(json["qr_file"].as_str().unwrap());
    assert_eq!(decode_qr(&path), "example.com");
}

#[tokio::test]
async fn test_qr_does_not_touch_store() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post("/api/qr")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status_ok();

    assert!(ctx.store.is_empty().await);
}

#[tokio::test]
async fn test_qr_files_are_distinct() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let mut files = Vec::new();
    for _ in 0..2 {
        let response = server
            .post("/api/qr")
            .json(&json!({ "url": "https://example.com" }))
            .await;
        response.assert_status_ok();
        files.push(
            response.json::<serde_json::Value>()["qr_file"]
                .as_str()
                .unwrap()
                .to_string(),
        );
    }

    assert_ne!(files[0], files[1]);
}

#[tokio::test]
async fn test_qr_image_is_served_from_static() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/qr")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    response.assert_status_ok();
    let qr_file = response.json::<serde_json::Value>()["qr_file"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/static/{}", qr_file)).await;

    response.assert_status_ok();
    assert_eq!(response.header(header::CONTENT_TYPE), "image/png");
    assert_eq!(&response.as_bytes()[..8], b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn test_qr_rejects_malformed_body() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.post("/api/qr").text("not json").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_qr_rejects_oversized_input() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/qr")
        .json(&json!({ "url": "a".repeat(8000) }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let qr_dir = ctx.static_dir.path().join("qrcodes");
    let leftovers = std::fs::read_dir(&qr_dir).map(|d| d.count()).unwrap_or(0);
    assert_eq!(leftovers, 0);
}
