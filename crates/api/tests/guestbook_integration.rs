//! Integration tests for the public guestbook.

mod common;

use axum::http::StatusCode;
use common::{
    assert_redirect, cookie_pair, create_test_app, follow_with_flash, form_request, get_request,
    parse_response_body, send, set_cookies, test_config,
};

#[tokio::test]
async fn test_guestbook_page_defaults() {
    let app = create_test_app(test_config());

    let response = send(&app.router, get_request("/", &[])).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookies(&response).is_empty());

    let body = parse_response_body(response).await;
    assert_eq!(body["wishes"], serde_json::json!([]));
    assert_eq!(body["flash"], serde_json::Value::Null);
    assert_eq!(body["barat"]["date"], "28 March 2026");
    assert_eq!(body["walima"]["venue"], "Haji Jamil Akhter's home");
    assert_eq!(body["background_image_url"], serde_json::Value::Null);
    assert!(body["gallery_url"].as_str().unwrap().starts_with("https://"));
}

#[tokio::test]
async fn test_submit_wish_redirects_and_lists_newest_first() {
    let app = create_test_app(test_config());

    let first = send(
        &app.router,
        form_request("/", &[("name", "Ali"), ("message", "Mubarak ho!")], &[]),
    )
    .await;
    assert_redirect(&first, "/");

    let second = send(
        &app.router,
        form_request("/", &[("name", " Sara "), ("message", "Best wishes")], &[]),
    )
    .await;
    assert_redirect(&second, "/");

    let page = follow_with_flash(&app.router, &second, &[]).await;
    assert_eq!(page["flash"]["kind"], "success");
    assert_eq!(page["flash"]["message"], "Thank you for your wishes! 💌");

    let wishes = page["wishes"].as_array().unwrap();
    assert_eq!(wishes.len(), 2);
    assert_eq!(wishes[0]["name"], "Sara");
    assert_eq!(wishes[1]["name"], "Ali");
}

#[tokio::test]
async fn test_flash_is_shown_once() {
    let app = create_test_app(test_config());

    let response = send(
        &app.router,
        form_request("/", &[("name", "Ali"), ("message", "Mubarak")], &[]),
    )
    .await;
    let flash = cookie_pair(&response, "ma_flash").unwrap();

    let page = send(&app.router, get_request("/", &[&flash])).await;
    let cleared = cookie_pair(&page, "ma_flash").unwrap();
    assert_eq!(cleared, "ma_flash=");

    // The browser now sends no flash.
    let next = parse_response_body(send(&app.router, get_request("/", &[])).await).await;
    assert_eq!(next["flash"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_blank_submission_renders_error_without_write() {
    let app = create_test_app(test_config());

    for fields in [
        vec![("name", ""), ("message", "hello")],
        vec![("name", "Ali"), ("message", "   ")],
        vec![("name", "Ali")],
    ] {
        let response = send(&app.router, form_request("/", &fields, &[])).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = parse_response_body(response).await;
        assert_eq!(body["flash"]["kind"], "error");
        assert_eq!(body["flash"]["message"], "Please fill in both Name and Message.");
        assert_eq!(body["wishes"], serde_json::json!([]));
    }

    assert!(app.wishes.is_empty());
}

#[tokio::test]
async fn test_background_image_when_present() {
    let static_dir = std::env::temp_dir().join(format!("marriage-app-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(static_dir.join("images")).unwrap();
    std::fs::write(static_dir.join("images/background.jpg"), b"jpeg").unwrap();

    let mut config = test_config();
    config.site.static_dir = static_dir.to_string_lossy().to_string();
    let app = create_test_app(config);

    let body = parse_response_body(send(&app.router, get_request("/", &[])).await).await;
    assert_eq!(body["background_image_url"], "/static/images/background.jpg");

    let image = send(&app.router, get_request("/static/images/background.jpg", &[])).await;
    assert_eq!(image.status(), StatusCode::OK);

    std::fs::remove_dir_all(&static_dir).ok();
}

#[tokio::test]
async fn test_request_id_header() {
    let app = create_test_app(test_config());

    let response = send(&app.router, get_request("/", &[])).await;
    assert!(response.headers().contains_key("x-request-id"));
}
