use super::*;

#[test]
fn endpoint_url_concatenates_base_and_endpoint() {
    assert_eq!(endpoint_url("http://localhost:8080/api", "/ping"), "http://localhost:8080/api/ping");
}

#[test]
fn status_error_message_identifies_status() {
    assert_eq!(ApiError::Status(500).to_string(), "API error: 500");
    assert_eq!(ApiError::Status(404).status(), Some(404));
}

#[test]
fn non_status_errors_have_no_status() {
    assert_eq!(ApiError::Network("refused".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("eof".to_owned()).status(), None);
}

#[test]
fn conflict_is_status_409_only() {
    assert!(ApiError::Status(409).is_conflict());
    assert!(!ApiError::Status(400).is_conflict());
    assert!(!ApiError::Network("reset".to_owned()).is_conflict());
}

#[test]
fn json_body_serializes_typed_payload() {
    #[derive(serde::Serialize)]
    struct Payload {
        title: &'static str,
    }
    assert_eq!(json_body(&Payload { title: "Q3" }).unwrap(), serde_json::json!({ "title": "Q3" }));
}

#[test]
fn json_body_reports_encode_error() {
    let mut bad = std::collections::HashMap::new();
    bad.insert((1, 2), "tuple keys are not JSON object keys");
    let err = json_body(&bad).unwrap_err();
    assert!(matches!(err, ApiError::Encode(_)));
    assert_eq!(err.status(), None);
}

#[test]
fn request_options_default_to_bare_get() {
    let opts = RequestOptions::default();
    assert_eq!(opts, RequestOptions::get());
    assert_eq!(opts.method, Method::Get);
    assert!(opts.body.is_none());
}

#[test]
fn request_options_carry_method_and_body() {
    let post = RequestOptions::post(serde_json::json!({ "title": "Q3" }));
    assert_eq!(post.method, Method::Post);
    assert_eq!(post.body, Some(serde_json::json!({ "title": "Q3" })));

    let patch = RequestOptions::patch(serde_json::json!({ "expected_version": 2 }));
    assert_eq!(patch.method, Method::Patch);
}

#[test]
fn method_displays_as_http_verb() {
    assert_eq!(Method::Get.to_string(), "GET");
    assert_eq!(Method::Post.to_string(), "POST");
    assert_eq!(Method::Patch.to_string(), "PATCH");
}

// =============================================================
// Context provisioning
// =============================================================

#[test]
fn provide_api_client_keeps_client_from_outer_scope() {
    use leptos::prelude::{Owner, expect_context};

    Owner::new().with(|| {
        provide_context(ApiClient::new(ApiConfig::new("http://shared.test/api")));
        provide_api_client();
        assert_eq!(expect_context::<ApiClient>().base_url(), "http://shared.test/api");
    });
}

#[test]
fn provide_api_client_builds_client_when_missing() {
    use leptos::prelude::{Owner, expect_context};

    Owner::new().with(|| {
        provide_api_client();
        assert_eq!(expect_context::<ApiClient>().base_url(), ApiConfig::from_env().base_url);
    });
}

#[test]
fn client_uses_configured_base_url() {
    let client = ApiClient::new(ApiConfig::new("http://localhost:8080/api/"));
    assert_eq!(client.base_url(), "http://localhost:8080/api");
}

// =============================================================
// Native transport against an in-process server
// =============================================================

#[cfg(not(feature = "hydrate"))]
mod native {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::{get, patch, post};

    async fn serve(router: Router) -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        ApiClient::with_http_client(ApiConfig::new(&format!("http://{addr}/api")), http)
    }

    #[tokio::test]
    async fn request_resolves_to_parsed_body_on_200() {
        let router = Router::new().route("/api/ping", get(|| async { axum::Json(serde_json::json!({ "ok": true })) }));
        let client = serve(router).await;

        let body: serde_json::Value = client.request("/ping", &RequestOptions::default()).await.unwrap();
        assert_eq!(body, serde_json::json!({ "ok": true }));
    }

    #[tokio::test]
    async fn request_fails_with_status_on_500() {
        let router = Router::new().route("/api/ping", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
        let client = serve(router).await;

        let err = client.get::<serde_json::Value>("/ping").await.unwrap_err();
        assert_eq!(err, ApiError::Status(500));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn request_fails_with_status_on_404() {
        let client = serve(Router::new()).await;
        let err = client.get::<serde_json::Value>("/missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn request_reports_decode_error_for_non_json_body() {
        let router = Router::new().route("/api/ping", get(|| async { "pong" }));
        let client = serve(router).await;

        let err = client.get::<serde_json::Value>("/ping").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn post_sends_json_body() {
        let router = Router::new().route(
            "/api/echo",
            post(|axum::Json(body): axum::Json<serde_json::Value>| async move {
                axum::Json(serde_json::json!({ "body": body }))
            }),
        );
        let client = serve(router).await;

        let echoed: serde_json::Value = client.post("/echo", serde_json::json!({ "title": "Q3" })).await.unwrap();
        assert_eq!(echoed["body"]["title"], "Q3");
    }

    #[tokio::test]
    async fn patch_uses_patch_verb() {
        let router = Router::new().route(
            "/api/echo",
            patch(|axum::Json(body): axum::Json<serde_json::Value>| async move {
                axum::Json(serde_json::json!({ "patched": body }))
            }),
        );
        let client = serve(router).await;

        let echoed: serde_json::Value = client.patch("/echo", serde_json::json!({ "v": 1 })).await.unwrap();
        assert_eq!(echoed["patched"]["v"], 1);

        let err = client.post::<serde_json::Value>("/echo", serde_json::json!({})).await.unwrap_err();
        assert_eq!(err.status(), Some(405));
    }

    #[tokio::test]
    async fn request_reports_network_error_when_unreachable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let client = ApiClient::with_http_client(ApiConfig::new(&format!("http://{addr}/api")), http);

        let err = client.get::<serde_json::Value>("/ping").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
