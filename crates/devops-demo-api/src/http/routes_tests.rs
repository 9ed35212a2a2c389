
    use super::*;
    use crate::http::handlers::TIMESTAMP_FORMAT;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use chrono::NaiveDateTime;
    use tower::ServiceExt;

    async fn get_path(app: Router, path: &str) -> Response {
        app.oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_home_endpoint() {
        let response = get_path(create_router(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = body_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("Welcome"));
        assert_eq!(body["version"], "1.0.0");
        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = get_path(create_router(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "UP");
        assert_eq!(body["application"], "DevOps Demo App");
    }

    #[tokio::test]
    async fn test_info_endpoint() {
        let response = get_path(create_router(), "/info").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["app"], "DevOps Demo Application");
        assert_eq!(body["description"], "Complete CI/CD Pipeline Demo");
        let tools = body["tools"].as_str().unwrap();
        assert!(tools.contains("Jenkins"));
        assert!(tools.contains("Docker"));
    }

    #[tokio::test]
    async fn test_sequential_timestamps_non_decreasing() {
        let app = create_router();
        let first = body_json(get_path(app.clone(), "/").await).await;
        let second = body_json(get_path(app, "/").await).await;

        let parse = |v: &serde_json::Value| {
            NaiveDateTime::parse_from_str(v["timestamp"].as_str().unwrap(), TIMESTAMP_FORMAT)
                .unwrap()
        };
        assert!(parse(&second) >= parse(&first));
    }

    #[tokio::test]
    async fn test_unknown_paths_return_not_found() {
        for path in ["/missing", "/healthz", "/info/extra", "/api/info"] {
            let response = get_path(create_router(), path).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {path}");
        }
    }

    #[tokio::test]
    async fn test_post_not_allowed() {
        let response = create_router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_concurrent_requests_are_independent() {
        let app = create_router();
        let mut tasks = Vec::new();

        for i in 0..30 {
            let app = app.clone();
            let path = ["/", "/health", "/info"][i % 3];
            tasks.push(tokio::spawn(async move {
                let response = get_path(app, path).await;
                (path, response.status(), body_json(response).await)
            }));
        }

        for task in tasks {
            let (path, status, body) = task.await.unwrap();
            assert_eq!(status, StatusCode::OK);
            match path {
                "/" => {
                    assert!(body["message"].as_str().unwrap().contains("Welcome"));
                    assert!(body.get("status").is_none());
                }
                "/health" => {
                    assert_eq!(body["status"], "UP");
                    assert!(body.get("tools").is_none());
                }
                _ => {
                    assert!(body["tools"].as_str().unwrap().contains("Docker"));
                    assert!(body.get("message").is_none());
                }
            }
        }
    }
