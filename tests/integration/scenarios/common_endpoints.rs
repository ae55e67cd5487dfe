use crate::helpers::{
    client::{Keys, TestClient},
    mock_server::MockServer,
};
use axum::http::StatusCode;

/// 観点: /health エンドポイントが 200 OK を返すか
#[tokio::test]
async fn test_health_check() {
    let mock = MockServer::start().await;
    let client = TestClient::new(&mock, Keys::both());
    let (status, _, body) = client.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
    assert_eq!(mock.listing_hits(), 0);
    assert_eq!(mock.model_hits(), 0);
}

/// 観点: 存在しないパスは 404 になるか
#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let mock = MockServer::start().await;
    let client = TestClient::new(&mock, Keys::both());
    let (status, _, _) = client.get("/api/jobs").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
