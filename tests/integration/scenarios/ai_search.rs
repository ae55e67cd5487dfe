use crate::helpers::{
    client::{Keys, TestClient},
    mock_server::{MockServer, SLOW_RESPONSE},
};
use axum::http::StatusCode;
use std::time::{Duration, Instant};

/// 観点: モデルのコードフェンス付き返答から検索条件を取り出せるか
#[tokio::test]
async fn test_ai_search_translates_prompt() {
    let mock = MockServer::start().await;
    let client = TestClient::new(&mock, Keys::both());

    let (status, body) = client
        .post_ai_search("react internship in bangalore posted this week")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "React Intern");
    assert_eq!(body["location"], "Bangalore");
    assert_eq!(body["datePosted"], "week");
    assert_eq!(mock.model_hits(), 1);
    assert_eq!(mock.listing_hits(), 0);
}

/// 観点: JSON でない返答は 500 と共通メッセージになるか
#[tokio::test]
async fn test_ai_search_non_json_reply_is_error() {
    let mock = MockServer::start().await;
    let client = TestClient::new(&mock, Keys::both());

    let (status, body) = client.post_ai_search("garbage in, garbage out").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to process AI search");
    assert_eq!(mock.model_hits(), 1);
}

/// 観点: モデル側の HTTP エラーも同じ扱いになるか
#[tokio::test]
async fn test_ai_search_upstream_status_is_error() {
    let mock = MockServer::start().await;
    let client = TestClient::new(&mock, Keys::both());

    let (status, body) = client.post_ai_search("overload the model").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to process AI search");
}

/// 観点: 読めない本文でも JSON のエラーを返し、モデルは呼ばれないか
#[tokio::test]
async fn test_ai_search_unreadable_body_is_json_error() {
    let mock = MockServer::start().await;
    let client = TestClient::new(&mock, Keys::both());

    for (content_type, body) in [
        ("application/json", "not json"),
        ("text/plain", r#"{"prompt":"react internship"}"#),
        ("application/json", r#"{"prompt":42}"#),
        ("application/json", ""),
    ] {
        let (status, json) = client.post_ai_search_raw(content_type, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", body);
        assert_eq!(json["error"], "Failed to process AI search", "{}", body);
    }
    assert_eq!(mock.model_hits(), 0);
}

/// 観点: モデルが応答しない場合もタイムアウト内に 500 を返すか
#[tokio::test]
async fn test_ai_search_slow_model_is_cut_off() {
    let mock = MockServer::start().await;
    let timeout = Duration::from_secs(1);
    let client = TestClient::with_timeout(&mock, Keys::both(), timeout);

    let started = Instant::now();
    let (status, body) = client.post_ai_search("slow react internship").await;
    let elapsed = started.elapsed();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to process AI search");
    assert!(elapsed >= timeout, "{:?}", elapsed);
    assert!(elapsed < SLOW_RESPONSE, "{:?}", elapsed);
    assert_eq!(mock.model_hits(), 1);
}

/// 観点: 重複したフォームパラメータはトップへ戻すだけか
#[tokio::test]
async fn test_ai_search_redirect_duplicate_params() {
    let mock = MockServer::start().await;
    let client = TestClient::new(&mock, Keys::both());

    let (status, location, _) = client.get("/ai-search?prompt=a&prompt=b").await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/"));
    assert_eq!(mock.model_hits(), 0);
}

/// 観点: キー未設定はモデルを呼ばずに設定エラーを返すか
#[tokio::test]
async fn test_ai_search_missing_key() {
    let mock = MockServer::start().await;
    let client = TestClient::new(
        &mock,
        Keys {
            rapidapi: Some("test-rapidapi-key"),
            gemini: None,
        },
    );

    let (status, body) = client.post_ai_search("react internship").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Gemini API Key missing");
    assert_eq!(mock.model_hits(), 0);
}

/// 観点: 空のプロンプトは 400 になり、モデルは呼ばれないか
#[tokio::test]
async fn test_ai_search_blank_prompt() {
    let mock = MockServer::start().await;
    let client = TestClient::new(&mock, Keys::both());

    let (status, body) = client.post_ai_search("   ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "prompt is required");
    assert_eq!(mock.model_hits(), 0);
}

/// 観点: フォーム経由の AI 検索が変換結果の URL へリダイレクトし、絞り込み条件を引き継ぐか
#[tokio::test]
async fn test_ai_search_redirect_success() {
    let mock = MockServer::start().await;
    let client = TestClient::new(&mock, Keys::both());

    let (status, location, _) = client
        .get("/ai-search?query=react%20internship%20this%20week&remote=true")
        .await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        location.as_deref(),
        Some("/?query=React%20Intern&location=Bangalore&date_posted=week&remote=true")
    );
    assert_eq!(mock.model_hits(), 1);
    assert_eq!(mock.listing_hits(), 0);
}

/// 観点: 変換に失敗したら入力をそのままキーワードにして検索するか
#[tokio::test]
async fn test_ai_search_redirect_falls_back_to_plain_query() {
    let mock = MockServer::start().await;
    let client = TestClient::new(&mock, Keys::both());

    let (status, location, _) = client
        .get("/ai-search?prompt=garbage%20words&view=list&job_type=PARTTIME")
        .await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        location.as_deref(),
        Some("/?query=garbage%20words&job_type=PARTTIME&view=list")
    );
    assert_eq!(mock.model_hits(), 1);
}

/// 観点: キー未設定でもリダイレクトはキーワード検索として成立するか
#[tokio::test]
async fn test_ai_search_redirect_without_key() {
    let mock = MockServer::start().await;
    let client = TestClient::new(&mock, Keys::none());

    let (status, location, _) = client.get("/ai-search?query=remote%20design").await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/?query=remote%20design"));
    assert_eq!(mock.model_hits(), 0);
}

/// 観点: 空の入力はトップへ戻すだけか
#[tokio::test]
async fn test_ai_search_redirect_blank() {
    let mock = MockServer::start().await;
    let client = TestClient::new(&mock, Keys::both());

    for uri in ["/ai-search", "/ai-search?query=", "/ai-search?prompt=%20%20"] {
        let (status, location, _) = client.get(uri).await;
        assert_eq!(status, StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(location.as_deref(), Some("/"), "{}", uri);
    }
    assert_eq!(mock.model_hits(), 0);
}
