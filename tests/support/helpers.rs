// tests/support/helpers.rs
use std::sync::Arc;

use super::builders::{ArticleBuilder, at, comment, topic, user};
use super::mocks::InMemoryStore;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use newsdesk::application::services::ApplicationServices;
use newsdesk::domain::{
    article::ArticleRepository, comment::CommentRepository, topic::TopicRepository,
    user::UserRepository,
};
use newsdesk::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

/// 固定のシードデータ
///
/// - topics: mitch, cats, paper (paper は記事なし)
/// - articles: 1..=5, article 1 は votes=100 でコメント 2 件、article 3 はコメント 1 件
pub fn seeded_store() -> InMemoryStore {
    let topics = vec![
        topic("mitch", "The man, the Mitch, the legend"),
        topic("cats", "Not dogs"),
        topic("paper", "what books are made of"),
    ];
    let users = vec![
        user("butter_bridge", "jonny"),
        user("icellusedkars", "sam"),
        user("rogersop", "paul"),
        user("lurker", "do_nothing"),
    ];
    let articles = vec![
        ArticleBuilder::new(1)
            .title("Living in the shadow of a great man")
            .votes(100)
            .created_at(at(2020, 7, 9))
            .build(),
        ArticleBuilder::new(2)
            .title("Sony Vaio; or, The Laptop")
            .author("icellusedkars")
            .created_at(at(2020, 10, 16))
            .build(),
        ArticleBuilder::new(3)
            .title("Eight pug gifs that remind me of mitch")
            .author("icellusedkars")
            .created_at(at(2020, 11, 3))
            .build(),
        ArticleBuilder::new(4)
            .title("UNCOVERED: catspiracy to bring down democracy")
            .topic("cats")
            .author("rogersop")
            .votes(5)
            .created_at(at(2020, 8, 3))
            .build(),
        ArticleBuilder::new(5)
            .title("A")
            .author("icellusedkars")
            .votes(-3)
            .created_at(at(2020, 1, 7))
            .build(),
    ];
    let comments = vec![
        comment(1, 1, "butter_bridge", at(2020, 4, 6)),
        comment(2, 1, "icellusedkars", at(2020, 10, 31)),
        comment(3, 3, "lurker", at(2020, 6, 20)),
    ];
    InMemoryStore::new(topics, users, articles, comments)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("expected valid json body")
    }
}

pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    router: axum::Router,
}

impl TestApp {
    pub fn seeded() -> Self {
        Self::with_store(Arc::new(seeded_store()))
    }

    pub fn with_store(store: Arc<InMemoryStore>) -> Self {
        let article_repo: Arc<dyn ArticleRepository> = store.clone();
        Self::with_article_repo(store, article_repo)
    }

    /// Route article reads/writes to `article_repo`; everything else hits `store`.
    pub fn with_article_repo(
        store: Arc<InMemoryStore>,
        article_repo: Arc<dyn ArticleRepository>,
    ) -> Self {
        let comment_repo: Arc<dyn CommentRepository> = store.clone();
        let topic_repo: Arc<dyn TopicRepository> = store.clone();
        let user_repo: Arc<dyn UserRepository> = store.clone();

        let services = Arc::new(ApplicationServices::new(
            article_repo,
            comment_repo,
            topic_repo,
            user_repo,
        ));
        let router = build_router(HttpState { services });
        Self { store, router }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send_request(req).await
    }

    pub async fn send_request(&self, req: Request<Body>) -> TestResponse {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let (parts, body_stream) = resp.into_parts();
        let body = body::to_bytes(body_stream, 1024 * 1024)
            .await
            .expect("read body")
            .to_vec();
        let content_type = parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        TestResponse {
            status,
            content_type,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }
}

/// Assert that a response is an error body `{"msg": ...}` with the expected status.
pub fn assert_error_response(resp: &TestResponse, expected_status: StatusCode, expected_msg: &str) {
    assert_eq!(resp.status, expected_status);
    assert!(
        resp.content_type.starts_with("application/json"),
        "unexpected content-type: {}",
        resp.content_type
    );
    assert_eq!(resp.json(), serde_json::json!({ "msg": expected_msg }));
}
