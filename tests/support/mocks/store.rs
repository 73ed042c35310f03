// tests/support/mocks/store.rs
use std::cmp::Ordering;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use async_trait::async_trait;
use chrono::Utc;
use newsdesk::domain::article::{
    Article, ArticleId, ArticleQuery, ArticleRepository, SortColumn, SortOrder, VoteDelta,
};
use newsdesk::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use newsdesk::domain::errors::{DomainError, DomainResult, StorageCode};
use newsdesk::domain::topic::{Topic, TopicRepository};
use newsdesk::domain::user::{User, UserRepository};

/* -------------------------------- インメモリストア -------------------------------- */

/// Postgres の代わりに使うインメモリストア。4 つのリポジトリを一括で実装し、
/// 外部キー・NOT NULL 制約違反はストレージコードとして返す。
#[derive(Default)]
pub struct InMemoryStore {
    topics: Mutex<Vec<Topic>>,
    users: Mutex<Vec<User>>,
    articles: Mutex<Vec<Article>>,
    comments: Mutex<Vec<Comment>>,
    calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new(
        topics: Vec<Topic>,
        users: Vec<User>,
        articles: Vec<Article>,
        comments: Vec<Comment>,
    ) -> Self {
        Self {
            topics: Mutex::new(topics),
            users: Mutex::new(users),
            articles: Mutex::new(articles),
            comments: Mutex::new(comments),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of repository calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(AtomicOrdering::SeqCst)
    }

    pub fn votes_of(&self, id: i32) -> Option<i32> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| i32::from(article.id) == id)
            .map(|article| article.votes)
    }

    pub fn comment_count(&self) -> usize {
        self.comments.lock().unwrap().len()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
    }

    fn with_comment_count(&self, mut article: Article) -> Article {
        let comments = self.comments.lock().unwrap();
        article.comment_count = comments
            .iter()
            .filter(|comment| comment.article_id == article.id)
            .count() as i64;
        article
    }
}

fn compare(a: &Article, b: &Article, column: SortColumn) -> Ordering {
    match column {
        SortColumn::ArticleId => i32::from(a.id).cmp(&i32::from(b.id)),
        SortColumn::Title => a.title.cmp(&b.title),
        SortColumn::Author => a.author.cmp(&b.author),
        SortColumn::CommentCount => a.comment_count.cmp(&b.comment_count),
        SortColumn::Topic => a.topic.cmp(&b.topic),
        SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        SortColumn::ArticleImgUrl => a.article_img_url.cmp(&b.article_img_url),
        SortColumn::Votes => a.votes.cmp(&b.votes),
        SortColumn::Body => a.body.cmp(&b.body),
    }
}

#[async_trait]
impl ArticleRepository for InMemoryStore {
    async fn list(&self, query: &ArticleQuery) -> DomainResult<Vec<Article>> {
        self.touch();
        let candidates: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|article| query.topic().is_none_or(|topic| article.topic == topic))
            .cloned()
            .collect();

        let mut articles: Vec<Article> = candidates
            .into_iter()
            .map(|article| self.with_comment_count(article))
            .collect();
        articles.sort_by(|a, b| {
            let ordering = compare(a, b, query.sort_by());
            match query.order() {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        Ok(articles)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.touch();
        let found = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.id == id)
            .cloned();
        Ok(found.map(|article| self.with_comment_count(article)))
    }

    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: VoteDelta,
    ) -> DomainResult<Option<Article>> {
        self.touch();
        let updated = {
            let mut articles = self.articles.lock().unwrap();
            let Some(article) = articles.iter_mut().find(|article| article.id == id) else {
                return Ok(None);
            };
            // INT 列と同じく範囲外の加算は拒否する
            article.votes = article
                .votes
                .checked_add(i32::from(delta))
                .ok_or_else(|| {
                    DomainError::storage(
                        StorageCode::NumericValueOutOfRange,
                        "integer out of range",
                    )
                })?;
            article.clone()
        };
        Ok(Some(self.with_comment_count(updated)))
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        self.touch();
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        self.touch();
        let (Some(author), Some(body)) = (comment.author, comment.body) else {
            return Err(DomainError::storage(
                StorageCode::NotNullViolation,
                "null value in column violates not-null constraint",
            ));
        };
        if !self.users.lock().unwrap().iter().any(|user| user.username == author) {
            return Err(DomainError::storage(
                StorageCode::ForeignKeyViolation,
                "insert or update on table \"comments\" violates foreign key constraint",
            ));
        }

        let mut comments = self.comments.lock().unwrap();
        let next_id = comments
            .iter()
            .map(|existing| i32::from(existing.id))
            .max()
            .unwrap_or(0)
            + 1;
        let stored = Comment {
            id: CommentId::new(next_id),
            article_id: comment.article_id,
            author,
            body,
            votes: 0,
            created_at: Utc::now(),
        };
        comments.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        self.touch();
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|comment| comment.id != id);
        Ok(comments.len() < before)
    }
}

#[async_trait]
impl TopicRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        self.touch();
        Ok(self.topics.lock().unwrap().clone())
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Topic>> {
        self.touch();
        Ok(self
            .topics
            .lock()
            .unwrap()
            .iter()
            .find(|topic| topic.slug == slug)
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        self.touch();
        Ok(self.users.lock().unwrap().clone())
    }
}
