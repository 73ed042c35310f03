// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};

use newsdesk::domain::article::{Article, ArticleId};
use newsdesk::domain::comment::{Comment, CommentId};
use newsdesk::domain::topic::Topic;
use newsdesk::domain::user::User;

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub struct ArticleBuilder {
    id: i32,
    title: String,
    topic: String,
    author: String,
    body: String,
    votes: i32,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            title: format!("Article {id}"),
            topic: "mitch".into(),
            author: "butter_bridge".into(),
            body: "Test body".into(),
            votes: 0,
            created_at: at(2020, 1, 1),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id),
            title: self.title,
            topic: self.topic,
            author: self.author,
            body: self.body,
            created_at: self.created_at,
            votes: self.votes,
            article_img_url: format!("https://images.example.com/{}.jpg", self.id),
            comment_count: 0,
        }
    }
}

pub fn comment(id: i32, article_id: i32, author: &str, created_at: DateTime<Utc>) -> Comment {
    Comment {
        id: CommentId::new(id),
        article_id: ArticleId::new(article_id),
        author: author.into(),
        body: format!("Comment {id}"),
        votes: 0,
        created_at,
    }
}

pub fn topic(slug: &str, description: &str) -> Topic {
    Topic {
        slug: slug.into(),
        description: description.into(),
    }
}

pub fn user(username: &str, name: &str) -> User {
    User {
        username: username.into(),
        name: name.into(),
        avatar_url: format!("https://avatars.example.com/{username}.png"),
    }
}
