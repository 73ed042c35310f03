// src/domain/article/query.rs
//! Validated listing parameters for the article index.
//!
//! Only values from the declared whitelists below can reach the store, so the
//! persistence layer may render them as SQL text. Rows sharing the same sort
//! key come back in whatever order the store produces; no secondary key is
//! applied.

use crate::domain::errors::DomainError;
use thiserror::Error;

pub const INVALID_SORT_QUERY: &str = "Invalid Sort Query";
pub const INVALID_ORDER_QUERY: &str = "Invalid Order Query";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArticleQueryError {
    #[error("invalid sort column: {0}")]
    InvalidSortColumn(String),
    #[error("invalid order direction: {0}")]
    InvalidOrderDirection(String),
}

impl From<ArticleQueryError> for DomainError {
    fn from(err: ArticleQueryError) -> Self {
        match err {
            ArticleQueryError::InvalidSortColumn(_) => Self::Validation(INVALID_SORT_QUERY.into()),
            ArticleQueryError::InvalidOrderDirection(_) => {
                Self::Validation(INVALID_ORDER_QUERY.into())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    ArticleId,
    Title,
    Author,
    CommentCount,
    Topic,
    #[default]
    CreatedAt,
    ArticleImgUrl,
    Votes,
    Body,
}

/// Names accepted by `sort_by`, paired with the column they select. This table
/// is the only place a sortable column is named.
const SORT_COLUMNS: &[(&str, SortColumn)] = &[
    ("article_id", SortColumn::ArticleId),
    ("title", SortColumn::Title),
    ("author", SortColumn::Author),
    ("comment_count", SortColumn::CommentCount),
    ("topic", SortColumn::Topic),
    ("created_at", SortColumn::CreatedAt),
    ("article_img_url", SortColumn::ArticleImgUrl),
    ("votes", SortColumn::Votes),
    ("body", SortColumn::Body),
];

impl SortColumn {
    /// Exact, case-sensitive lookup in the sortable column table.
    pub fn parse(raw: &str) -> Result<Self, ArticleQueryError> {
        SORT_COLUMNS
            .iter()
            .find_map(|&(name, column)| (name == raw).then_some(column))
            .ok_or_else(|| ArticleQueryError::InvalidSortColumn(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Accepts `asc` / `desc` in any letter case.
    pub fn parse(raw: &str) -> Result<Self, ArticleQueryError> {
        if raw.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(ArticleQueryError::InvalidOrderDirection(raw.to_string()))
        }
    }

    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleQuery {
    topic: Option<String>,
    sort_by: SortColumn,
    order: SortOrder,
}

impl ArticleQuery {
    /// Validate raw listing parameters. `sort_by` is checked before `order`,
    /// and both before anything else happens with the request.
    pub fn parse(
        topic: Option<String>,
        sort_by: Option<&str>,
        order: Option<&str>,
    ) -> Result<Self, ArticleQueryError> {
        let sort_by = sort_by.map(SortColumn::parse).transpose()?.unwrap_or_default();
        let order = order.map(SortOrder::parse).transpose()?.unwrap_or_default();
        Ok(Self {
            topic,
            sort_by,
            order,
        })
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub const fn sort_by(&self) -> SortColumn {
        self.sort_by
    }

    pub const fn order(&self) -> SortOrder {
        self.order
    }
}
