pub mod entity;
pub mod query;
pub mod repository;
pub mod value_objects;

pub use entity::Article;
pub use query::{ArticleQuery, ArticleQueryError, SortColumn, SortOrder};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleId, VoteDelta};
