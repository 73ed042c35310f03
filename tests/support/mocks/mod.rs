// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![cfg(test)]
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod failing;
pub mod store;

pub use failing::{FailingArticleRepo, LEAKY_DETAIL};
pub use store::InMemoryStore;
