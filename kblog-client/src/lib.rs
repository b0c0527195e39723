//! Клиентская библиотека платформы блога о Kubernetes.
//!
//! Содержит модель данных постов, бейдж AI-оценки, модель карточки и
//! конечный автомат страницы списка постов:
//! - [`PostListState`]: синхронный автомат без ввода-вывода;
//! - [`PostListController`]: асинхронный драйвер поверх [`PostsApi`];
//! - [`HttpClient`]: реализация [`PostsApi`] на `reqwest` (feature `http`).
//!
//! После каждого успешного изменения список перечитывается с сервера целиком.
#![warn(missing_docs)]

mod api;
pub mod card;
mod controller;
mod error;
#[cfg(feature = "http")]
mod http_client;
mod models;
pub mod score;
mod state;

pub use api::PostsApi;
pub use controller::{Confirm, PostListController};
pub use error::{ActionError, BlogClientError, BlogClientResult, DraftError, UiFailure};
#[cfg(feature = "http")]
pub use http_client::HttpClient;
pub use models::{Category, DEFAULT_AUTHOR, DraftForm, Post, PostPayload};
pub use state::{DELETE_CONFIRMATION, LoadStatus, PostListState, Submission, UiMode};
