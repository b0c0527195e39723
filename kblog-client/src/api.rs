use async_trait::async_trait;

use crate::error::BlogClientResult;
use crate::models::{Post, PostPayload};

/// Четыре REST-вызова, через которые идут все чтения и изменения постов.
///
/// Фьючерсы не обязаны быть `Send`: в браузере `fetch` однопоточный.
#[async_trait(?Send)]
pub trait PostsApi {
    /// `GET /api/posts`: вся коллекция в порядке сервера.
    async fn list_posts(&self) -> BlogClientResult<Vec<Post>>;

    /// `POST /api/posts`.
    async fn create_post(&self, payload: &PostPayload) -> BlogClientResult<Post>;

    /// `PUT /api/posts/{id}`.
    async fn update_post(&self, id: i64, payload: &PostPayload) -> BlogClientResult<Post>;

    /// `DELETE /api/posts/{id}`.
    async fn delete_post(&self, id: i64) -> BlogClientResult<()>;
}
