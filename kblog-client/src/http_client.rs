use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::api::PostsApi;
use crate::error::{BlogClientError, BlogClientResult};
use crate::models::{Post, PostPayload};

#[derive(Debug, Deserialize)]
struct CategoriesResponseDto {
    categories: Vec<String>,
}

#[derive(Debug, Clone)]
/// HTTP-клиент для REST API постов.
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт клиент с базовым URL сервера.
    ///
    /// `timeout = None` оставляет таймаут запроса на усмотрение транспорта.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> BlogClientResult<Self> {
        let mut builder = Client::builder().connect_timeout(Duration::from_secs(5));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| BlogClientError::InvalidRequest(format!("http client: {err}")))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Базовый URL сервера.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> BlogClientError {
        let status = response.status().as_u16();
        let body = response.text().await.ok();
        BlogClientError::from_status(status, body)
    }

    /// универсальный helper: запрос с необязательным json-телом и проверкой статуса
    async fn send<TReq>(
        &self,
        method: Method,
        path: &str,
        body: Option<&TReq>,
    ) -> BlogClientResult<reqwest::Response>
    where
        TReq: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        tracing::debug!(%method, %url, "sending request");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(response)
    }

    async fn send_json<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: Option<&TReq>,
    ) -> BlogClientResult<TRes>
    where
        TReq: Serialize + ?Sized,
        TRes: DeserializeOwned,
    {
        let response = self.send(method, path, body).await?;
        response
            .json::<TRes>()
            .await
            .map_err(|err| BlogClientError::Decode(err.to_string()))
    }

    /// Категории, которые принимает сервер (`GET /api/categories`).
    pub async fn categories(&self) -> BlogClientResult<Vec<String>> {
        let dto: CategoriesResponseDto = self
            .send_json::<(), _>(Method::GET, "/api/categories", None)
            .await?;
        Ok(dto.categories)
    }
}

#[async_trait(?Send)]
impl PostsApi for HttpClient {
    async fn list_posts(&self) -> BlogClientResult<Vec<Post>> {
        self.send_json::<(), _>(Method::GET, "/api/posts", None)
            .await
    }

    async fn create_post(&self, payload: &PostPayload) -> BlogClientResult<Post> {
        self.send_json(Method::POST, "/api/posts", Some(payload))
            .await
    }

    async fn update_post(&self, id: i64, payload: &PostPayload) -> BlogClientResult<Post> {
        self.send_json(Method::PUT, &format!("/api/posts/{id}"), Some(payload))
            .await
    }

    async fn delete_post(&self, id: i64) -> BlogClientResult<()> {
        self.send::<()>(Method::DELETE, &format!("/api/posts/{id}"), None)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = HttpClient::new("http://localhost:8000/", None).expect("client must build");
        let full = client.endpoint("/api/posts");
        assert_eq!(full, "http://localhost:8000/api/posts");
    }

    #[test]
    fn endpoint_keeps_path_prefix_of_base_url() {
        let client =
            HttpClient::new("https://blog.example.com/backend", Some(Duration::from_secs(3)))
                .expect("client must build");
        assert_eq!(
            client.endpoint("api/posts/7"),
            "https://blog.example.com/backend/api/posts/7"
        );
        assert_eq!(client.base_url(), "https://blog.example.com/backend");
    }

    #[test]
    fn categories_response_parses() {
        let dto: CategoriesResponseDto =
            serde_json::from_str(r#"{"categories":["GitOps","Storage"]}"#).expect("must parse");
        assert_eq!(dto.categories, vec!["GitOps", "Storage"]);
    }
}
