use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use kblog_client::{BlogClientError, BlogClientResult, Post, PostPayload, PostsApi};
use serde::de::DeserializeOwned;

// пусто: запросы уходят на тот же origin, с которого загружена страница
const API_BASE_URL: &str = match option_env!("KBLOG_API_BASE_URL") {
    Some(value) => value,
    None => "",
};

/// [`PostsApi`] поверх `fetch` браузера.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GlooPostsApi;

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn network(err: gloo_net::Error) -> BlogClientError {
    BlogClientError::Network(err.to_string())
}

fn with_json(builder: RequestBuilder, payload: &PostPayload) -> BlogClientResult<Request> {
    builder
        .json(payload)
        .map_err(|err| BlogClientError::InvalidRequest(err.to_string()))
}

async fn send(request: Request) -> BlogClientResult<Response> {
    let response = request.send().await.map_err(network)?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.ok();
        return Err(BlogClientError::from_status(status, body));
    }

    Ok(response)
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> BlogClientResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|err| BlogClientError::Decode(err.to_string()))
}

#[async_trait(?Send)]
impl PostsApi for GlooPostsApi {
    async fn list_posts(&self) -> BlogClientResult<Vec<Post>> {
        let request = Request::get(&endpoint("/api/posts")).build().map_err(network)?;
        parse_json(send(request).await?).await
    }

    async fn create_post(&self, payload: &PostPayload) -> BlogClientResult<Post> {
        let request = with_json(Request::post(&endpoint("/api/posts")), payload)?;
        parse_json(send(request).await?).await
    }

    async fn update_post(&self, id: i64, payload: &PostPayload) -> BlogClientResult<Post> {
        let request = with_json(Request::put(&endpoint(&format!("/api/posts/{id}"))), payload)?;
        parse_json(send(request).await?).await
    }

    async fn delete_post(&self, id: i64) -> BlogClientResult<()> {
        let request = Request::delete(&endpoint(&format!("/api/posts/{id}")))
            .build()
            .map_err(network)?;
        send(request).await?;
        Ok(())
    }
}
