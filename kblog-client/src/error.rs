use thiserror::Error;

#[derive(Debug, Clone, Error)]
/// Ошибки транспорта при обращении к REST API постов.
pub enum BlogClientError {
    /// Запрос не дошёл до сервера или не удалось прочитать ответ.
    #[error("network error: {0}")]
    Network(String),

    /// Сервер ответил статусом вне диапазона 2xx.
    #[error("http error {status}: {message}")]
    Status {
        /// HTTP-статус ответа.
        status: u16,
        /// Текст ответа или стандартная причина статуса.
        message: String,
    },

    /// Тело ответа не удалось разобрать как JSON ожидаемой формы.
    #[error("decode error: {0}")]
    Decode(String),

    /// Некорректные параметры клиента (например, адрес сервера).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Результат операций `kblog-client`.
pub type BlogClientResult<T> = Result<T, BlogClientError>;

impl BlogClientError {
    /// Собирает ошибку по статусу ответа; пустое тело заменяется причиной статуса.
    pub fn from_status(status: u16, body: Option<String>) -> Self {
        let message = body
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| status_reason(status).to_string());
        Self::Status { status, message }
    }
}

fn status_reason(status: u16) -> &'static str {
    match status {
        400 => "bad request",
        404 => "post not found",
        422 => "payload rejected by server",
        429 => "rate limit exceeded",
        500..=599 => "server error",
        _ => "request failed",
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for BlogClientError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_status(status.as_u16(), None);
        }
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Network(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибки черновика формы.
pub enum DraftError {
    /// Обязательное поле пустое.
    #[error("field '{0}' is required")]
    MissingField(&'static str),

    /// Категория не входит в фиксированный набор.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Форма не открыта: отправлять нечего.
    #[error("no create or edit form is open")]
    FormClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// То, что видит пользователь, когда запрос к API не удался.
///
/// Причина (сеть, валидация, 5xx) намеренно не различается.
pub enum UiFailure {
    /// Не удалось загрузить список: фатально для текущей отрисовки.
    #[error("Failed to fetch blog posts")]
    Load,

    /// Не удалось создать или обновить пост.
    #[error("Failed to save post")]
    Save,

    /// Не удалось удалить пост.
    #[error("Failed to delete post")]
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибка пользовательского действия в контроллере.
pub enum ActionError {
    /// Черновик не прошёл проверку, запрос не отправлялся.
    #[error(transparent)]
    Draft(#[from] DraftError),

    /// Запрос к API не удался.
    #[error(transparent)]
    Failure(#[from] UiFailure),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_uses_body_when_present() {
        let err = BlogClientError::from_status(404, Some(r#"{"detail":"Post not found"}"#.into()));
        match err {
            BlogClientError::Status { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("Post not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_status_falls_back_to_reason_for_blank_body() {
        let err = BlogClientError::from_status(503, Some("   ".into()));
        assert_eq!(err.to_string(), "http error 503: server error");
    }

    #[test]
    fn ui_failures_collapse_to_generic_messages() {
        assert_eq!(UiFailure::Load.to_string(), "Failed to fetch blog posts");
        assert_eq!(UiFailure::Save.to_string(), "Failed to save post");
        assert_eq!(UiFailure::Delete.to_string(), "Failed to delete post");
    }
}
