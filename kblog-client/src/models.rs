use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Автор по умолчанию для новых черновиков.
pub const DEFAULT_AUTHOR: &str = "SHA";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Пост в том виде, в каком его отдаёт сервер.
///
/// Идентификатор и временные метки назначает сервер; клиент их только читает.
pub struct Post {
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок поста.
    pub title: String,
    /// Содержимое поста.
    pub content: String,
    /// Категория в исходном виде (сервер не обязан знать клиентский enum).
    pub category: String,
    /// Автор.
    pub author: String,
    /// Теги через запятую; может отсутствовать.
    #[serde(default)]
    pub tags: Option<String>,
    /// Дата и время создания поста (UTC).
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Дата и время последнего обновления поста (UTC).
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Оценка качества от AI-агента; `None`, пока пост не оценён.
    #[serde(default)]
    pub ai_score: Option<f64>,
    /// Когда пост оценивался последний раз.
    #[serde(default, with = "timestamp::option")]
    pub last_scored_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Пост ждёт оценки, только если нет ни оценки, ни времени оценки.
    pub fn is_pending_scoring(&self) -> bool {
        self.ai_score.is_none() && self.last_scored_at.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// Фиксированный набор категорий, которые принимает сервер.
pub enum Category {
    /// Kubernetes Features.
    #[default]
    #[serde(rename = "Kubernetes Features")]
    KubernetesFeatures,
    /// Security Best Practices.
    #[serde(rename = "Security Best Practices")]
    SecurityBestPractices,
    /// CI/CD Workflows.
    #[serde(rename = "CI/CD Workflows")]
    CiCdWorkflows,
    /// Helm and Package Management.
    #[serde(rename = "Helm and Package Management")]
    HelmAndPackageManagement,
    /// Networking.
    #[serde(rename = "Networking")]
    Networking,
    /// Storage.
    #[serde(rename = "Storage")]
    Storage,
    /// Monitoring and Observability.
    #[serde(rename = "Monitoring and Observability")]
    MonitoringAndObservability,
    /// GitOps.
    #[serde(rename = "GitOps")]
    GitOps,
}

impl Category {
    /// Все категории в порядке отображения; первая используется по умолчанию.
    pub const ALL: [Category; 8] = [
        Category::KubernetesFeatures,
        Category::SecurityBestPractices,
        Category::CiCdWorkflows,
        Category::HelmAndPackageManagement,
        Category::Networking,
        Category::Storage,
        Category::MonitoringAndObservability,
        Category::GitOps,
    ];

    /// Строковое значение, которое уходит на сервер.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KubernetesFeatures => "Kubernetes Features",
            Self::SecurityBestPractices => "Security Best Practices",
            Self::CiCdWorkflows => "CI/CD Workflows",
            Self::HelmAndPackageManagement => "Helm and Package Management",
            Self::Networking => "Networking",
            Self::Storage => "Storage",
            Self::MonitoringAndObservability => "Monitoring and Observability",
            Self::GitOps => "GitOps",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DraftError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(|| DraftError::UnknownCategory(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Черновик формы создания/редактирования.
pub struct DraftForm {
    /// Заголовок.
    pub title: String,
    /// Содержимое.
    pub content: String,
    /// Категория из фиксированного набора.
    pub category: Category,
    /// Автор.
    pub author: String,
    /// Теги через запятую.
    pub tags: String,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            category: Category::default(),
            author: DEFAULT_AUTHOR.to_string(),
            tags: String::new(),
        }
    }
}

impl DraftForm {
    /// Заполняет черновик полями существующего поста.
    ///
    /// Категория, которой нет в клиентском наборе, заменяется категорией по умолчанию.
    pub fn from_post(post: &Post) -> Self {
        let category = post.category.parse().unwrap_or_else(|_| {
            tracing::warn!(
                post_id = post.id,
                category = %post.category,
                "post has unknown category, falling back to default"
            );
            Category::default()
        });

        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            category,
            author: post.author.clone(),
            tags: post.tags.clone().unwrap_or_default(),
        }
    }

    /// Проверяет обязательные поля: title, content, author.
    pub fn validate(&self) -> Result<(), DraftError> {
        require("title", &self.title)?;
        require("content", &self.content)?;
        require("author", &self.author)?;
        Ok(())
    }

    /// Строит тело запроса create/update.
    pub fn to_payload(&self) -> Result<PostPayload, DraftError> {
        self.validate()?;
        Ok(PostPayload {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category,
            author: self.author.clone(),
            tags: self.tags.clone(),
        })
    }
}

fn require(field: &'static str, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Тело запросов `POST /api/posts` и `PUT /api/posts/{id}`.
pub struct PostPayload {
    /// Заголовок.
    pub title: String,
    /// Содержимое.
    pub content: String,
    /// Категория.
    pub category: Category,
    /// Автор.
    pub author: String,
    /// Теги через запятую (пустая строка, если тегов нет).
    pub tags: String,
}

/// Сервер отдаёт метки времени и в RFC 3339, и без смещения (подразумевается UTC).
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
            return Some(value.with_timezone(&Utc));
        }
        raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
    }

    pub(crate) fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub(crate) mod option {
        use chrono::{DateTime, Utc};
        use serde::de::Error as _;
        use serde::{Deserialize, Deserializer, Serializer};

        pub(crate) fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => serializer.serialize_some(&value.to_rfc3339()),
                None => serializer.serialize_none(),
            }
        }

        pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            let Some(raw) = Option::<String>::deserialize(deserializer)? else {
                return Ok(None);
            };
            super::parse(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    fn sample_json(extra: &str) -> String {
        format!(
            r#"{{"id":1,"title":"T","content":"C","category":"Networking","author":"SHA",
            "created_at":"2026-01-02T03:04:05.123456","updated_at":"2026-01-02T03:04:05Z"{extra}}}"#
        )
    }

    #[test]
    fn post_parses_naive_and_rfc3339_timestamps() {
        let post: Post = serde_json::from_str(&sample_json("")).expect("post should parse");
        assert_eq!(post.created_at.year(), 2026);
        assert_eq!(post.created_at.second(), 5);
        assert_eq!(post.created_at.date_naive(), post.updated_at.date_naive());
    }

    #[test]
    fn post_without_score_fields_is_pending_scoring() {
        let post: Post = serde_json::from_str(&sample_json("")).expect("post should parse");
        assert!(post.tags.is_none());
        assert!(post.is_pending_scoring());

        let post: Post = serde_json::from_str(&sample_json(
            r#","tags":null,"ai_score":null,"last_scored_at":null"#,
        ))
        .expect("post should parse");
        assert!(post.is_pending_scoring());
    }

    #[test]
    fn post_with_only_scored_at_is_not_pending() {
        let post: Post = serde_json::from_str(&sample_json(
            r#","ai_score":null,"last_scored_at":"2026-01-03T00:00:00""#,
        ))
        .expect("post should parse");
        assert!(!post.is_pending_scoring());
        assert!(post.last_scored_at.is_some());
    }

    #[test]
    fn post_rejects_garbage_timestamp() {
        let raw = r#"{"id":1,"title":"T","content":"C","category":"Networking","author":"SHA",
            "created_at":"yesterday","updated_at":"2026-01-02T03:04:05Z"}"#;
        assert!(serde_json::from_str::<Post>(raw).is_err());
    }

    #[test]
    fn category_serializes_as_display_string() {
        let json = serde_json::to_string(&Category::CiCdWorkflows).expect("serialize");
        assert_eq!(json, r#""CI/CD Workflows""#);
        assert_eq!(Category::ALL[0], Category::default());
        assert_eq!(Category::ALL.len(), 8);
    }

    #[test]
    fn category_from_str_is_case_insensitive() {
        assert_eq!(
            "  gitops ".parse::<Category>().expect("known category"),
            Category::GitOps
        );
        let err = "Databases".parse::<Category>().expect_err("unknown category");
        assert_eq!(err, DraftError::UnknownCategory("Databases".to_string()));
    }

    #[test]
    fn draft_default_uses_first_category_and_fixed_author() {
        let draft = DraftForm::default();
        assert_eq!(draft.category, Category::KubernetesFeatures);
        assert_eq!(draft.author, DEFAULT_AUTHOR);
        assert!(draft.title.is_empty());
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn draft_from_post_defaults_missing_tags_and_unknown_category() {
        let raw = r#"{"id":9,"title":"T","content":"C","category":"Databases","author":"ann",
            "created_at":"2026-01-02T03:04:05","updated_at":"2026-01-02T03:04:05"}"#;
        let post: Post = serde_json::from_str(raw).expect("post should parse");

        let draft = DraftForm::from_post(&post);
        assert_eq!(draft.title, "T");
        assert_eq!(draft.author, "ann");
        assert_eq!(draft.tags, "");
        assert_eq!(draft.category, Category::KubernetesFeatures);
    }

    #[test]
    fn draft_validate_rejects_blank_required_fields() {
        let draft = DraftForm {
            title: "title".to_string(),
            content: "   ".to_string(),
            ..DraftForm::default()
        };
        assert_eq!(draft.validate(), Err(DraftError::MissingField("content")));

        let draft = DraftForm {
            title: "title".to_string(),
            content: "body".to_string(),
            author: String::new(),
            ..DraftForm::default()
        };
        assert_eq!(draft.validate(), Err(DraftError::MissingField("author")));
    }

    #[test]
    fn payload_keeps_empty_tags_as_empty_string() {
        let draft = DraftForm {
            title: "title".to_string(),
            content: "body".to_string(),
            ..DraftForm::default()
        };
        let payload = draft.to_payload().expect("draft is valid");
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(json["tags"], "");
        assert_eq!(json["category"], "Kubernetes Features");
        assert_eq!(json["author"], "SHA");
        assert!(json.get("id").is_none());
    }
}
