//! Что показывает карточка поста и окно просмотра. Без разметки: её строят фронтенды.

use chrono::{DateTime, Utc};

use crate::models::Post;
use crate::score::{ScoreBadge, badge};

/// Сколько символов содержимого попадает в превью карточки.
pub const EXCERPT_CHARS: usize = 150;

/// Индикатор поста, который ещё не оценён.
pub const SCORING_INDICATOR: &str = "🤖 Scoring...";

#[derive(Debug, Clone, PartialEq)]
/// Данные карточки поста.
pub struct PostCard {
    /// Идентификатор поста.
    pub id: i64,
    /// Категория.
    pub category: String,
    /// Заголовок.
    pub title: String,
    /// Строка автора: `By {author}`.
    pub byline: String,
    /// Дата создания, `YYYY-MM-DD`.
    pub created_on: String,
    /// Начало содержимого.
    pub excerpt: String,
    /// Теги, уже разбитые и очищенные.
    pub tags: Vec<String>,
    /// Бейдж оценки, если оценка есть.
    pub badge: Option<ScoreBadge>,
    /// Показывать ли индикатор ожидания оценки.
    pub scoring: bool,
}

impl PostCard {
    /// Строит карточку по посту.
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id,
            category: post.category.clone(),
            title: post.title.clone(),
            byline: format!("By {}", post.author),
            created_on: format_date(&post.created_at),
            excerpt: excerpt(&post.content),
            tags: split_tags(post.tags.as_deref()),
            badge: badge(post.ai_score),
            scoring: post.is_pending_scoring(),
        }
    }
}

/// Первые [`EXCERPT_CHARS`] символов содержимого и многоточие.
pub fn excerpt(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}

/// Разбивает строку тегов по запятым, пустые элементы отбрасываются.
pub fn split_tags(tags: Option<&str>) -> Vec<String> {
    tags.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Дата без времени.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}
