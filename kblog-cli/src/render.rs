use kblog_client::card::{PostCard, SCORING_INDICATOR, format_date, split_tags};
use kblog_client::{Category, Post};

pub(crate) fn render_card(post: &Post) -> String {
    let card = PostCard::from_post(post);

    let mut header = format!("[{}] {}", card.id, card.category);
    if let Some(badge) = card.badge {
        header.push_str(&format!("  {badge}"));
    }

    let mut meta = format!("{} • {}", card.byline, card.created_on);
    if card.scoring {
        meta.push_str(&format!(" • {SCORING_INDICATOR}"));
    }

    let mut lines = vec![header, card.title, meta, card.excerpt];
    if !card.tags.is_empty() {
        lines.push(render_tags(&card.tags));
    }
    lines.join("\n")
}

pub(crate) fn render_detail(post: &Post) -> String {
    let mut lines = vec![
        post.category.clone(),
        post.title.clone(),
        format!("By {} • {}", post.author, format_date(&post.created_at)),
        String::new(),
        post.content.clone(),
    ];

    let tags = split_tags(post.tags.as_deref());
    if !tags.is_empty() {
        lines.push(String::new());
        lines.push(render_tags(&tags));
    }
    lines.join("\n")
}

pub(crate) fn render_list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts yet\nStart by creating your first blog post about Kubernetes!".to_string();
    }

    let mut out = posts
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push_str(&format!("\n\n{} posts", posts.len()));
    out
}

fn render_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Расхождения фиксированного набора категорий с тем, что отдаёт сервер.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct CategoryDiff {
    pub(crate) missing_on_server: Vec<String>,
    pub(crate) unknown_to_client: Vec<String>,
}

impl CategoryDiff {
    pub(crate) fn between(server: &[String]) -> Self {
        let missing_on_server = Category::ALL
            .iter()
            .map(|category| category.as_str())
            .filter(|name| !server.iter().any(|s| s == name))
            .map(str::to_string)
            .collect();
        let unknown_to_client = server
            .iter()
            .filter(|name| name.parse::<Category>().is_err())
            .cloned()
            .collect();

        Self {
            missing_on_server,
            unknown_to_client,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.missing_on_server.is_empty() && self.unknown_to_client.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample_post(id: i64, ai_score: Option<f64>) -> Post {
        let ts = Utc
            .with_ymd_and_hms(2026, 5, 1, 8, 0, 0)
            .single()
            .expect("valid ts");
        Post {
            id,
            title: "Argo CD app of apps".to_string(),
            content: "Bootstrap clusters declaratively".to_string(),
            category: "GitOps".to_string(),
            author: "SHA".to_string(),
            tags: Some("argocd, gitops".to_string()),
            created_at: ts,
            updated_at: ts,
            ai_score,
            last_scored_at: None,
        }
    }

    #[test]
    fn pending_card_shows_scoring_indicator() {
        let card = render_card(&sample_post(1, None));
        assert!(card.contains("Scoring..."));
        assert!(!card.contains("/100"));
    }

    #[test]
    fn scored_cards_show_tier_badge() {
        assert!(render_card(&sample_post(1, Some(95.0))).contains("⭐ 95/100"));
        assert!(render_card(&sample_post(1, Some(55.0))).contains("💡 55/100"));
        assert!(!render_card(&sample_post(1, Some(55.0))).contains("Scoring..."));
    }

    #[test]
    fn card_lists_meta_and_tags() {
        let card = render_card(&sample_post(3, None));
        assert!(card.starts_with("[3] GitOps"));
        assert!(card.contains("By SHA • 2026-05-01"));
        assert!(card.contains("#argocd #gitops"));
    }

    #[test]
    fn detail_shows_full_content() {
        let mut post = sample_post(1, None);
        post.content = "x".repeat(300);
        let detail = render_detail(&post);
        assert!(detail.contains(&"x".repeat(300)));
    }

    #[test]
    fn list_has_empty_state_and_footer() {
        assert!(render_list(&[]).starts_with("No posts yet"));

        let list = render_list(&[sample_post(1, None), sample_post(2, Some(81.0))]);
        assert!(list.ends_with("2 posts"));
        assert!(list.contains("✨ 81/100"));
    }

    #[test]
    fn category_diff_reports_both_directions() {
        let mut server: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();
        assert!(CategoryDiff::between(&server).is_empty());

        server.retain(|name| name != "Storage");
        server.push("Databases".to_string());
        let diff = CategoryDiff::between(&server);
        assert_eq!(diff.missing_on_server, vec!["Storage".to_string()]);
        assert_eq!(diff.unknown_to_client, vec!["Databases".to_string()]);
    }
}
