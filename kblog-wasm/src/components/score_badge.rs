use kblog_client::score::ScoreBadge;
use leptos::prelude::*;

#[component]
pub(crate) fn ScorePill(badge: ScoreBadge) -> impl IntoView {
    let class = format!("score-badge {}", badge.tier.css_class());

    view! {
        <div class=class title="AI Quality Score">
            {badge.to_string()}
        </div>
    }
}

#[component]
pub(crate) fn TagList(tags: Vec<String>) -> impl IntoView {
    (!tags.is_empty()).then(|| {
        view! {
            <div class="post-tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">{tag}</span> })
                    .collect_view()}
            </div>
        }
    })
}
