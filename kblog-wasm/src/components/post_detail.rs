use kblog_client::card::{format_date, split_tags};
use kblog_client::score::badge;
use leptos::prelude::*;

use crate::components::score_badge::{ScorePill, TagList};
use crate::state::AppState;

/// Окно просмотра поста. Закрывается кликом по фону или по ✕.
#[component]
pub(crate) fn PostDetail(state: AppState) -> impl IntoView {
    let viewing = Memo::new(move |_| state.page.with(|page| page.viewing().cloned()));

    move || {
        viewing.get().map(|post| {
            let id = post.id;
            let byline = format!("By {}", post.author);
            let created_on = format_date(&post.created_at);
            let tags = split_tags(post.tags.as_deref());
            let score = badge(post.ai_score);
            let on_edit = {
                let post = post.clone();
                move |_| state.begin_edit(&post)
            };

            view! {
                <div class="modal" on:click=move |_| state.end_view()>
                    <div
                        class="modal-content post-detail"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <div class="post-detail-header">
                            <div>
                                <div class="post-category">{post.category}</div>
                                {score.map(|badge| view! { <ScorePill badge=badge /> })}
                                <h2>{post.title}</h2>
                                <div class="post-meta">
                                    <span>{byline}</span>
                                    <span>"•"</span>
                                    <span>{created_on}</span>
                                </div>
                            </div>
                            <button class="btn-close" on:click=move |_| state.end_view()>
                                "✕"
                            </button>
                        </div>
                        <div class="post-content">{post.content}</div>
                        <TagList tags=tags />
                        <div class="post-actions">
                            <button class="btn btn-warning" on:click=on_edit>"✏️ Edit"</button>
                            <button class="btn btn-danger" on:click=move |_| state.remove(id)>
                                "🗑️ Delete"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
