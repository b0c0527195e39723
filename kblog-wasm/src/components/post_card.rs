use kblog_client::Post;
use kblog_client::card::{PostCard, SCORING_INDICATOR};
use leptos::prelude::*;

use crate::components::score_badge::{ScorePill, TagList};
use crate::state::AppState;

#[component]
pub(crate) fn PostCardView(state: AppState, post: Post) -> impl IntoView {
    let card = PostCard::from_post(&post);
    let id = card.id;

    let on_open = {
        let post = post.clone();
        move |_| state.begin_view(post.clone())
    };
    // кнопки не должны открывать просмотр
    let on_edit = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        state.begin_edit(&post);
    };
    let on_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        state.remove(id);
    };

    view! {
        <article class="post-card" on:click=on_open>
            <div class="post-category">{card.category}</div>
            {card.badge.map(|badge| view! { <ScorePill badge=badge /> })}
            <h2 class="post-title">{card.title}</h2>
            <div class="post-meta">
                <span>{card.byline}</span>
                <span>"•"</span>
                <span>{card.created_on}</span>
                {card.scoring.then(|| view! {
                    <span>"•"</span>
                    <span class="scoring-status">{SCORING_INDICATOR}</span>
                })}
            </div>
            <p class="post-excerpt">{card.excerpt}</p>
            <TagList tags=card.tags />
            <div class="card-actions">
                <button class="btn btn-sm btn-warning" on:click=on_edit>"✏️ Edit"</button>
                <button class="btn btn-sm btn-danger" on:click=on_delete>"🗑️ Delete"</button>
            </div>
        </article>
    }
}
