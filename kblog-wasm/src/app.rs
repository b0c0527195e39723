use kblog_client::LoadStatus;
use leptos::prelude::*;

use crate::components::post_card::PostCardView;
use crate::components::post_detail::PostDetail;
use crate::components::post_form::PostForm;
use crate::form;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    state.load_posts();

    let status = Memo::new(move |_| state.page.with(|page| page.load_status().clone()));

    move || match status.get() {
        LoadStatus::Loading => view! {
            <div class="container">
                <div class="loading">"Loading posts..."</div>
            </div>
        }
        .into_any(),
        LoadStatus::Failed(failure) => view! {
            <div class="container">
                <div class="error">{failure.to_string()}</div>
            </div>
        }
        .into_any(),
        LoadStatus::Ready => view! { <Blog state=state /> }.into_any(),
    }
}

#[component]
fn Blog(state: AppState) -> impl IntoView {
    let posts = Memo::new(move |_| state.page.with(|page| page.posts().to_vec()));
    let form_open = Memo::new(move |_| state.page.with(|page| page.is_form_open()));

    view! {
        <div class="app">
            <header class="header">
                <div class="container">
                    <h1>"☸️ SHA's Kubernetes Blog Platform"</h1>
                    <p class="subtitle">
                        "Latest insights on Kubernetes, Security, CI/CD, and DevOps"
                    </p>
                    <button class="btn btn-primary" on:click=move |_| state.begin_create()>
                        "✏️ Write New Post"
                    </button>
                </div>
            </header>

            <main class="container">
                <Show when=move || form_open.get()>
                    <PostForm state=state />
                </Show>

                <PostDetail state=state />

                <div class="posts-grid">
                    <Show
                        when=move || !posts.with(Vec::is_empty)
                        fallback=move || view! { <EmptyState state=state /> }
                    >
                        <For
                            each=move || posts.get()
                            key=|post| (post.id, post.updated_at, post.last_scored_at)
                            children=move |post| view! { <PostCardView state=state post=post /> }
                        />
                    </Show>
                </div>
            </main>

            <footer class="footer">
                <div class="container">
                    <p>{move || posts.with(|posts| form::footer_text(posts.len()))}</p>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn EmptyState(state: AppState) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2>"No posts yet"</h2>
            <p>"Start by creating your first blog post about Kubernetes!"</p>
            <button class="btn btn-primary" on:click=move |_| state.begin_create()>
                "✏️ Create First Post"
            </button>
        </div>
    }
}
