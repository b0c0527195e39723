use kblog_client::{
    DELETE_CONFIRMATION, Post, PostListState, PostsApi, Submission, UiFailure,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::GlooPostsApi;
use crate::form::{self, DraftField};

/// Состояние страницы в сигнале и запросы, которые его меняют.
///
/// Переходы выполняет [`PostListState`]; здесь только запуск запросов и
/// передача результата обратно в автомат.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) page: RwSignal<PostListState>,
    api: GlooPostsApi,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            page: RwSignal::new(PostListState::new()),
            api: GlooPostsApi,
        }
    }

    pub(crate) fn load_posts(self) {
        spawn_local(async move {
            match self.api.list_posts().await {
                Ok(posts) => self.page.update(|page| page.load_succeeded(posts)),
                Err(err) => {
                    leptos::logging::error!("failed to load posts: {err}");
                    self.page.update(|page| page.load_failed());
                }
            }
        });
    }

    pub(crate) fn begin_create(self) {
        self.page.update(|page| page.begin_create());
    }

    pub(crate) fn begin_edit(self, post: &Post) {
        self.page.update(|page| page.begin_edit(post));
    }

    pub(crate) fn begin_view(self, post: Post) {
        self.page.update(|page| page.begin_view(post));
    }

    pub(crate) fn end_view(self) {
        self.page.update(|page| page.end_view());
    }

    pub(crate) fn cancel(self) {
        self.page.update(|page| page.cancel());
    }

    pub(crate) fn update_field(self, field: DraftField, value: String) {
        self.page.update(|page| {
            if !form::apply_input(page.draft_mut(), field, value) {
                leptos::logging::warn!("ignored invalid value for {field:?}");
            }
        });
    }

    pub(crate) fn submit(self) {
        let submission = match self.page.with_untracked(|page| page.prepare_submit()) {
            Ok(submission) => submission,
            Err(err) => {
                leptos::logging::warn!("post form rejected: {err}");
                show_alert(&err.to_string());
                return;
            }
        };

        spawn_local(async move {
            let result = match &submission {
                Submission::Create(payload) => self.api.create_post(payload).await,
                Submission::Update { id, payload } => self.api.update_post(*id, payload).await,
            };

            match result {
                Ok(_) => {
                    self.page.update(|page| page.submit_succeeded());
                    self.load_posts();
                }
                Err(err) => {
                    leptos::logging::error!("failed to save post: {err}");
                    self.page.update(|page| page.submit_failed());
                    self.flush_alert();
                }
            }
        });
    }

    pub(crate) fn remove(self, id: i64) {
        if !confirm(DELETE_CONFIRMATION) {
            return;
        }

        spawn_local(async move {
            match self.api.delete_post(id).await {
                Ok(()) => {
                    self.page.update(|page| page.remove_succeeded());
                    self.load_posts();
                }
                Err(err) => {
                    leptos::logging::error!("failed to delete post {id}: {err}");
                    self.page.update(|page| page.remove_failed());
                    self.flush_alert();
                }
            }
        });
    }

    fn flush_alert(self) {
        let alert: Option<UiFailure> = self.page.with_untracked(|page| page.alert().cloned());
        if let Some(failure) = alert {
            show_alert(&failure.to_string());
            self.page.update(|page| page.dismiss_alert());
        }
    }
}

fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
