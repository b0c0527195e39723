//! Логика формы поста, не зависящая от DOM.

use kblog_client::{Category, DraftForm, PostListState};

/// Поле формы, которое меняет пользователь.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DraftField {
    Title,
    Content,
    Category,
    Author,
    Tags,
}

/// Записывает введённое значение в черновик.
///
/// Возвращает `false`, если значение не подошло (неизвестная категория);
/// черновик при этом не меняется.
pub(crate) fn apply_input(draft: &mut DraftForm, field: DraftField, value: String) -> bool {
    match field {
        DraftField::Title => draft.title = value,
        DraftField::Content => draft.content = value,
        DraftField::Author => draft.author = value,
        DraftField::Tags => draft.tags = value,
        DraftField::Category => match value.parse::<Category>() {
            Ok(category) => draft.category = category,
            Err(_) => return false,
        },
    }
    true
}

pub(crate) fn form_heading(state: &PostListState) -> &'static str {
    if state.editing().is_some() {
        "Edit Post"
    } else {
        "Create New Post"
    }
}

pub(crate) fn submit_label(state: &PostListState) -> &'static str {
    if state.editing().is_some() {
        "Update Post"
    } else {
        "Create Post"
    }
}

pub(crate) fn footer_text(count: usize) -> String {
    format!("Built with ❤️ using ArgoCD, Helm, and Kubernetes | GitOps-powered deployment | {count} posts")
}
