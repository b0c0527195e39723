use kblog_client::{Category, DraftForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::form::{self, DraftField};
use crate::state::AppState;

/// Модальная форма создания и редактирования поста.
#[component]
pub(crate) fn PostForm(state: AppState) -> impl IntoView {
    let draft = move |read: fn(&DraftForm) -> String| {
        move || state.page.with(|page| read(page.draft()))
    };
    let input = move |field: DraftField| {
        move |ev: leptos::ev::Event| state.update_field(field, event_target_value(&ev))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    view! {
        <div class="modal">
            <div class="modal-content">
                <h2>{move || state.page.with(form::form_heading)}</h2>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Title *"</label>
                        <input
                            type="text"
                            name="title"
                            required
                            placeholder="Enter post title..."
                            prop:value=draft(|d| d.title.clone())
                            on:input=input(DraftField::Title)
                        />
                    </div>

                    <div class="form-group">
                        <label>"Category *"</label>
                        <select
                            name="category"
                            required
                            prop:value=draft(|d| d.category.to_string())
                            on:change=input(DraftField::Category)
                        >
                            {Category::ALL
                                .iter()
                                .map(|category| {
                                    let name = category.as_str();
                                    view! { <option value=name>{name}</option> }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label>"Content *"</label>
                        <textarea
                            name="content"
                            required
                            rows="10"
                            placeholder="Write your blog post content..."
                            prop:value=draft(|d| d.content.clone())
                            on:input=input(DraftField::Content)
                        />
                    </div>

                    <div class="form-group">
                        <label>"Tags (comma-separated)"</label>
                        <input
                            type="text"
                            name="tags"
                            placeholder="kubernetes, docker, ci/cd"
                            prop:value=draft(|d| d.tags.clone())
                            on:input=input(DraftField::Tags)
                        />
                    </div>

                    <div class="form-group">
                        <label>"Author *"</label>
                        <input
                            type="text"
                            name="author"
                            required
                            prop:value=draft(|d| d.author.clone())
                            on:input=input(DraftField::Author)
                        />
                    </div>

                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary">
                            {move || state.page.with(form::submit_label)}
                        </button>
                        <button type="button" class="btn btn-secondary" on:click=move |_| state.cancel()>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
