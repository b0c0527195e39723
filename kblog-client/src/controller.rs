use crate::api::PostsApi;
use crate::error::{ActionError, UiFailure};
use crate::models::{DraftForm, Post};
use crate::state::{DELETE_CONFIRMATION, PostListState, Submission};

/// Интерактивное подтверждение опасного действия.
pub trait Confirm {
    /// `true`, если пользователь согласился.
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Владеет [`PostListState`] и проводит все изменения через [`PostsApi`].
///
/// После каждого успешного изменения список перечитывается целиком.
pub struct PostListController<A: PostsApi> {
    api: A,
    state: PostListState,
}

impl<A: PostsApi> PostListController<A> {
    /// Создаёт контроллер в начальном состоянии. Список ещё не загружен.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: PostListState::new(),
        }
    }

    /// Текущее состояние.
    pub fn state(&self) -> &PostListState {
        &self.state
    }

    /// Черновик для правки полей формы.
    pub fn draft_mut(&mut self) -> &mut DraftForm {
        self.state.draft_mut()
    }

    /// Транспорт, через который идут запросы.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Загружает всю коллекцию и заменяет ею список.
    pub async fn load_all(&mut self) -> Result<(), UiFailure> {
        match self.api.list_posts().await {
            Ok(posts) => {
                self.state.load_succeeded(posts);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load posts");
                self.state.load_failed();
                Err(UiFailure::Load)
            }
        }
    }

    /// Открывает форму нового поста.
    pub fn begin_create(&mut self) {
        self.state.begin_create();
    }

    /// Открывает форму редактирования поста.
    pub fn begin_edit(&mut self, post: &Post) {
        self.state.begin_edit(post);
    }

    /// Открывает просмотр поста.
    pub fn begin_view(&mut self, post: Post) {
        self.state.begin_view(post);
    }

    /// Закрывает просмотр.
    pub fn end_view(&mut self) {
        self.state.end_view();
    }

    /// Закрывает форму без сохранения.
    pub fn cancel(&mut self) {
        self.state.cancel();
    }

    /// Закрывает уведомление об ошибке.
    pub fn dismiss_alert(&mut self) {
        self.state.dismiss_alert();
    }

    /// Отправляет открытую форму: `PUT` в режиме редактирования, иначе `POST`.
    ///
    /// При ошибке форма остаётся открытой с введёнными данными. При успехе
    /// список перечитывается, и ошибка этой загрузки тоже возвращается.
    pub async fn submit(&mut self) -> Result<(), ActionError> {
        let submission = self.state.prepare_submit()?;

        let result = match &submission {
            Submission::Create(payload) => self.api.create_post(payload).await,
            Submission::Update { id, payload } => self.api.update_post(*id, payload).await,
        };

        match result {
            Ok(saved) => {
                tracing::info!(post_id = saved.id, "post saved");
                self.state.submit_succeeded();
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to save post");
                self.state.submit_failed();
                return Err(UiFailure::Save.into());
            }
        }

        self.load_all().await?;
        Ok(())
    }

    /// Удаляет пост после подтверждения.
    ///
    /// Возвращает `Ok(false)`, если пользователь отказался: запрос не отправлялся.
    pub async fn remove(&mut self, id: i64, confirm: &impl Confirm) -> Result<bool, ActionError> {
        if !confirm.confirm(DELETE_CONFIRMATION) {
            tracing::debug!(post_id = id, "delete not confirmed");
            return Ok(false);
        }

        if let Err(err) = self.api.delete_post(id).await {
            tracing::warn!(post_id = id, error = %err, "failed to delete post");
            self.state.remove_failed();
            return Err(UiFailure::Delete.into());
        }

        tracing::info!(post_id = id, "post deleted");
        self.state.remove_succeeded();
        self.load_all().await?;
        Ok(true)
    }
}
