//! Конечный автомат страницы: список постов, режим UI и черновик формы.
//!
//! Здесь нет ввода-вывода. Запросы выполняет тот, кто владеет состоянием
//! ([`crate::PostListController`] или wasm-фронтенд), а результат сообщает
//! через методы `*_succeeded` / `*_failed`.

use crate::error::{DraftError, UiFailure};
use crate::models::{DraftForm, Post, PostPayload};

/// Текст подтверждения удаления.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this post?";

#[derive(Debug, Clone, PartialEq, Default)]
/// Активный режим UI. Одновременно может быть только один.
pub enum UiMode {
    /// Ничего не открыто.
    #[default]
    Idle,
    /// Открыта форма нового поста.
    Creating,
    /// Открыта форма редактирования поста.
    Editing(Post),
    /// Открыт просмотр поста.
    Viewing(Post),
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Состояние загрузки списка.
pub enum LoadStatus {
    /// Первая загрузка ещё не завершилась.
    #[default]
    Loading,
    /// Список совпадает с последним успешным ответом сервера.
    Ready,
    /// Последняя загрузка не удалась; список пуст.
    Failed(UiFailure),
}

#[derive(Debug, Clone, PartialEq)]
/// Запрос, который нужно отправить по открытой форме.
pub enum Submission {
    /// `POST /api/posts`.
    Create(PostPayload),
    /// `PUT /api/posts/{id}`.
    Update {
        /// Идентификатор поста, переданного в `begin_edit`.
        id: i64,
        /// Тело запроса.
        payload: PostPayload,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Всё изменяемое состояние страницы списка постов.
pub struct PostListState {
    posts: Vec<Post>,
    mode: UiMode,
    draft: DraftForm,
    load: LoadStatus,
    alert: Option<UiFailure>,
}

impl PostListState {
    /// Начальное состояние: `Idle`, пустой список, идёт первая загрузка.
    pub fn new() -> Self {
        Self::default()
    }

    /// Посты в порядке сервера.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Текущий режим UI.
    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    /// Черновик формы.
    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    /// Черновик для правки полей формы.
    pub fn draft_mut(&mut self) -> &mut DraftForm {
        &mut self.draft
    }

    /// Состояние загрузки списка.
    pub fn load_status(&self) -> &LoadStatus {
        &self.load
    }

    /// Идёт ли первая загрузка.
    pub fn is_loading(&self) -> bool {
        self.load == LoadStatus::Loading
    }

    /// Фатальная ошибка загрузки, если она есть.
    pub fn load_error(&self) -> Option<&UiFailure> {
        match &self.load {
            LoadStatus::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Непрочитанное уведомление об ошибке изменения.
    pub fn alert(&self) -> Option<&UiFailure> {
        self.alert.as_ref()
    }

    /// Открыта ли форма (создание или редактирование).
    pub fn is_form_open(&self) -> bool {
        matches!(self.mode, UiMode::Creating | UiMode::Editing(_))
    }

    /// Пост, который сейчас редактируется.
    pub fn editing(&self) -> Option<&Post> {
        match &self.mode {
            UiMode::Editing(post) => Some(post),
            _ => None,
        }
    }

    /// Пост, который сейчас открыт на просмотр.
    pub fn viewing(&self) -> Option<&Post> {
        match &self.mode {
            UiMode::Viewing(post) => Some(post),
            _ => None,
        }
    }

    /// Ищет пост в текущем списке.
    pub fn find(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Заменяет список целиком и снимает ошибку загрузки.
    pub fn load_succeeded(&mut self, posts: Vec<Post>) {
        tracing::debug!(count = posts.len(), "post list replaced");
        self.posts = posts;
        self.load = LoadStatus::Ready;
    }

    /// Фатальная ошибка загрузки: список очищается.
    pub fn load_failed(&mut self) {
        self.posts.clear();
        self.load = LoadStatus::Failed(UiFailure::Load);
    }

    /// Открывает пустую форму нового поста.
    pub fn begin_create(&mut self) {
        self.draft = DraftForm::default();
        self.mode = UiMode::Creating;
    }

    /// Открывает форму редактирования; просмотр при этом закрывается.
    pub fn begin_edit(&mut self, post: &Post) {
        self.draft = DraftForm::from_post(post);
        self.mode = UiMode::Editing(post.clone());
    }

    /// Открывает просмотр поста. Пока открыта форма, вызов игнорируется.
    pub fn begin_view(&mut self, post: Post) {
        if self.is_form_open() {
            tracing::debug!(post_id = post.id, "view ignored while form is open");
            return;
        }
        self.mode = UiMode::Viewing(post);
    }

    /// Закрывает просмотр.
    pub fn end_view(&mut self) {
        if matches!(self.mode, UiMode::Viewing(_)) {
            self.mode = UiMode::Idle;
        }
    }

    /// Закрывает форму и сбрасывает черновик без сохранения.
    pub fn cancel(&mut self) {
        if self.is_form_open() {
            self.mode = UiMode::Idle;
        }
        self.draft = DraftForm::default();
    }

    /// Проверяет черновик и решает, какой запрос отправить.
    pub fn prepare_submit(&self) -> Result<Submission, DraftError> {
        let target = match &self.mode {
            UiMode::Creating => None,
            UiMode::Editing(post) => Some(post.id),
            UiMode::Idle | UiMode::Viewing(_) => return Err(DraftError::FormClosed),
        };
        let payload = self.draft.to_payload()?;

        Ok(match target {
            Some(id) => Submission::Update { id, payload },
            None => Submission::Create(payload),
        })
    }

    /// Сервер принял create/update: форма закрывается, черновик сбрасывается.
    pub fn submit_succeeded(&mut self) {
        self.mode = UiMode::Idle;
        self.draft = DraftForm::default();
    }

    /// Сервер отклонил create/update: форма и ввод остаются как есть.
    pub fn submit_failed(&mut self) {
        self.alert = Some(UiFailure::Save);
    }

    /// Пост удалён: закрывается просмотр, если он был открыт.
    pub fn remove_succeeded(&mut self) {
        self.end_view();
    }

    /// Удаление не удалось: состояние не меняется, кроме уведомления.
    pub fn remove_failed(&mut self) {
        self.alert = Some(UiFailure::Delete);
    }

    /// Закрывает уведомление об ошибке.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
