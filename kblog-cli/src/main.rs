mod logging;
mod render;
mod settings;

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use kblog_client::{
    ActionError, BlogClientError, Category, DraftForm, HttpClient, Post, PostListController,
};

use crate::render::CategoryDiff;
use crate::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "kblog-cli", version, about = "CLI клиент для Kubernetes-блога")]
struct Cli {
    /// Адрес сервера (перекрывает KBLOG_API_URL).
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Список всех постов.
    List {
        /// Вывести посты как JSON.
        #[arg(long)]
        json: bool,
    },
    /// Просмотр поста целиком.
    Show {
        #[arg(long)]
        id: i64,
    },
    /// Создание поста.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        author: Option<String>,
        /// Теги через запятую.
        #[arg(long)]
        tags: Option<String>,
    },
    /// Редактирование поста.
    ///
    /// Неуказанные поля сохраняют текущие значения.
    Edit {
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        fields: FieldOverrides,
    },
    /// Удаление поста.
    Delete {
        #[arg(long)]
        id: i64,
        /// Не спрашивать подтверждение.
        #[arg(long)]
        yes: bool,
    },
    /// Список категорий.
    Categories {
        /// Сверить с категориями сервера.
        #[arg(long)]
        check: bool,
    },
}

#[derive(Debug, Default, clap::Args)]
struct FieldOverrides {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    content: Option<String>,
    #[arg(long)]
    category: Option<Category>,
    #[arg(long)]
    author: Option<String>,
    #[arg(long)]
    tags: Option<String>,
}

impl FieldOverrides {
    fn apply(self, draft: &mut DraftForm) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(content) = self.content {
            draft.content = content;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(author) = self.author {
            draft.author = author;
        }
        if let Some(tags) = self.tags {
            draft.tags = tags;
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let settings = Settings::from_env().context("некорректная конфигурация окружения")?;
    logging::init_logging(&settings.log_level)?;

    let server = normalize_server(cli.server.unwrap_or(settings.api_url));
    tracing::debug!(%server, "using blog api");
    let api = HttpClient::new(server, settings.http_timeout).map_err(map_client_error)?;

    // без обращения к серверу
    if let Command::Categories { check: false } = cli.command {
        print_categories();
        return Ok(());
    }

    let mut controller = PostListController::new(api);

    match cli.command {
        Command::List { json } => {
            load(&mut controller).await?;
            let posts = controller.state().posts();
            if json {
                println!("{}", serde_json::to_string_pretty(posts)?);
            } else {
                println!("{}", render::render_list(posts));
            }
        }
        Command::Show { id } => {
            load(&mut controller).await?;
            let post = find_post(&controller, id)?;
            controller.begin_view(post);
            if let Some(post) = controller.state().viewing() {
                println!("{}", render::render_detail(post));
            }
            controller.end_view();
        }
        Command::Create {
            title,
            content,
            category,
            author,
            tags,
        } => {
            controller.begin_create();
            FieldOverrides {
                title: Some(title),
                content: Some(content),
                category,
                author,
                tags,
            }
            .apply(controller.draft_mut());
            controller.submit().await.map_err(map_action_error)?;
            println!("Пост создан");
            if let Some(post) = controller.state().posts().first() {
                println!("{}", render::render_card(post));
            }
        }
        Command::Edit { id, fields } => {
            load(&mut controller).await?;
            let post = find_post(&controller, id)?;
            controller.begin_edit(&post);
            fields.apply(controller.draft_mut());
            controller.submit().await.map_err(map_action_error)?;
            println!("Пост обновлён");
            if let Some(post) = controller.state().find(id) {
                println!("{}", render::render_card(post));
            }
        }
        Command::Delete { id, yes } => {
            let removed = if yes {
                controller.remove(id, &|_: &str| true).await
            } else {
                controller.remove(id, &stdin_confirm).await
            }
            .map_err(map_action_error)?;

            if removed {
                println!("Пост удалён: id={id}");
            } else {
                println!("Удаление отменено");
            }
        }
        Command::Categories { .. } => {
            print_categories();
            let server = controller
                .api()
                .categories()
                .await
                .map_err(map_client_error)?;
            let diff = CategoryDiff::between(&server);
            if diff.is_empty() {
                println!("Категории совпадают с сервером");
            } else {
                print_diff(&diff);
                return Err(anyhow!("категории расходятся с сервером"));
            }
        }
    }

    Ok(())
}

async fn load(controller: &mut PostListController<HttpClient>) -> Result<()> {
    controller.load_all().await?;
    Ok(())
}

fn find_post(controller: &PostListController<HttpClient>, id: i64) -> Result<Post> {
    controller
        .state()
        .find(id)
        .cloned()
        .ok_or_else(|| anyhow!("пост не найден: id={id}"))
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn stdin_confirm(message: &str) -> bool {
    print!("{message} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => parse_confirmation(&answer),
        Err(_) => false,
    }
}

fn parse_confirmation(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "y" | "yes")
}

fn map_action_error(err: ActionError) -> anyhow::Error {
    match err {
        ActionError::Draft(err) => anyhow!("некорректный пост: {err}"),
        ActionError::Failure(failure) => anyhow!("{failure}"),
    }
}

fn map_client_error(err: BlogClientError) -> anyhow::Error {
    let message = match err {
        BlogClientError::Network(message) => format!("сервер недоступен: {message}"),
        BlogClientError::Status { status, message } => {
            format!("сервер ответил {status}: {message}")
        }
        BlogClientError::Decode(message) => format!("неожиданный ответ сервера: {message}"),
        BlogClientError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
    };
    anyhow!(message)
}

fn print_categories() {
    for category in Category::ALL {
        println!("{category}");
    }
}

fn print_diff(diff: &CategoryDiff) {
    for name in &diff.missing_on_server {
        println!("- нет на сервере: {name}");
    }
    for name in &diff.unknown_to_client {
        println!("+ неизвестна клиенту: {name}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_keeps_scheme() {
        let s = normalize_server("https://blog.example.com".to_string());
        assert_eq!(s, "https://blog.example.com");
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        let s = normalize_server("127.0.0.1:8000".to_string());
        assert_eq!(s, "http://127.0.0.1:8000");
    }

    #[test]
    fn parse_confirmation_accepts_yes_only() {
        assert!(parse_confirmation("y\n"));
        assert!(parse_confirmation("  YES "));
        assert!(!parse_confirmation("n"));
        assert!(!parse_confirmation(""));
        assert!(!parse_confirmation("yep"));
    }

    #[test]
    fn overrides_touch_only_given_fields() {
        let mut draft = DraftForm {
            title: "old".to_string(),
            content: "body".to_string(),
            category: Category::Storage,
            author: "SHA".to_string(),
            tags: "csi".to_string(),
        };

        FieldOverrides {
            title: Some("new".to_string()),
            category: Some(Category::Networking),
            ..FieldOverrides::default()
        }
        .apply(&mut draft);

        assert_eq!(draft.title, "new");
        assert_eq!(draft.content, "body");
        assert_eq!(draft.category, Category::Networking);
        assert_eq!(draft.tags, "csi");
    }

    #[test]
    fn cli_parses_category_names() {
        let cli = Cli::try_parse_from([
            "kblog-cli",
            "create",
            "--title",
            "t",
            "--content",
            "c",
            "--category",
            "gitops",
        ])
        .expect("must parse");
        match cli.command {
            Command::Create { category, .. } => assert_eq!(category, Some(Category::GitOps)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_unknown_category() {
        let parsed = Cli::try_parse_from([
            "kblog-cli",
            "edit",
            "--id",
            "1",
            "--category",
            "Databases",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn client_errors_are_readable() {
        let err = map_client_error(BlogClientError::Status {
            status: 404,
            message: "Not Found".to_string(),
        });
        assert_eq!(err.to_string(), "сервер ответил 404: Not Found");
    }
}
