use bookmarks_server::{
    api::validation::{ensure_required_fields, validate_new_bookmark},
    database::{self, BookmarkRepository},
    errors::AppError,
};
use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, verbatim_doc_comment)]
/// Command-line administration for the bookmarks database.
/// Uses DATABASE_URL (and the DATABASE_* pool settings) from the environment or `.env`.
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Schema maintenance.
    Db {
        #[command(subcommand)]
        db_command: DbCommand,
    },
    /// Bookmark records, stored values shown without output escaping.
    Bookmarks {
        #[command(subcommand)]
        bookmark_command: BookmarkCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DbCommand {
    /// Creates the `bookmarks` table if it does not exist.
    Migrate,
    /// Deletes EVERY bookmark. Requires --yes.
    Wipe {
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum BookmarkCommand {
    /// Prints all bookmarks as JSON.
    List,
    /// Adds a bookmark after running the same validation as the HTTP API.
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        url: String,
        #[arg(short, long)]
        rating: i64,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Deletes a bookmark by id.
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Inserts a small set of sample bookmarks.
    Seed,
}

fn seed_payloads() -> Vec<Value> {
    vec![
        json!({
            "title": "The Rust Programming Language",
            "url": "https://doc.rust-lang.org/book/",
            "description": "The official book",
            "rating": 5
        }),
        json!({
            "title": "Actix Web",
            "url": "https://actix.rs",
            "description": "Web framework documentation",
            "rating": 4
        }),
        json!({
            "title": "SeaORM",
            "url": "https://www.sea-ql.org/SeaORM/",
            "rating": 4
        }),
    ]
}

async fn add_bookmark(
    repository: &BookmarkRepository,
    payload: &Map<String, Value>,
) -> Result<(), AppError> {
    ensure_required_fields(payload)?;
    let new_bookmark = validate_new_bookmark(payload)?;
    let created = repository.create(new_bookmark).await?;
    println!("{}", serde_json::to_string_pretty(&created).unwrap_or_default());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let cli = Cli::parse();
    let db = database::connect().await?;
    let repository = BookmarkRepository::new(db.clone());

    match cli.command {
        Commands::Db { db_command } => match db_command {
            DbCommand::Migrate => {
                database::ensure_schema(&db).await?;
                println!("Table `bookmarks` is ready.");
            }
            DbCommand::Wipe { yes } => {
                if !yes {
                    return Err("Refusing to wipe without --yes".into());
                }
                let removed = database::wipe(&db).await?;
                println!("Removed {} bookmark(s).", removed);
            }
        },
        Commands::Bookmarks { bookmark_command } => match bookmark_command {
            BookmarkCommand::List => {
                let all = repository.list().await?;
                println!("{}", serde_json::to_string_pretty(&all)?);
            }
            BookmarkCommand::Add {
                title,
                url,
                rating,
                description,
            } => {
                let mut payload = Map::new();
                payload.insert("title".to_string(), Value::String(title));
                payload.insert("url".to_string(), Value::String(url));
                payload.insert("rating".to_string(), Value::from(rating));
                if let Some(description) = description {
                    payload.insert("description".to_string(), Value::String(description));
                }
                add_bookmark(&repository, &payload).await?;
            }
            BookmarkCommand::Delete { id } => match repository.delete_by_id(&id).await {
                Ok(()) => println!("Bookmark {} deleted.", id),
                Err(AppError::NotFound) => return Err(format!("Bookmark {} not found", id).into()),
                Err(e) => return Err(e.into()),
            },
            BookmarkCommand::Seed => {
                database::ensure_schema(&db).await?;
                for payload in seed_payloads() {
                    if let Value::Object(map) = payload {
                        add_bookmark(&repository, &map).await?;
                    }
                }
            }
        },
    }

    Ok(())
}
