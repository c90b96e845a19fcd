//! CLI administration tool for the blog database.
//!
//! Creates, inspects and edits authors and posts through the same services
//! the library exposes, so every write goes through the validation rules.
//!
//! # Usage
//!
//! ```bash
//! # Create an author (prompts for missing values)
//! cargo run --bin blog-admin -- author create --name "Ada" --phone 5551234567
//!
//! # Rename an author
//! cargo run --bin blog-admin -- author update 1 --name "Ada Lovelace"
//!
//! # Publish a post whose body lives in a file
//! cargo run --bin blog-admin -- post create --title "Top 5 Secrets" \
//!     --category Fiction --content-file draft.md
//!
//! # List posts in one category
//! cargo run --bin blog-admin -- post list --category Non-Fiction
//!
//! # Check database connection
//! cargo run --bin blog-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! See [`blog_core::config`]; `DATABASE_URL` or the `DB_*` components are
//! required.

use blog_core::application::services::{AuthorService, PostService};
use blog_core::config;
use blog_core::domain::entities::{
    Author, AuthorPatch, Category, NewAuthor, NewPost, Post, PostFilter, PostPatch,
};
use blog_core::error::AppError;
use blog_core::infrastructure::persistence::{self, PgAuthorRepository, PgPostRepository};
use blog_core::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// CLI tool for managing blog authors and posts.
#[derive(Parser)]
#[command(name = "blog-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage authors
    Author {
        #[command(subcommand)]
        action: AuthorAction,
    },

    /// Manage posts
    Post {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Author subcommands.
#[derive(Subcommand)]
enum AuthorAction {
    /// Create a new author
    Create {
        /// Author name (must be unique)
        #[arg(short, long)]
        name: Option<String>,

        /// Phone number, exactly 10 digits
        #[arg(short, long)]
        phone: Option<String>,
    },

    /// List all authors
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one author by ID or exact name
    Show { id_or_name: String },

    /// Change an author's name or phone number
    Update {
        id: i64,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        phone: Option<String>,
    },
}

/// Post subcommands.
#[derive(Subcommand)]
enum PostAction {
    /// Create a new post
    Create {
        #[arg(short, long)]
        title: String,

        /// `Fiction` or `Non-Fiction`
        #[arg(short, long)]
        category: String,

        /// Post body (at least 250 characters)
        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,

        /// Read the post body from a file
        #[arg(long)]
        content_file: Option<PathBuf>,

        /// Optional summary (at most 250 characters)
        #[arg(short, long)]
        summary: Option<String>,
    },

    /// List posts
    List {
        /// Only show posts in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one post with its full content
    Show { id: i64 },

    /// Change fields of a post
    Update {
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,

        #[arg(long)]
        content_file: Option<PathBuf>,

        #[arg(short, long, conflicts_with = "clear_summary")]
        summary: Option<String>,

        /// Remove the summary
        #[arg(long)]
        clear_summary: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info and record counts
    Info,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load_from_env()?;
    telemetry::init(&config.log_level, &config.log_format)?;
    config.print_summary();

    let pool = persistence::connect(&config).await?;

    match cli.command {
        Commands::Author { action } => handle_author_action(action, &pool).await?,
        Commands::Post { action } => handle_post_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Prints an error, showing the rule that failed for validation errors.
fn report_error(e: &anyhow::Error) {
    eprintln!();
    match e.downcast_ref::<AppError>() {
        Some(app) => {
            eprintln!(
                "{} {}",
                format!("❌ {}:", app.code()).red().bold(),
                app.to_string().red()
            );
            if let Some(validation) = app.as_validation() {
                eprintln!("   field: {}", validation.field().yellow());
            }
            eprintln!("   details: {}", app.details().to_string().bright_black());
        }
        None => eprintln!("{} {:#}", "❌ Error:".red().bold(), e),
    }
    eprintln!();
}

/// Dispatches author commands.
async fn handle_author_action(action: AuthorAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgAuthorRepository::new(Arc::new(pool.clone())));
    let service = AuthorService::new(repo);

    match action {
        AuthorAction::Create { name, phone } => {
            println!("{}", "✍️  Create Author".bright_blue().bold());
            println!();

            let name = prompt_if_missing(name, "Author name")?;
            let phone = prompt_if_missing(phone, "Phone number (10 digits)")?;

            let author = service.create_author(NewAuthor::new(name, phone)).await?;

            println!("{}", "✅ Author created successfully!".green().bold());
            println!();
            print_author(&author);
        }
        AuthorAction::List { json } => {
            let authors = service.list_authors().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&authors)?);
            } else {
                print_author_table(&authors);
            }
        }
        AuthorAction::Show { id_or_name } => {
            let author = match id_or_name.parse::<i64>() {
                Ok(id) => service.get_author(id).await?,
                Err(_) => service.get_author_by_name(&id_or_name).await?,
            };
            print_author(&author);
        }
        AuthorAction::Update { id, name, phone } => {
            let patch = AuthorPatch {
                name,
                phone_number: phone,
            };
            if patch.is_empty() {
                println!("{}", "⚠️  Nothing to update".yellow());
                return Ok(());
            }

            let author = service.update_author(id, patch).await?;

            println!("{}", "✅ Author updated successfully!".green().bold());
            println!();
            print_author(&author);
        }
    }

    Ok(())
}

/// Dispatches post commands.
async fn handle_post_action(action: PostAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgPostRepository::new(Arc::new(pool.clone())));
    let service = PostService::new(repo);

    match action {
        PostAction::Create {
            title,
            category,
            content,
            content_file,
            summary,
        } => {
            println!("{}", "📝 Create Post".bright_blue().bold());
            println!();

            let content = match read_content(content, content_file)? {
                Some(c) => c,
                None => Input::<String>::new().with_prompt("Content").interact_text()?,
            };

            let post = service
                .create_post(NewPost {
                    title,
                    content,
                    category,
                    summary,
                })
                .await?;

            println!("{}", "✅ Post created successfully!".green().bold());
            println!();
            print_post(&post, false);
        }
        PostAction::List { category, json } => {
            let filter = match category {
                Some(raw) => PostFilter::category(raw.parse::<Category>().map_err(AppError::from)?),
                None => PostFilter::default(),
            };

            let posts = service.list_posts(filter).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else {
                print_post_table(&posts);
            }
        }
        PostAction::Show { id } => {
            let post = service.get_post(id).await?;
            print_post(&post, true);
        }
        PostAction::Update {
            id,
            title,
            category,
            content,
            content_file,
            summary,
            clear_summary,
        } => {
            let summary = if clear_summary {
                Some(None)
            } else {
                summary.map(Some)
            };

            let patch = PostPatch {
                title,
                content: read_content(content, content_file)?,
                category,
                summary,
            };
            if patch.is_empty() {
                println!("{}", "⚠️  Nothing to update".yellow());
                return Ok(());
            }

            let post = service.update_post(id, patch).await?;

            println!("{}", "✅ Post updated successfully!".green().bold());
            println!();
            print_post(&post, false);
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let authors: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
                .fetch_one(pool)
                .await?;
            let posts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Authors:    {}", authors.to_string().bright_green().bold());
            println!("  Posts:      {}", posts.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

/// Resolves post content from an inline value or a file.
fn read_content(inline: Option<String>, file: Option<PathBuf>) -> Result<Option<String>> {
    match (inline, file) {
        (Some(text), _) => Ok(Some(text)),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read content from {}", path.display()))
            .map(Some),
        (None, None) => Ok(None),
    }
}

fn print_author(author: &Author) {
    println!("  ID:      {}", author.id.to_string().bright_black());
    println!("  Name:    {}", author.name.cyan());
    println!("  Phone:   {}", author.phone_number);
    println!(
        "  Created: {}",
        author.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    if let Some(updated_at) = author.updated_at {
        println!(
            "  Updated: {}",
            updated_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
        );
    }
    println!();
}

fn print_author_table(authors: &[Author]) {
    println!("{}", "👤 Authors".bright_blue().bold());
    println!();

    if authors.is_empty() {
        println!("{}", "  No authors found".yellow());
        println!();
        return;
    }

    println!(
        "  {:<5} {:<30} {:<12} {:<20}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Phone".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for author in authors {
        println!(
            "  {:<5} {:<30} {:<12} {}",
            author.id.to_string().bright_black(),
            author.name.cyan(),
            author.phone_number,
            author
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        authors.len().to_string().bright_white().bold()
    );
    println!();
}

fn print_post(post: &Post, with_content: bool) {
    println!("  ID:       {}", post.id.to_string().bright_black());
    println!("  Title:    {}", post.title.cyan());
    println!("  Category: {}", post.category);
    match &post.summary {
        Some(summary) => println!("  Summary:  {}", summary),
        None => println!("  Summary:  {}", "(none)".bright_black()),
    }
    println!(
        "  Created:  {}",
        post.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    if with_content {
        println!();
        println!("{}", post.content);
    } else {
        println!(
            "  Content:  {} characters",
            post.content.chars().count().to_string().bright_white()
        );
    }
    println!();
}

fn print_post_table(posts: &[Post]) {
    println!("{}", "📚 Posts".bright_blue().bold());
    println!();

    if posts.is_empty() {
        println!("{}", "  No posts found".yellow());
        println!();
        return;
    }

    println!(
        "  {:<5} {:<40} {:<12} {:<20}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Category".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for post in posts {
        println!(
            "  {:<5} {:<40} {:<12} {}",
            post.id.to_string().bright_black(),
            post.title.cyan(),
            post.category.as_str(),
            post.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", posts.len().to_string().bright_white().bold());
    println!();
}
