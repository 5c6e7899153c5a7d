//! CLI administration tool for linkshort.
//!
//! Provides commands for managing links, viewing statistics and checking the
//! database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List active links, optionally filtered
//! cargo run --bin admin -- links list --query example --limit 20
//!
//! # Show a single link
//! cargo run --bin admin -- links show abc123
//!
//! # Create a link with a custom code
//! cargo run --bin admin -- links create https://example.com --code promo24
//!
//! # Soft-delete a link
//! cargo run --bin admin -- links delete abc123
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//!
//! # Features
//!
//! - **Link Management**: List, show, create and delete links through the
//!   same service the HTTP API uses
//! - **Statistics**: Active/deleted link and click counts
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: Confirmation before deleting
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use linkshort::application::services::LinkService;
use linkshort::domain::entities::{Link, LinkQuery};
use linkshort::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing linkshort.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List active links, newest first
    List {
        /// Case-sensitive substring of the code or target
        #[arg(short, long)]
        query: Option<String>,

        /// Maximum number of links to show (1-100, default 50)
        #[arg(short, long)]
        limit: Option<i64>,

        /// Number of links to skip
        #[arg(short, long)]
        offset: Option<i64>,
    },

    /// Show a single active link
    Show {
        /// Short code
        code: String,
    },

    /// Create a new short link
    Create {
        /// Target URL (http:// or https://)
        target: String,

        /// Custom code (6-8 letters or digits), generated if omitted
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Soft-delete a link
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repo);

    match action {
        LinkAction::List {
            query,
            limit,
            offset,
        } => list_links(&service, LinkQuery::new(query, limit, offset)).await?,
        LinkAction::Show { code } => show_link(&service, &code).await?,
        LinkAction::Create { target, code } => create_link(&service, target, code).await?,
        LinkAction::Delete { code, yes } => delete_link(&service, &code, yes).await?,
    }

    Ok(())
}

/// Lists active links as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   Code     Clicks   Created            Target
///   ─────────────────────────────────────────────────────────────────
///   abc123   12       2025-01-15 10:30   https://example.com
/// ```
async fn list_links(service: &LinkService, query: LinkQuery) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = service
        .list_links(query)
        .await
        .context("Failed to list links")?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin links create <target>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<8} {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<8} {:<8} {:<18} {}",
            link.code.cyan(),
            link.total_clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.target
        );
    }

    println!();
    println!("  Shown: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn show_link(service: &LinkService, code: &str) -> Result<()> {
    let link = service
        .get_link(code)
        .await
        .with_context(|| format!("Link {code}"))?;

    print_link(&link);

    Ok(())
}

async fn create_link(service: &LinkService, target: String, code: Option<String>) -> Result<()> {
    println!("{}", "🔗 Create Link".bright_blue().bold());
    println!();

    let link = service
        .create_link(Some(target), code)
        .await
        .context("Failed to create link")?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    print_link(&link);

    Ok(())
}

/// Soft-deletes a link after confirmation (default: No).
async fn delete_link(service: &LinkService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Link".bright_blue().bold());
    println!();

    let link = service
        .get_link(code)
        .await
        .with_context(|| format!("Link {code}"))?;

    println!("  Code:   {}", link.code.cyan());
    println!("  Target: {}", link.target);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(code)
        .await
        .context("Failed to delete link")?;

    println!();
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

fn print_link(link: &Link) {
    let last_clicked = link
        .last_clicked
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    println!("  Code:         {}", link.code.cyan().bold());
    println!("  Target:       {}", link.target);
    println!(
        "  Clicks:       {}",
        link.total_clicks.to_string().bright_green()
    );
    println!("  Last clicked: {}", last_clicked.bright_black());
    println!(
        "  Created:      {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Displays link statistics.
///
/// Shows:
/// - Number of active links
/// - Number of deleted links
/// - Total clicks across all links
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (active, deleted, clicks): (i64, i64, i64) = sqlx::query_as(
        r#"
        SELECT
            COUNT(*) FILTER (WHERE NOT deleted),
            COUNT(*) FILTER (WHERE deleted),
            COALESCE(SUM(total_clicks), 0)::BIGINT
        FROM links
        "#,
    )
    .fetch_one(pool)
    .await?;

    println!(
        "  Active links:  {}",
        active.to_string().bright_green().bold()
    );
    println!(
        "  Deleted links: {}",
        deleted.to_string().bright_black().bold()
    );
    println!(
        "  Clicks:        {}",
        clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
            LinkService::new(repo)
                .check_storage()
                .await
                .context("Database check failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
