//! CLI administration tool for shorty.
//!
//! Inspects and maintains the PostgreSQL link store directly, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Show one link
//! cargo run --bin admin -- links show launch
//!
//! # Delete a link (asks for confirmation unless --yes)
//! cargo run --bin admin -- links delete launch
//!
//! # Show recorded activity for a tag
//! cargo run --bin admin -- tags show newsletter
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use shorty::domain::entities::Link;
use shorty::domain::repositories::LinkStore;
use shorty::infrastructure::persistence::PgLinkStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorty.
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
    /// Inspect and delete links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Inspect tag activity
    Tags {
        #[command(subcommand)]
        action: TagAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Show a single link
    Show {
        /// Short code of the link
        code: String,
    },

    /// Delete a link
    Delete {
        /// Short code of the link
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Tag subcommands.
#[derive(Subcommand)]
enum TagAction {
    /// Show every recorded use of a tag
    Show {
        /// Tag as it appears in `/{code}/{tag}`
        tag: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and schema
    Check,
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
        Commands::Tags { action } => handle_tag_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn store(pool: &PgPool) -> PgLinkStore {
    PgLinkStore::new(Arc::new(pool.clone()))
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let store = store(pool);

    match action {
        LinkAction::List => list_links(&store).await,
        LinkAction::Show { code } => show_link(&store, &code).await,
        LinkAction::Delete { code, yes } => delete_link(&store, &code, yes).await,
    }
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   Code           Clicks    Created            Target
///   ──────────────────────────────────────────────────────────────────
///   launch         42        2025-01-15 10:30   https://example.com/launch
/// ```
async fn list_links(store: &PgLinkStore) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = store
        .find_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<14} {:<9} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<14} {:<9} {:<18} {}",
            link.code.cyan(),
            link.total_clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn find_link(store: &PgLinkStore, code: &str) -> Result<Link> {
    store
        .find_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("Link not found: {code:?}"))
}

/// Prints every field of one link.
async fn show_link(store: &PgLinkStore, code: &str) -> Result<()> {
    let link = find_link(store, code).await?;

    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    print_link(&link);
    println!();

    Ok(())
}

fn print_link(link: &Link) {
    println!("  Code:       {}", link.code.cyan());
    println!("  Short URL:  {}", link.short_url.bright_white());
    println!("  Target:     {}", link.original_url);
    println!(
        "  Clicks:     {}",
        link.total_clicks.to_string().bright_green().bold()
    );
    println!("  Created by: {}", link.created_by);
    println!(
        "  Created:    {}",
        link.created_at.to_rfc3339().bright_black()
    );
    println!(
        "  Updated:    {}",
        link.updated_at.to_rfc3339().bright_black()
    );
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(store: &PgLinkStore, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Link".bright_blue().bold());
    println!();

    let link = find_link(store, code).await?;
    print_link(&link);
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

    let deleted = store
        .delete(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!();
    if deleted == 0 {
        println!("{}", "⚠️  Link was already gone".yellow());
    } else {
        println!("{}", "✅ Link deleted".green().bold());
    }
    println!();

    Ok(())
}

/// Dispatches tag commands.
async fn handle_tag_action(action: TagAction, pool: &PgPool) -> Result<()> {
    let store = store(pool);

    match action {
        TagAction::Show { tag } => {
            println!("{} {}", "🏷️  Tag".bright_blue().bold(), tag.cyan().bold());
            println!();

            let activity = store
                .find_tag_activity(&tag)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load tag activity: {}", e))?;

            if activity.is_empty() {
                println!("{}", "  No activity recorded".yellow());
                return Ok(());
            }

            println!(
                "  {:<14} {}",
                "Code".bright_white().bold(),
                "Clicked at".bright_white().bold()
            );
            println!("  {}", "─".repeat(45).bright_black());

            for entry in &activity {
                println!(
                    "  {:<14} {}",
                    entry.short_code.cyan(),
                    entry.created_at.to_rfc3339().bright_black()
                );
            }

            println!();
            println!(
                "  Total: {}",
                activity.len().to_string().bright_white().bold()
            );
            println!();
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

            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await
                .context("links table missing, start the server once to run migrations")?;
            let tagged: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tag_activity")
                .fetch_one(pool)
                .await
                .context("tag_activity table missing, start the server once to run migrations")?;

            println!(
                "  Links:        {}",
                links.to_string().bright_green().bold()
            );
            println!(
                "  Tagged clicks: {}",
                tagged.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
