//! CLI administration tool for candidate-hub.
//!
//! Provides read-only candidate inspection and database maintenance without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all candidates
//! cargo run --bin admin -- candidates list
//!
//! # Show one candidate
//! cargo run --bin admin -- candidates show john@example.com
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate -y
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//!
//! Candidate writes are only available through the HTTP API, which keeps the
//! server's cache consistent with the store.

use candidate_hub::domain::entities::Candidate;
use candidate_hub::domain::repositories::CandidateStore;
use candidate_hub::infrastructure::persistence::PgCandidateStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing candidate-hub.
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
    /// Inspect candidates
    Candidates {
        #[command(subcommand)]
        action: CandidateAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Candidate subcommands.
#[derive(Subcommand)]
enum CandidateAction {
    /// List all candidates
    List,

    /// Show a candidate's full profile
    Show {
        /// Candidate email
        email: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
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
        Commands::Candidates { action } => handle_candidate_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches candidate commands.
async fn handle_candidate_action(action: CandidateAction, pool: &PgPool) -> Result<()> {
    let store = PgCandidateStore::new(Arc::new(pool.clone()));

    match action {
        CandidateAction::List => list_candidates(&store).await?,
        CandidateAction::Show { email } => show_candidate(&store, &email).await?,
    }

    Ok(())
}

/// Lists candidates in a table.
///
/// ```text
/// Candidates
///
///   ID    Email                              Name
///   ──────────────────────────────────────────────────────────────────
///   1     john@example.com                   John Doe
/// ```
async fn list_candidates(store: &PgCandidateStore) -> Result<()> {
    println!("{}", "Candidates".bright_blue().bold());
    println!();

    let candidates = store
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list candidates: {}", e))?;

    if candidates.is_empty() {
        println!("{}", "  No candidates found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<34} {}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Name".bright_white().bold()
    );
    println!("  {}", "─".repeat(66).bright_black());

    for candidate in &candidates {
        let id = candidate.id.map(|id| id.to_string()).unwrap_or_default();
        println!(
            "  {:<5} {:<34} {}",
            id.bright_black(),
            candidate.email.cyan(),
            display_name(candidate)
        );
    }

    println!();
    println!(
        "  Total: {}",
        candidates.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_candidate(store: &PgCandidateStore, email: &str) -> Result<()> {
    let candidate = store
        .get_by_email(email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("Candidate '{email}' not found"))?;

    println!("{}", "Candidate".bright_blue().bold());
    println!();
    print_field("Email", Some(&candidate.email));
    print_field("First name", candidate.first_name.as_deref());
    print_field("Last name", candidate.last_name.as_deref());
    print_field("Phone", candidate.phone_number.as_deref());
    print_field("Call time", candidate.preferred_call_time.as_deref());
    print_field("LinkedIn", candidate.linkedin_profile_url.as_deref());
    print_field("GitHub", candidate.github_profile_url.as_deref());
    print_field("Comment", candidate.comment.as_deref());
    println!();

    Ok(())
}

/// Handles database maintenance commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Migrate { yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Apply pending migrations?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            println!("{}", "Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}

fn display_name(candidate: &Candidate) -> String {
    let parts: Vec<&str> = [
        candidate.first_name.as_deref(),
        candidate.last_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" ")
    }
}

fn print_field(label: &str, value: Option<&str>) {
    let value = value.unwrap_or("-");
    println!("  {:<11} {}", format!("{label}:").bright_black(), value);
}
