//! Terminal client for the login form.
//!
//! Hosts the login form controller on an in-memory page and drives it from
//! the terminal against the real login endpoint.
//!
//! # Usage
//!
//! ```bash
//! # Log in, prompting for missing fields
//! cargo run -- login
//!
//! # Log in non-interactively
//! cargo run -- login --email user@example.com --password secret123
//!
//! # Type the password in plain text
//! cargo run -- login --show-password
//!
//! # Check an address against the email shape rule
//! cargo run -- check-email user@example.com
//!
//! # Inspect or clear the stored session
//! cargo run -- session show
//! cargo run -- session clear
//! ```
//!
//! # Environment Variables
//!
//! See [`login_form::config`]. A `.env` file in the working directory is
//! loaded first.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};

use login_form::config::{self, Config};
use login_form::domain::email::is_valid_email;
use login_form::prelude::*;
use login_form::telemetry;

/// Log in to the management dashboard from the terminal.
#[derive(Parser)]
#[command(name = "login-form")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in and submit the login form
    Login {
        /// Account email (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Account password (prompted if omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Show the password while typing it
        #[arg(short = 's', long)]
        show_password: bool,

        /// Submit even when the submit button is disabled
        #[arg(short, long)]
        yes: bool,
    },

    /// Check whether an address passes the email shape rule
    CheckEmail {
        email: String,
    },

    /// Inspect the stored session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Print the stored session keys
    Show,

    /// Remove the stored session
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    telemetry::init(&config.log_level, &config.log_format);
    config.print_summary();

    match cli.command {
        Commands::Login {
            email,
            password,
            show_password,
            yes,
        } => login(&config, email, password, show_password, yes).await,
        Commands::CheckEmail { email } => {
            check_email(&email);
            Ok(())
        }
        Commands::Session { action } => handle_session_action(&config, action),
    }
}

/// Runs one login attempt through the controller.
///
/// # Flow
///
/// 1. Bind the controller to a fresh login page
/// 2. Toggle password visibility if requested
/// 3. Prompt for missing fields and fire field-change
/// 4. Stop if the submit button is disabled (unless `--yes`)
/// 5. Submit and report the outcome
async fn login(
    config: &Config,
    email: Option<String>,
    password: Option<String>,
    show_password: bool,
    yes: bool,
) -> Result<()> {
    println!("{}", "🔐 Login".bright_blue().bold());
    println!();

    let page = MemoryDocument::login_page();
    let gateway = Arc::new(
        HttpLoginGateway::new(config.login_endpoint_url()?, config.login_timeout())
            .context("Failed to build HTTP client")?,
    );
    let store = Arc::new(FileSessionStore::new(config.session_file.clone()));
    let navigator = Arc::new(LocationNavigator::new(config.page_url()?));

    let controller = LoginFormController::bind(
        &page,
        gateway,
        store.clone(),
        navigator,
        config.controller_settings(),
    )?;

    if show_password {
        controller.dispatch(FormEvent::ToggleClicked).await;
    }

    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("E-mail")
            .allow_empty(true)
            .interact_text()?,
    };
    type_into(&page, "email", &email)?;
    controller.dispatch(FormEvent::FieldChanged).await;

    let password_input = page
        .get_element_by_id("password")
        .context("login page has no password field")?;
    let password = match password {
        Some(password) => password,
        None if password_input.input_type().as_deref() == Some("password") => Password::new()
            .with_prompt("Senha")
            .allow_empty_password(true)
            .interact()?,
        None => Input::<String>::new()
            .with_prompt("Senha")
            .allow_empty(true)
            .interact_text()?,
    };
    password_input.set_value(&password);
    controller.dispatch(FormEvent::FieldChanged).await;

    if !controller.is_submit_enabled() && !yes {
        println!();
        println!(
            "{}",
            "⚠️  Submit is disabled until both fields are filled".yellow()
        );
        println!("  Use {} to submit anyway", "--yes".bright_cyan());
        return Ok(());
    }

    let outcome = match controller
        .dispatch(FormEvent::FormSubmitted(SubmitEvent::new()))
        .await
    {
        HandlerOutcome::Submitted(outcome) => outcome,
        other => anyhow::bail!("unexpected handler outcome: {other:?}"),
    };

    println!();
    match outcome {
        SubmitOutcome::LoggedIn { location } => {
            println!("{}", "✅ Logged in".green().bold());
            println!("  Location: {}", location.as_str().cyan());
            println!(
                "  Session:  {}",
                store.path().display().to_string().bright_black()
            );
        }
        SubmitOutcome::Ignored => {
            println!("{}", "⏳ A login request is already in flight".yellow());
        }
        SubmitOutcome::Invalid(_)
        | SubmitOutcome::Rejected { .. }
        | SubmitOutcome::Unreachable { .. } => {
            println!("{} {}", "❌".red(), controller.error_message().red().bold());
        }
    }
    println!();

    Ok(())
}

fn type_into(page: &MemoryDocument, id: &str, value: &str) -> Result<()> {
    page.get_element_by_id(id)
        .with_context(|| format!("login page has no #{id} field"))?
        .set_value(value);
    Ok(())
}

fn check_email(email: &str) {
    if is_valid_email(email.trim()) {
        println!("{} {}", "✅".green(), email.cyan());
    } else {
        println!("{} {} is not a valid e-mail", "❌".red(), email.cyan());
    }
}

/// Dispatches session inspection commands.
fn handle_session_action(config: &Config, action: SessionAction) -> Result<()> {
    let store = FileSessionStore::new(config.session_file.clone());

    match action {
        SessionAction::Show => {
            println!("{}", "📋 Session".bright_blue().bold());
            println!();

            let entries = store.entries()?;
            if entries.is_empty() {
                println!("{}", "  No session stored".yellow());
                println!();
                println!("  Log in with: {} login", "cargo run --".bright_cyan());
                return Ok(());
            }

            for (key, value) in &entries {
                println!("  {:<16} {}", key.bright_white().bold(), value.cyan());
            }
            println!();
        }
        SessionAction::Clear => {
            store.clear()?;
            println!("{}", "✅ Session cleared".green().bold());
        }
    }

    Ok(())
}
