//! CLI operator tool for nadash-web.
//!
//! Talks to the analytics backend the same way the web server does, which
//! makes it handy for checking credentials and connectivity from a shell.
//!
//! # Usage
//!
//! ```bash
//! # Exchange credentials for a token (prompts for missing values)
//! cargo run --bin nadash-admin -- login -u admin
//!
//! # Fetch the dashboard payload with a token
//! cargo run --bin nadash-admin -- dashboard --token eyJhbGciOi...
//!
//! # Check backend reachability and show the effective configuration
//! cargo run --bin nadash-admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; `API_URL` selects the backend.

use nadash_web::application::services::{AuthService, DashboardService, ProxyOutcome};
use nadash_web::config::{self, Config};
use nadash_web::domain::identity::DisplayIdentity;
use nadash_web::infrastructure::backend::HttpBackend;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use std::sync::Arc;

/// CLI tool for nadash-web operators.
#[derive(Parser)]
#[command(name = "nadash-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exchange credentials for an access token
    Login {
        #[arg(short, long)]
        username: Option<String>,

        /// Password (prompted without echo if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Fetch the dashboard payload
    Dashboard {
        /// Access token issued by the backend
        #[arg(short, long)]
        token: String,
    },

    /// Check backend connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let backend = connect(&config)?;

    match cli.command {
        Commands::Login { username, password } => login(backend, username, password).await?,
        Commands::Dashboard { token } => dashboard(backend, &token).await?,
        Commands::Check => check(backend, &config).await?,
    }

    Ok(())
}

fn connect(config: &Config) -> Result<Arc<HttpBackend>> {
    let client = HttpBackend::build_client(config.backend_timeout())
        .context("Failed to build HTTP client")?;
    Ok(Arc::new(HttpBackend::new(
        client,
        &config.api_url,
        &config.api_url,
    )))
}

/// Prompts for missing credentials and prints the issued token.
async fn login(
    backend: Arc<HttpBackend>,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    println!("{}", "🔑 Backend Login".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let service = AuthService::new(backend);
    let token = match service.login(&username, &password).await {
        Ok(token) => token,
        Err(failure) => {
            println!("{} {}", "❌".red(), failure.to_string().red().bold());
            anyhow::bail!("Login failed with status {}", failure.status());
        }
    };

    let identity = DisplayIdentity::from_token(&token);

    println!("{}", "✅ Login successful".green().bold());
    println!();
    println!("  User:    {}", identity.name.cyan());
    if let Some(expires_at) = identity.expires_at {
        println!(
            "  Expires: {}",
            expires_at
                .format("%Y-%m-%d %H:%M UTC")
                .to_string()
                .bright_black()
        );
    }
    println!("  Token:   {}", token.bright_yellow());
    println!();

    Ok(())
}

/// Prints the dashboard payload as pretty JSON.
async fn dashboard(backend: Arc<HttpBackend>, token: &str) -> Result<()> {
    let service = DashboardService::new(backend);

    match service.proxy(Some(token)).await {
        ProxyOutcome::Relay(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        ProxyOutcome::Unauthorized | ProxyOutcome::Expired => {
            println!("{}", "⚠️  Token rejected by backend".yellow());
            anyhow::bail!("Token rejected")
        }
        ProxyOutcome::Offline => {
            println!("{}", "❌ Backend offline or unreachable".red());
            anyhow::bail!("Backend offline")
        }
    }
}

/// Pings the backend root and prints the configuration in use.
async fn check(backend: Arc<HttpBackend>, config: &Config) -> Result<()> {
    println!("{}", "🔍 Checking backend connection...".bright_blue());

    let service = DashboardService::new(backend);
    let result = service.backend_reachable().await;

    println!();
    println!("  Backend:  {}", config.api_url.bright_white());
    println!("  Session:  {}", config.session_strategy.to_string().bright_white());
    println!("  Listen:   {}", config.listen_addr.bright_white());
    println!();

    match result {
        Ok(()) => {
            println!("{}", "✅ Backend reachable".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌".red(), e.to_string().red());
            Err(e).context("Backend check failed")
        }
    }
}
