//! # Artmarket CLI
//!
//! Command-line front end for the Artmarket client.
//!
//! ```text
//! artmarket signin --email ada@example.com --password ...
//! artmarket marketplace --text harbour --category Painting --price 1000-5000
//! artmarket stats
//! artmarket signout
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use shared::{format_price, Role};

use artmarket_client::app::{HistoryNavigator, MarketplaceScreen, Navigator, Route};
use artmarket_client::config::ClientConfig;
use artmarket_client::filter::FilterCriteria;
use artmarket_client::services::api::{resources, ApiClient};
use artmarket_client::session::{FileStorage, SessionManager, SessionState, SessionStore};
use artmarket_client::ApiService;

#[derive(Debug, Parser)]
#[command(name = "artmarket", version, about = "Artmarket client")]
struct Cli {
    /// API base URL (overrides ARTMARKET_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Session file (overrides ARTMARKET_SESSION_FILE)
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in and remember the session
    Signin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// collector or artist
        #[arg(long, default_value = "collector")]
        role: Role,
    },
    /// Sign out and forget the session
    Signout,
    /// Show the signed-in user
    Whoami,
    /// Browse available listings
    Marketplace {
        /// Search title, artist and description
        #[arg(long)]
        text: Option<String>,
        /// Exact category name
        #[arg(long)]
        category: Option<String>,
        /// Price range: 0-1000, 1000-5000, 5000-10000, 10000- or any min-max
        #[arg(long)]
        price: Option<String>,
    },
    /// Dashboard figures for the signed-in user
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = artmarket_client::debug::init_logger();
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("Failed to load configuration")?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    if let Some(path) = cli.session_file {
        config.session_file = path;
    }
    config.validate()?;

    let store = Arc::new(SessionStore::new(Arc::new(FileStorage::new(&config.session_file))));
    let client = ApiClient::new(&config, Arc::clone(&store))?;
    let api: Arc<dyn ApiService> = Arc::new(client.clone());
    let navigator = Arc::new(HistoryNavigator::new());
    let manager = SessionManager::new(
        Arc::clone(&api),
        Arc::clone(&store),
        Arc::clone(&navigator) as Arc<dyn Navigator>,
    );
    manager.start();

    match cli.command {
        Command::Signin { email, password } => {
            let identity = manager.sign_in(&email, &password).await?;
            println!("Signed in as {} ({})", identity.name, identity.role);
            print_route(&navigator);
        }
        Command::Signup {
            name,
            email,
            password,
            role,
        } => {
            let response = manager.sign_up(&name, &email, &password, role).await?;
            println!("{}", response.message);
            print_route(&navigator);
        }
        Command::Signout => {
            manager.sign_out().await;
            println!("Signed out");
        }
        Command::Whoami => match store.state() {
            SessionState::Authenticated(identity) => {
                println!("{} <{}> ({}, id {})", identity.name, identity.email, identity.role, identity.id);
            }
            _ => println!("Not signed in"),
        },
        Command::Marketplace { text, category, price } => {
            require_route(&manager, Route::ArtistMarketplace)?;

            let mut screen = MarketplaceScreen::open(api);
            screen.load().await;
            if let Some(e) = screen.error.take() {
                return Err(e.into());
            }

            let mut criteria = FilterCriteria::new();
            if let Some(text) = text {
                criteria = criteria.with_text(text);
            }
            if let Some(category) = category {
                if !screen.categories.is_empty() && !screen.categories.iter().any(|c| c.name == category) {
                    tracing::warn!(category = %category, "Category not in the server's list");
                }
                criteria = criteria.with_category(category);
            }
            if let Some(price) = price {
                criteria = criteria.with_price_range(&price);
            }
            screen.criteria = criteria;

            let visible = screen.visible();
            if visible.is_empty() {
                println!("No artworks match.");
            }
            for artwork in &visible {
                println!(
                    "#{:<5} {:<32} {:<20} {:<14} {:>12}",
                    artwork.id,
                    artwork.title,
                    artwork.artist_name,
                    artwork.category_name,
                    format_price(artwork.price)
                );
            }
            let summary = screen.summary();
            println!(
                "\n{} shown, {} artists, total {}",
                summary.count,
                summary.distinct_artists,
                format_price(summary.total_value)
            );
        }
        Command::Stats => {
            let identity = manager.current_identity().context("Not signed in")?;
            let stats = match identity.role {
                Role::Collector => resources::dashboard_stats(&client).await?,
                Role::Artist => resources::artist_stats(&client).await?,
            };
            println!("Artworks:   {}", stats.total_artworks);
            println!("Artists:    {}", stats.total_artists);
            println!("Categories: {}", stats.total_categories);
            println!("Value:      {}", format_price(stats.total_value));
        }
    }

    Ok(())
}

fn require_route(manager: &SessionManager, route: Route) -> anyhow::Result<()> {
    let shown = manager.guard(route);
    if shown == Route::SignIn {
        bail!("Sign in first");
    }
    Ok(())
}

fn print_route(navigator: &HistoryNavigator) {
    if let Some(route) = navigator.current() {
        println!("Next: {route}");
    }
}
