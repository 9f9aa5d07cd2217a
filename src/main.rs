#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dailygoals_core::BackendConfig;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Backend settings, parsed before launch
static BACKEND_CONFIG: OnceLock<BackendConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dailygoals")
    })
}

/// Get the backend connection settings parsed at startup
pub fn get_backend_config() -> BackendConfig {
    BACKEND_CONFIG.get().cloned().unwrap_or_else(|| {
        BackendConfig::from_env().unwrap_or_else(|| BackendConfig {
            url: "http://127.0.0.1:54321".to_string(),
            key: String::new(),
        })
    })
}

/// Daily Goals - personal goal tracking
#[derive(Parser, Debug)]
#[command(name = "dailygoals-desktop")]
#[command(about = "Daily Goals - track personal goals with deadlines")]
struct Args {
    /// Data directory for local preferences (use different dirs for multiple profiles)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Base URL of the backend project
    #[arg(
        long,
        env = "DAILYGOALS_API_URL",
        default_value = "http://127.0.0.1:54321"
    )]
    api_url: String,

    /// Public API key of the backend project
    #[arg(long, env = "DAILYGOALS_API_KEY")]
    api_key: String,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dailygoals")
    });

    let _ = DATA_DIR.set(data_dir.clone());
    let _ = BACKEND_CONFIG.set(BackendConfig {
        url: args.api_url,
        key: args.api_key,
    });

    tracing::info!("Starting Daily Goals with data dir: {:?}", data_dir);

    // Phone-shaped window; the layout is portrait-first
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Daily Goals")
            .with_inner_size(dioxus::desktop::LogicalSize::new(420.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
