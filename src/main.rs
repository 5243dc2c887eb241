//! Kiro API probe
//!
//! Exploratory client for the CodeWhisperer runtime API. Sends a fixed
//! sequence of requests with a bearer token and prints each response for
//! manual inspection.

mod api;
mod core;
mod models;

use crate::api::driver::run_probes;
use crate::api::probes::Prober;
use crate::core::client::KiroClient;
use crate::core::config::{Config, TokenSource};
use crate::core::constants::BANNER_WIDTH;
use crate::core::logging::init_logging;
use anyhow::Context;
use tracing::error;

#[tokio::main]
async fn main() {
    // Check for --help flag
    if std::env::args().skip(1).any(|arg| arg == "--help") {
        print_help();
        return;
    }

    print_startup_banner();

    // Resolve the access token
    let config = match Config::from_args(std::env::args().skip(1)) {
        Some(cfg) => cfg,
        None => {
            print_token_instructions();
            return;
        }
    };

    init_logging(&config.log_level);

    if config.token_source == TokenSource::Argument {
        println!(
            "\n✅ Using token from command-line argument (length: {})",
            config.access_token.chars().count()
        );
    }

    let client = match KiroClient::new(config).context("Failed to create HTTP client") {
        Ok(client) => client,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    run_probes(&Prober::new(client)).await;
}

/// Print startup banner
fn print_startup_banner() {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("🚀 Kiro API probe");
    println!("{}", "=".repeat(BANNER_WIDTH));
}

/// Explain how to supply a token
fn print_token_instructions() {
    println!("\n⚠️  No access token set!");
    println!("You can get a token by:");
    println!("1. Copying an account's access token from Kiro Account Manager");
    println!("2. Passing it as the first argument: kiro-api-probe <token>");
}

/// Print help message
fn print_help() {
    println!("Kiro API probe v0.1.0");
    println!();
    println!("Usage: kiro-api-probe [TOKEN]");
    println!();
    println!("Arguments:");
    println!("  TOKEN     Bearer access token (unless compiled in)");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Probed endpoints, in order:");
    println!("  GET  /ListAvailableModels (no filter, AMAZON, ANTHROPIC)");
    println!("  POST /listAvailableSubscriptions");
    println!("  POST /CreateSubscriptionToken (no type, KIRO_PRO)");
    println!("  POST /ListFeatureEvaluations");
    println!("  POST /updateUsageLimits");
    println!("  POST /GetProfile");
    println!();
    println!("Environment variables:");
    println!("  RUST_LOG - Log filter for diagnostics on stderr (default: info)");
}
