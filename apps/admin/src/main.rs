//! # store-admin
//!
//! Entry point for the storefront administration CLI.
//!
//! ## Responsibilities
//! 1. Initialize tracing
//! 2. Load configuration from the environment
//! 3. Dispatch the requested command

mod commands;
mod config;
mod screen;

use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use store_client::StoreClient;

use crate::config::ConfigState;

/// Initializes the tracing subscriber.
///
/// Respects `RUST_LOG` when set; defaults to info globally with debug
/// for the workspace crates.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,store_core=debug,store_client=debug,store_admin=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_usage() {
    eprintln!("Usage: store-admin <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  products                              List the product catalog");
    eprintln!("  bundles                               List the bundle catalog");
    eprintln!("  purchase <item>...                    Buy items; <item> is");
    eprintln!("                                        product:<id>[=<qty>] or bundle:<id>[=<qty>]");
    eprintln!("  checkout <product-id> [<bundle>...]   Buy one product plus its bundles;");
    eprintln!("                                        <bundle> is <id>[=<qty>]");
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = ConfigState::from_env();
    info!(base_url = %config.base_url, "Starting store-admin");

    let client = StoreClient::new(config.base_url.clone());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let ok = match args.split_first() {
        Some((command, rest)) => match command.as_str() {
            "products" => commands::list_products(&client, &config).await,
            "bundles" => commands::list_bundles(&client, &config).await,
            "purchase" => commands::purchase(client, config, rest).await,
            "checkout" => match rest.split_first() {
                Some((product_id, bundle_args)) => {
                    commands::product_checkout(client, config, product_id, bundle_args).await
                }
                None => {
                    print_usage();
                    false
                }
            },
            _ => {
                print_usage();
                false
            }
        },
        None => {
            print_usage();
            false
        }
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
