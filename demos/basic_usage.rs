//! Basic usage example
//!
//! Fetches the current user's profile, friends and picture URL.
//!
//! The access token is read from `GRAPH_ACCESS_TOKEN`; the rest of the
//! configuration comes from `GRAPH_API_*` variables (see `graph_client::config`).
//!
//! Usage:
//!   GRAPH_ACCESS_TOKEN=... GRAPH_API_ENABLED=1 cargo run --example basic_usage

use anyhow::Context;
use graph_client::prelude::*;
use graph_client::types::{FriendsPage, UserProfile};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = std::env::var("GRAPH_ACCESS_TOKEN").context("GRAPH_ACCESS_TOKEN not set")?;

    let api = GraphApi::from_env()?;
    if !api.is_enabled() {
        eprintln!("Warning: GRAPH_API_ENABLED is not set; requests will be skipped.");
    }
    let client = api.client(token)?;

    let me = client.me(Some(&["id", "name", "email"])).await?;
    match me.envelope() {
        Some(envelope) if envelope.is_success() => {
            let profile: UserProfile = envelope.json()?;
            println!("Profile: {:?} ({:?})", profile.name, profile.id);
        }
        Some(envelope) => match envelope.graph_error() {
            Some(err) => println!("Graph error {:?}: {}", err.code, err.message),
            None => println!("HTTP {}: {}", envelope.status_code, envelope.original_body),
        },
        None => println!("Disabled: {}", me.to_json()),
    }

    if let Some(envelope) = client.friends().await?.envelope() {
        if envelope.is_success() {
            let page: FriendsPage = envelope.json()?;
            println!("Friends using the app: {}", page.data.len());
        }
    }

    match client.profile_photo_redirect_url(None).await? {
        Some(url) => println!("Picture: {url}"),
        None => println!("Picture: unavailable"),
    }

    Ok(())
}
