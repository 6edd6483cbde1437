//! Session lifecycle against a running FEX backend.
//!
//! Reads `FEX_API_URL`, `FEX_EMAIL` and `FEX_PASSWORD` (a `.env` file works).
//!
//! Run: cargo run --example session

use std::env;
use std::sync::Arc;

use fex_sdk::prelude::*;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let client = FexClient::builder().from_env().build()?;
    println!("backend: {}", client.base_url());

    let (tx, mut routes) = mpsc::unbounded_channel();
    let ctx = AppContext::with_client(client, Arc::new(tx));
    tokio::spawn(async move {
        while let Some(route) = routes.recv().await {
            println!("navigate -> {route}");
        }
    });

    // Picks up an existing session if the cookie jar had one; a fresh
    // process never does, so this lands on /login.
    ctx.session().mount().settled().await;

    let (Ok(email), Ok(password)) = (env::var("FEX_EMAIL"), env::var("FEX_PASSWORD")) else {
        println!("set FEX_EMAIL and FEX_PASSWORD to log in");
        return Ok(());
    };

    match ctx.session().login(&email, &password).await {
        Ok(user) => {
            println!("logged in as {} ({})", user.username, user.email);
            for asset in &user.assets {
                println!("  {:>8} {}", asset.symbol, asset.amount);
            }
        }
        Err(e) => {
            match e.rejection() {
                Some(kind) => println!("login rejected: {kind}"),
                None => println!("login failed: {e}"),
            }
            return Ok(());
        }
    }

    ctx.session().logout().await;
    println!("logged out, is_logged_in = {}", ctx.session().is_logged_in());
    Ok(())
}
