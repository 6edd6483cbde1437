//! List markets and recent trades from a running FEX backend.
//!
//! Run: cargo run --example markets -- [SYMBOL]

use std::env;

use fex_sdk::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let client = FexClient::builder().from_env().build()?;
    let store = std::sync::Arc::new(MarketStore::new(std::sync::Arc::new(client.clone())));

    let count = store.bootstrap().await?;
    println!("{count} markets");
    for m in store.markets().unwrap_or_default() {
        println!(
            "  {:<12} price {}..{} ({}dp)  size {}..{} ({}dp)",
            m.symbol,
            m.min_price,
            m.max_price,
            m.price_precision,
            m.min_order_size,
            m.max_order_size,
            m.quantity_precision
        );
    }

    let symbol = env::args().nth(1).unwrap_or_else(|| "SOL-USDC".to_string());
    let Some(market) = store.find(&symbol) else {
        println!("no market {symbol}");
        return Ok(());
    };

    let mut history = TradeHistory::new(market.symbol.clone(), 20);
    history.replace(client.trades().recent(Some(market.symbol.as_str()), Some(20)).await?);
    println!("\nlast {} trades on {}", history.len(), market.symbol.display_pair());
    for t in history.trades() {
        println!(
            "  {} {:<4} {} @ {}",
            t.timestamp.format("%H:%M:%S"),
            t.side,
            t.quantity,
            t.price
        );
    }
    Ok(())
}
