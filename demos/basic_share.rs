//! Create and receive share links in each mode.
//!
//! Run with: cargo run --example basic_share

use anyhow::Result;
use chrono::{Duration, Utc};
use sealink::{MemoryRecordStore, ShareClient, ShareConfig, ShareMode, ShareOptions, StaticPassword};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let client = ShareClient::new(ShareConfig::new("https://sealink.example/view"))
        .with_store(Arc::new(MemoryRecordStore::new()))
        .with_password_prompt(Arc::new(StaticPassword("swordfish".to_string())));

    // Simple mode: the ciphertext travels inside the link itself
    let created = client
        .create_share(b"the cake is a lie", ShareOptions::default())
        .await?;
    println!("simple link:\n  {}", created.url);
    let payload = client.receive_share(&created.url).await?;
    println!("  recovered: {}", String::from_utf8_lossy(&payload));

    // Cloud mode with a password and an expiry a week out
    let created = client
        .create_share(
            b"meet at the usual place",
            ShareOptions {
                mode: ShareMode::Cloud,
                password: Some("swordfish".to_string()),
                expiry: Some(Utc::now().date_naive() + Duration::days(7)),
            },
        )
        .await?;
    println!("cloud link (password-protected, expires in 7 days):\n  {}", created.url);
    let payload = client.receive_share(&created.url).await?;
    println!("  recovered: {}", String::from_utf8_lossy(&payload));

    Ok(())
}
