//! Dynamic share: update the payload behind a link without changing it.
//!
//! Run with: cargo run --example dynamic_update

use anyhow::{Context, Result};
use sealink::{MemoryRecordStore, ShareClient, ShareConfig, ShareMode, ShareOptions};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let client = ShareClient::new(ShareConfig::new("https://sealink.example/view"))
        .with_store(Arc::new(MemoryRecordStore::new()));

    let created = client
        .create_share(
            b"status: launching at 09:00",
            ShareOptions {
                mode: ShareMode::Dynamic,
                ..Default::default()
            },
        )
        .await?;
    let pointer_id = created
        .pointer_id
        .context("dynamic shares always return a pointer id")?;

    println!("link:\n  {}", created.url);
    let payload = client.receive_share(&created.url).await?;
    println!("before update: {}", String::from_utf8_lossy(&payload));

    // The link stays the same; only the creator holding the pointer id
    // can repoint it
    client
        .update_dynamic_share(&created.url, &pointer_id, b"status: delayed to 14:00")
        .await?;

    let payload = client.receive_share(&created.url).await?;
    println!("after update:  {}", String::from_utf8_lossy(&payload));

    Ok(())
}
