//! Workspace smoke test: every share mode through the umbrella crate

use sealink::{
    MemoryRecordStore, ShareClient, ShareConfig, ShareMode, ShareOptions, StaticPassword,
};
use std::sync::Arc;

#[tokio::test]
async fn test_each_mode_end_to_end() {
    let client = ShareClient::new(ShareConfig::new("https://sealink.example/view"))
        .with_store(Arc::new(MemoryRecordStore::new()))
        .with_password_prompt(Arc::new(StaticPassword("hunter2".to_string())));

    for mode in [ShareMode::Simple, ShareMode::Cloud, ShareMode::Dynamic] {
        let created = client
            .create_share(
                b"cross-crate smoke payload",
                ShareOptions {
                    mode,
                    password: Some("hunter2".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let payload = client.receive_share(&created.url).await.unwrap();
        assert_eq!(payload, b"cross-crate smoke payload", "mode {mode}");
    }
}

#[tokio::test]
async fn test_crypto_layer_reachable_through_facade() {
    let dek = sealink::crypto::DekKey::generate();
    let (nonce, ct) = sealink::crypto::encrypt(&dek, b"direct", None).unwrap();
    assert_eq!(
        sealink::crypto::decrypt(&dek, &nonce, &ct, None).unwrap(),
        b"direct"
    );
}
