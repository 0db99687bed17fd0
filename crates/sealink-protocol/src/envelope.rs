//! Envelope protocol: create and receive flows
//!
//! Creation generates a fresh DEK per share, seals the payload (and, in
//! indirect modes, the indirection identifier) with it, optionally wraps
//! the DEK under a password-derived KEK, and hands the result to the URL
//! codec. Receipt runs the same steps in reverse, with cheap checks
//! (format, expiry) ordered before any decryption so a wrong link never
//! pays for a slow password derivation.

use crate::compress::{compress, decompress};
use crate::params::{KeyMaterial, ShareLinkParams, EXPIRY_FORMAT};
use crate::{Result, ShareClient, ShareError, ShareMode};
use bytes::Bytes;
use chrono::{DateTime, NaiveDate, Utc};
use sealink_crypto::{self as crypto, encoding, DekKey, Nonce, Salt, WrappedKey, NONCE_SIZE};
use sealink_store::RecordId;

/// Options for creating a share
#[derive(Clone, Debug, Default)]
pub struct ShareOptions {
    /// Share mode; defaults to simple
    pub mode: ShareMode,
    /// Password-protect the link
    pub password: Option<String>,
    /// Expiry date, enforced at UTC day granularity and bound as AAD
    pub expiry: Option<NaiveDate>,
}

/// Result of creating a share
#[derive(Clone, Debug)]
pub struct CreatedShare {
    /// The link to hand out; shortened when a shortener is attached and
    /// succeeds, otherwise the full canonical URL
    pub url: String,
    /// The canonical parameters the link encodes
    pub params: ShareLinkParams,
    /// Dynamic mode only: the pointer-record id. The creator must retain
    /// it to perform updates; it is not recoverable from the link.
    pub pointer_id: Option<RecordId>,
}

impl ShareClient {
    /// Create a share link for `payload`.
    pub async fn create_share(&self, payload: &[u8], options: ShareOptions) -> Result<CreatedShare> {
        let mode = options.mode;
        // Fail on a missing store before doing any crypto work
        if mode.uses_store() {
            self.require_store()?;
        }
        let dek = DekKey::generate();
        let aad = expiry_aad(options.expiry);

        let body = if mode.compresses_payload() {
            compress(payload)?
        } else {
            payload.to_vec()
        };
        let (payload_nonce, payload_ct) = crypto::encrypt(&dek, &body, aad.as_deref())?;

        let (embedded, link_nonce, pointer_id) = match mode {
            ShareMode::Simple => (encoding::to_base64url(&payload_ct), payload_nonce, None),
            ShareMode::Cloud => {
                let store = self.require_store()?;
                let data_id = store
                    .create(record_bytes(&payload_nonce, payload_ct))
                    .await
                    .map_err(ShareError::store("create"))?;
                let (nonce, ct) =
                    crypto::encrypt(&dek, data_id.as_str().as_bytes(), aad.as_deref())?;
                (encoding::to_base64url(&ct), nonce, None)
            }
            ShareMode::Dynamic => {
                let store = self.require_store()?;
                let data_id = store
                    .create(record_bytes(&payload_nonce, payload_ct))
                    .await
                    .map_err(ShareError::store("create"))?;
                // The pointer record holds the data id as plain text; its
                // own id is what the link seals.
                let pointer_id = store
                    .create(Bytes::from(data_id.as_str().to_string()))
                    .await
                    .map_err(ShareError::store("create"))?;
                let (nonce, ct) =
                    crypto::encrypt(&dek, pointer_id.as_str().as_bytes(), aad.as_deref())?;
                (encoding::to_base64url(&ct), nonce, Some(pointer_id))
            }
        };

        // Size-limited modes embed the payload in the link itself, so the
        // cap applies to the encoded form and is enforced before any
        // collaborator sees the share.
        if mode.size_limited() && embedded.len() > self.config.max_encoded_payload {
            return Err(ShareError::PayloadTooLarge {
                encoded_len: embedded.len(),
                max: self.config.max_encoded_payload,
            });
        }

        let (key, salt) = match &options.password {
            Some(password) => {
                let salt = Salt::random();
                let kek = crypto::derive_key(password, &salt, &self.config.kdf)?;
                let wrapped = WrappedKey::wrap(&dek, &kek, aad.as_deref())?;
                (KeyMaterial::Wrapped(wrapped.encode()), Some(salt.to_base64url()))
            }
            None => (KeyMaterial::Plain(dek.to_base64url()), None),
        };

        let params = ShareLinkParams {
            mode,
            key,
            salt,
            expiry: options.expiry,
            iv: link_nonce.to_base64url(),
            payload: Some(embedded),
        };
        let long_url = params.to_url(&self.config.base_url);

        let url = match &self.shortener {
            Some(shortener) => match shortener.shorten(&long_url).await {
                Ok(short) => short,
                Err(e) => {
                    tracing::warn!(error = %e, "url shortener failed, using long url");
                    long_url
                }
            },
            None => long_url,
        };

        tracing::debug!(%mode, password = options.password.is_some(), "share created");
        Ok(CreatedShare {
            url,
            params,
            pointer_id,
        })
    }

    /// Receive a share link and recover its payload.
    ///
    /// On completion or failure, asks the history-scrub collaborator to
    /// remove sensitive parameters from browsing history; scrub failures
    /// are logged and never mask the primary result.
    pub async fn receive_share(&self, url: &str) -> Result<Vec<u8>> {
        let result = self.receive_inner(url).await;
        if let Some(scrub) = &self.history_scrub {
            if let Err(e) = scrub.scrub(url).await {
                tracing::warn!(error = %e, "history scrub failed");
            }
        }
        result
    }

    async fn receive_inner(&self, url: &str) -> Result<Vec<u8>> {
        let params = ShareLinkParams::parse(url)
            .ok_or_else(|| ShareError::InvalidLink("missing key or iv".to_string()))?;

        // Fail fast on expiry, before any decryption or slow derivation
        if let Some(expiry) = params.expiry {
            if is_expired(expiry, Utc::now()) {
                return Err(ShareError::ExpiredLink);
            }
        }

        // Indirect modes cannot proceed without a store; surface the
        // misconfiguration before prompting for a password
        if params.mode.uses_store() {
            self.require_store()?;
        }

        let aad = expiry_aad(params.expiry);
        let dek = self.reconstruct_dek(&params, aad.as_deref()).await?;

        let embedded = encoding::from_base64_any(params.require_payload()?)
            .map_err(|_| ShareError::InvalidLink("malformed payload encoding".to_string()))?;
        let nonce = Nonce::from_base64(&params.iv)
            .map_err(|_| ShareError::InvalidLink("malformed iv".to_string()))?;

        let first = crypto::decrypt(&dek, &nonce, &embedded, aad.as_deref())?;

        let payload = match params.mode {
            ShareMode::Simple => decompress(&first)?,
            ShareMode::Cloud => {
                let data_id = identifier_from(first)?;
                let store = self.require_store()?;
                let record = store
                    .read(&data_id)
                    .await
                    .map_err(ShareError::store("read"))?;
                open_record(&dek, &record, aad.as_deref())?
            }
            ShareMode::Dynamic => {
                let pointer_id = identifier_from(first)?;
                let store = self.require_store()?;
                // Pointer content is the current data id, stored as text
                let pointer = store
                    .read(&pointer_id)
                    .await
                    .map_err(ShareError::store("read"))?;
                let data_id = identifier_from(pointer.to_vec())?;
                let record = store
                    .read(&data_id)
                    .await
                    .map_err(ShareError::store("read"))?;
                open_record(&dek, &record, aad.as_deref())?
            }
        };

        tracing::debug!(mode = %params.mode, "share received");
        Ok(payload)
    }

    /// Rebuild the DEK from the link's key material, prompting for a
    /// password when a salt is present. Runs the slow derivation at most
    /// once per attempt.
    pub(crate) async fn reconstruct_dek(
        &self,
        params: &ShareLinkParams,
        aad: Option<&[u8]>,
    ) -> Result<DekKey> {
        match (&params.key, &params.salt) {
            (KeyMaterial::Wrapped(wrapped), Some(salt_b64)) => {
                let password = match &self.password_prompt {
                    Some(prompt) => prompt.prompt().await,
                    None => None,
                }
                .ok_or(ShareError::PasswordRequired)?;

                let salt = Salt::from_base64(salt_b64)
                    .map_err(|_| ShareError::InvalidLink("malformed salt".to_string()))?;
                let kek = crypto::derive_key(&password, &salt, &self.config.kdf)?;
                let wrapped = WrappedKey::parse(wrapped)
                    .map_err(|_| ShareError::InvalidLink("malformed wrapped key".to_string()))?;
                Ok(wrapped.unwrap_key(&kek, aad)?)
            }
            (KeyMaterial::Plain(key), _) => DekKey::from_base64(key)
                .map_err(|_| ShareError::InvalidLink("malformed key".to_string())),
            (KeyMaterial::Wrapped(_), None) => Err(ShareError::InvalidLink(
                "wrapped key without salt".to_string(),
            )),
        }
    }
}

/// AAD derivation: the expiry date string, when an expiry is set
pub(crate) fn expiry_aad(expiry: Option<NaiveDate>) -> Option<Vec<u8>> {
    expiry.map(|d| d.format(EXPIRY_FORMAT).to_string().into_bytes())
}

/// A link with expiry `D` is valid through `D` 23:59:59.999 UTC and
/// expired from `D+1` 00:00:00.000
pub(crate) fn is_expired(expiry: NaiveDate, now: DateTime<Utc>) -> bool {
    now.date_naive() > expiry
}

/// Stored record layout: 12-byte nonce followed by ciphertext
fn record_bytes(nonce: &Nonce, ciphertext: Vec<u8>) -> Bytes {
    let mut buf = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    buf.extend_from_slice(nonce.as_bytes());
    buf.extend_from_slice(&ciphertext);
    Bytes::from(buf)
}

/// Seal a payload into the stored-record layout
pub(crate) fn seal_record(dek: &DekKey, payload: &[u8], aad: Option<&[u8]>) -> Result<Bytes> {
    let (nonce, ciphertext) = crypto::encrypt(dek, payload, aad)?;
    Ok(record_bytes(&nonce, ciphertext))
}

/// Open a stored record; truncated records count as tampering
pub(crate) fn open_record(dek: &DekKey, record: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
    if record.len() < NONCE_SIZE {
        return Err(ShareError::DecryptionFailed);
    }
    let nonce = Nonce::from_bytes(&record[..NONCE_SIZE]).map_err(|_| ShareError::DecryptionFailed)?;
    Ok(crypto::decrypt(dek, &nonce, &record[NONCE_SIZE..], aad)?)
}

/// Decode an indirection identifier decrypted from a link or read from a
/// pointer record
fn identifier_from(bytes: Vec<u8>) -> Result<RecordId> {
    let text = String::from_utf8(bytes)
        .map_err(|_| ShareError::InvalidLink("identifier is not valid text".to_string()))?;
    Ok(RecordId::from(text))
}
