//! Dynamic pointer layer: updating a link's target after creation
//!
//! A dynamic link seals a pointer-record id; the pointer's content names
//! the current data record. Updating stores a new data record and repoints
//! the pointer, so the link (and its embedded, encrypted pointer id) never
//! changes. Data records themselves are immutable.

use crate::envelope::{expiry_aad, seal_record};
use crate::{Result, ShareClient, ShareError, ShareLinkParams, ShareMode};
use bytes::Bytes;
use sealink_store::RecordId;

impl ShareClient {
    /// Replace the payload behind an existing dynamic link.
    ///
    /// `pointer_id` is the value returned at creation; it is required and
    /// sufficient for updates, and cannot be recovered from the link. The
    /// link itself is needed to rebuild the DEK (including the password
    /// prompt when the share is protected).
    ///
    /// If storing the new data record succeeds but repointing fails, the
    /// new record is orphaned; there is no rollback.
    pub async fn update_dynamic_share(
        &self,
        url: &str,
        pointer_id: &RecordId,
        new_payload: &[u8],
    ) -> Result<()> {
        let params = ShareLinkParams::parse(url)
            .ok_or_else(|| ShareError::InvalidLink("missing key or iv".to_string()))?;
        if params.mode != ShareMode::Dynamic {
            return Err(ShareError::InvalidLink(
                "only dynamic links can be updated".to_string(),
            ));
        }

        let aad = expiry_aad(params.expiry);
        let dek = self.reconstruct_dek(&params, aad.as_deref()).await?;

        // Fresh IV for the new record; the AAD stays that of the share
        let record = seal_record(&dek, new_payload, aad.as_deref())?;
        let store = self.require_store()?;
        let data_id = store
            .create(record)
            .await
            .map_err(ShareError::store("create"))?;
        store
            .update(pointer_id, Bytes::from(data_id.as_str().to_string()))
            .await
            .map_err(ShareError::store("update"))?;

        tracing::debug!(%pointer_id, %data_id, "dynamic share repointed");
        Ok(())
    }
}
