//! Token holder with grant-on-demand.
//!
//! Manages the token lifecycle for one client instance:
//! - Validity check against the cached token (no I/O when valid)
//! - Client-credentials grant on demand, when so configured
//! - Revocation, clearing the slot only on success
//!
//! There is no background refresh and no grant lock: concurrent
//! `ensure_valid_token` calls on a shared holder may both reach the grantor,
//! and the last write wins. Refresh is idempotent from the server's
//! perspective, so redundant grants only cost a request.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::traits::TokenGrantor;
use super::types::TokenSet;
use super::AuthError;

/// One mutable access-token slot plus the policy for filling it.
pub struct TokenHolder {
    grantor: Arc<dyn TokenGrantor>,
    slot: RwLock<Option<TokenSet>>,
    auto_grant: bool,
}

impl TokenHolder {
    /// Holder that self-mints channel tokens via the client-credentials
    /// grant whenever the slot is empty or expired (Messaging API).
    pub fn with_client_credentials(grantor: Arc<dyn TokenGrantor>) -> Self {
        Self {
            grantor,
            slot: RwLock::new(None),
            auto_grant: true,
        }
    }

    /// Holder whose token must be supplied externally (Social API: only an
    /// authorization-code exchange can mint a user-scoped token).
    pub fn external_only(grantor: Arc<dyn TokenGrantor>) -> Self {
        Self {
            grantor,
            slot: RwLock::new(None),
            auto_grant: false,
        }
    }

    /// Return the held token if valid, otherwise grant a fresh one.
    ///
    /// A valid held token is returned unchanged with no grantor call. On
    /// grant failure the slot is left as it was (absent or expired) and the
    /// error is surfaced once; no retry happens here.
    ///
    /// # Errors
    /// `AuthError::NotAuthenticated` for external-only holders without a
    /// valid token; grant errors otherwise.
    pub async fn ensure_valid_token(&self) -> Result<TokenSet, AuthError> {
        if let Some(token) = self.slot.read().await.as_ref() {
            if !token.is_expired(0) {
                return Ok(token.clone());
            }
            debug!("held access token is expired");
        }

        if !self.auto_grant {
            return Err(AuthError::NotAuthenticated);
        }

        let fresh = match self.grantor.client_credentials_grant().await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "client-credentials grant failed");
                return Err(err);
            }
        };
        info!("obtained channel access token via client-credentials grant");

        *self.slot.write().await = Some(fresh.clone());
        Ok(fresh)
    }

    /// Unconditionally replace the held token (e.g. after an
    /// authorization-code exchange performed outside this component).
    pub async fn set_token(&self, token: TokenSet) {
        *self.slot.write().await = Some(token);
    }

    /// Snapshot of the held token; may be expired. Callers needing
    /// freshness use [`Self::ensure_valid_token`].
    pub async fn token(&self) -> Option<TokenSet> {
        self.slot.read().await.clone()
    }

    /// Revoke the held token.
    ///
    /// Clears the slot only when the revocation endpoint accepted the
    /// request; on any failure the slot is left untouched, so there is no
    /// partial revocation state.
    ///
    /// # Errors
    /// `AuthError::NotAuthenticated` when no token is held; revocation
    /// errors otherwise.
    pub async fn revoke(&self) -> Result<(), AuthError> {
        let token = self
            .slot
            .read()
            .await
            .clone()
            .ok_or(AuthError::NotAuthenticated)?;

        self.grantor.revoke_token(&token.access_token).await?;
        *self.slot.write().await = None;
        info!("access token revoked");
        Ok(())
    }
}
