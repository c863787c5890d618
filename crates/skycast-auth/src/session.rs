//! Cached sign-in state.
//!
//! Handlers read the cached identity; only [`Session::refresh`] hits the
//! endpoint. Earlier dashboard iterations re-derived login state in every
//! script; this is the single session abstraction that replaces them.

use parking_lot::RwLock;

use crate::gate::{AuthError, AuthGate, UserIdentity};

pub struct Session {
    gate: AuthGate,
    identity: RwLock<Option<UserIdentity>>,
}

impl Session {
    pub fn new(gate: AuthGate) -> Self {
        Self {
            gate,
            identity: RwLock::new(None),
        }
    }

    /// Re-check the identity endpoint and cache the answer.
    ///
    /// On failure the cache is left untouched and the error is returned for
    /// the caller to surface.
    pub async fn refresh(&self) -> Result<Option<UserIdentity>, AuthError> {
        let identity = self.gate.current_user().await?;
        *self.identity.write() = identity.clone();
        Ok(identity)
    }

    /// Last-known identity, without touching the network.
    pub fn current(&self) -> Option<UserIdentity> {
        self.identity.read().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.read().is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("signed_in", &self.is_signed_in())
            .finish()
    }
}
