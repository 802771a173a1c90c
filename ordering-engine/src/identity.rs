//! Identity contract
//!
//! The engine only needs a stable owner identifier to scope submissions
//! and the past-orders query. Credential and session mechanics live in
//! the application layer.

/// Supplies the current user's stable identifier, if signed in.
pub trait IdentitySource: Send + Sync {
    fn current_user_id(&self) -> Option<String>;
}

/// Fixed identity, for tests and single-user embeddings.
pub struct FixedIdentity(pub Option<String>);

impl FixedIdentity {
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self(Some(user_id.into()))
    }

    pub fn signed_out() -> Self {
        Self(None)
    }
}

impl IdentitySource for FixedIdentity {
    fn current_user_id(&self) -> Option<String> {
        self.0.clone()
    }
}
