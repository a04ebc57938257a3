//! Caller identity port.
//!
//! Identity is an explicit input to every dashboard call rather than ambient
//! request state, so the services can be driven directly in tests.

use uuid::Uuid;

/// The resolved caller of a request.
///
/// Opaque beyond equality: the core never inspects the id, it only compares
/// it against post ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    /// No credentials, or credentials that did not resolve.
    Anonymous,
    /// An authenticated account.
    User(Uuid),
}

impl Caller {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Caller::Anonymous)
    }
}

/// Resolves the current caller. Side-effect-free and synchronous from the
/// core's perspective; the HTTP layer resolves bearer tokens before the
/// service is invoked.
pub trait IdentityProvider: Send + Sync {
    fn resolve_caller(&self) -> Caller;
}
