//! Invitation gating for the showcase: the allow-list of invitation codes and
//! the in-memory store of access grants issued against them.
//!
//! This crate is transport-agnostic. How a grant id travels between client and
//! server (cookies, headers, anything else) is the caller's concern.

/// Invitation-code allow-list and validation.
pub mod allowlist;

/// Access grants: identifiers, lifetime, and the grant store.
pub mod grant;

pub use allowlist::InviteAllowlist;
pub use grant::{AccessGrant, GrantId, GrantRejection, GrantStore};
