//! Access grants issued when an invitation code is accepted.
//!
//! A grant is held server-side and referenced by an opaque [`GrantId`]; a
//! client presenting an id the store does not know (or knows to be expired)
//! has no access, full stop. There is no second source of truth.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// ─────────────────────────────────────────────────────────────────────────────
// Grant ID
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque identifier of an access grant.
///
/// This is the only value that leaves the server; it carries no claims and
/// means nothing without the store that issued it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrantId(Uuid);

impl GrantId {
    /// Mint a fresh identifier (UUIDv7, time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GrantId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for GrantId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for GrantId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<GrantId> for Uuid {
    fn from(value: GrantId) -> Self {
        value.0
    }
}

impl FromStr for GrantId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(Self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Access grant
// ─────────────────────────────────────────────────────────────────────────────

/// Proof that a client presented a valid invitation code, with its validity
/// window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
    /// Opaque identifier referenced by the client.
    pub id: GrantId,

    /// The invitation code that unlocked access, in canonical (uppercase) form.
    pub code: String,

    /// When the grant was issued.
    pub issued_at: DateTime<Utc>,

    /// When the grant stops being honored.
    pub expires_at: DateTime<Utc>,
}

impl AccessGrant {
    /// Whether the grant's validity window has closed at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Why a presented grant id was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GrantRejection {
    #[error("grant is not known to this store")]
    Unknown,

    #[error("grant has expired")]
    Expired,
}

// ─────────────────────────────────────────────────────────────────────────────
// Grant store
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory store of active grants.
///
/// Expired grants are evicted lazily: presenting one removes it and reports
/// [`GrantRejection::Expired`]; a later probe of the same id sees
/// [`GrantRejection::Unknown`].
#[derive(Debug)]
pub struct GrantStore {
    ttl: Duration,
    grants: Mutex<HashMap<GrantId, AccessGrant>>,
}

impl GrantStore {
    /// How long a grant is honored unless configured otherwise.
    pub const DEFAULT_TTL_HOURS: i64 = 24;

    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            grants: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_default_ttl() -> Self {
        Self::new(Duration::hours(Self::DEFAULT_TTL_HOURS))
    }

    /// The validity window applied to newly issued grants.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a grant for an already-validated invitation code.
    ///
    /// Validation belongs to [`crate::InviteAllowlist`]; the store records
    /// whatever code it is handed.
    pub fn issue(&self, code: impl Into<String>, now: DateTime<Utc>) -> AccessGrant {
        let grant = AccessGrant {
            id: GrantId::new(),
            code: code.into(),
            issued_at: now,
            expires_at: now + self.ttl,
        };
        self.grants
            .lock()
            .unwrap()
            .insert(grant.id, grant.clone());
        grant
    }

    /// Look up a presented grant id, evicting it if its window has closed.
    pub fn check(&self, id: GrantId, now: DateTime<Utc>) -> Result<AccessGrant, GrantRejection> {
        let mut grants = self.grants.lock().unwrap();
        let grant = grants.get(&id).ok_or(GrantRejection::Unknown)?;
        if grant.is_expired(now) {
            grants.remove(&id);
            return Err(GrantRejection::Expired);
        }
        Ok(grant.clone())
    }

    /// Drop a grant immediately (logout). Unknown ids are a no-op.
    pub fn revoke(&self, id: GrantId) {
        self.grants.lock().unwrap().remove(&id);
    }

    /// Number of grants currently held, expired or not.
    pub fn len(&self) -> usize {
        self.grants.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.lock().unwrap().is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> GrantStore {
        GrantStore::with_default_ttl()
    }

    #[test]
    fn issued_grant_is_honored_within_ttl() {
        let store = store();
        let now = Utc::now();
        let grant = store.issue("LUXE", now);

        let checked = store
            .check(grant.id, now + Duration::hours(23))
            .expect("grant should still be honored");
        assert_eq!(checked, grant);
        assert_eq!(checked.code, "LUXE");
    }

    #[test]
    fn grant_window_matches_configured_ttl() {
        let store = GrantStore::new(Duration::hours(2));
        let now = Utc::now();
        let grant = store.issue("ELITE", now);

        assert_eq!(grant.issued_at, now);
        assert_eq!(grant.expires_at, now + Duration::hours(2));
    }

    #[test]
    fn unknown_id_is_rejected() {
        let store = store();
        let err = store.check(GrantId::new(), Utc::now()).unwrap_err();
        assert_eq!(err, GrantRejection::Unknown);
    }

    #[test]
    fn grant_expires_at_window_edge() {
        let store = store();
        let now = Utc::now();
        let grant = store.issue("LUXE", now);

        // One tick before the edge still passes; the edge itself does not.
        let just_before = grant.expires_at - Duration::seconds(1);
        assert!(store.check(grant.id, just_before).is_ok());

        let err = store.check(grant.id, grant.expires_at).unwrap_err();
        assert_eq!(err, GrantRejection::Expired);
    }

    #[test]
    fn expired_grant_is_evicted_on_first_sight() {
        let store = store();
        let now = Utc::now();
        let grant = store.issue("LUXE", now);
        let later = now + Duration::hours(25);

        assert_eq!(store.check(grant.id, later), Err(GrantRejection::Expired));
        assert_eq!(store.len(), 0);
        // The evicted id now reads as never-issued.
        assert_eq!(store.check(grant.id, later), Err(GrantRejection::Unknown));
    }

    #[test]
    fn revoked_grant_is_rejected_immediately() {
        let store = store();
        let now = Utc::now();
        let grant = store.issue("MYSTIQUE", now);

        store.revoke(grant.id);
        assert_eq!(store.check(grant.id, now), Err(GrantRejection::Unknown));
    }

    #[test]
    fn revoking_an_unknown_id_is_a_noop() {
        let store = store();
        store.revoke(GrantId::new());
        assert!(store.is_empty());
    }

    #[test]
    fn grants_are_independent() {
        let store = store();
        let now = Utc::now();
        let first = store.issue("LUXE", now);
        let second = store.issue("ELITE", now);
        assert_ne!(first.id, second.id);

        store.revoke(first.id);
        assert!(store.check(second.id, now).is_ok());
    }

    #[test]
    fn grant_id_round_trips_through_display() {
        let id = GrantId::new();
        let parsed: GrantId = id.to_string().parse().expect("display output should parse");
        assert_eq!(parsed, id);
    }

    #[test]
    fn malformed_grant_id_does_not_parse() {
        assert!("not-a-grant-id".parse::<GrantId>().is_err());
        assert!("".parse::<GrantId>().is_err());
    }
}
