use raro_gate::{AccessGrant, GrantId};

/// Grant context for a gated request.
///
/// Inserted by the gate middleware after the grant has been checked; handlers
/// behind the gate can rely on it being present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantContext {
    grant: AccessGrant,
}

impl GrantContext {
    pub fn new(grant: AccessGrant) -> Self {
        Self { grant }
    }

    pub fn grant_id(&self) -> GrantId {
        self.grant.id
    }

    pub fn grant(&self) -> &AccessGrant {
        &self.grant
    }
}
