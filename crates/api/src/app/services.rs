use std::sync::Arc;

use chrono::Utc;

use raro_catalog::{seed, Catalog};
use raro_gate::{GrantStore, InviteAllowlist};

use crate::app::pages::{BasicPages, PageRenderer};
use crate::config::ApiConfig;

/// Shared state handed to every handler.
///
/// Built once at startup and passed around as `Arc<AppServices>`; nothing in
/// here is reachable any other way.
pub struct AppServices {
    allowlist: InviteAllowlist,
    grants: GrantStore,
    catalog: Catalog,
    renderer: Arc<dyn PageRenderer>,
}

impl AppServices {
    pub fn allowlist(&self) -> &InviteAllowlist {
        &self.allowlist
    }

    pub fn grants(&self) -> &GrantStore {
        &self.grants
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn renderer(&self) -> &dyn PageRenderer {
        self.renderer.as_ref()
    }
}

/// Wire up services with the stock page renderer.
pub fn build_services(config: &ApiConfig) -> AppServices {
    build_services_with(config, Arc::new(BasicPages))
}

/// Wire up services around a caller-supplied renderer.
pub fn build_services_with(config: &ApiConfig, renderer: Arc<dyn PageRenderer>) -> AppServices {
    let allowlist = match &config.invite_codes {
        Some(codes) => {
            let list = InviteAllowlist::new(codes.iter().cloned());
            if list.is_empty() {
                tracing::warn!("configured invitation codes all normalized away; keeping built-in list");
                InviteAllowlist::with_default_codes()
            } else {
                list
            }
        }
        None => InviteAllowlist::with_default_codes(),
    };

    let grants = GrantStore::new(config.grant_ttl);
    let catalog = Catalog::new(seed::luxury_collection(Utc::now()), seed::launch_feed());

    tracing::info!(
        products = catalog.len(),
        invite_codes = allowlist.len(),
        grant_ttl_hours = config.grant_ttl.num_hours(),
        "showcase services ready"
    );

    AppServices {
        allowlist,
        grants,
        catalog,
        renderer,
    }
}
