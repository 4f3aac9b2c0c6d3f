/// Route permission diff report rendering.
pub mod report;
/// Embedded reference tables: route → allowed roles, route → page name.
pub mod table;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The frontend's current route → allowed-roles configuration, as exported
/// from the router guard setup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteConfig(pub BTreeMap<String, Vec<String>>);

impl RouteConfig {
    /// Parse a configuration from its JSON export.
    pub fn load_from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid route configuration JSON: {e}"))
    }

    /// Roles currently allowed on `path`; empty when the route is absent.
    pub fn roles_for(&self, path: &str) -> &[String] {
        self.0.get(path).map_or(&[], Vec::as_slice)
    }
}
