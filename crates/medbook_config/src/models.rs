// --- File: crates/medbook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Booking API Config ---
// Holds everything needed to address the remote booking service.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    /// Root URL prefix under which all booking operations are addressed,
    /// e.g. `https://abc123.execute-api.us-east-1.amazonaws.com/prod`.
    pub base_url: String,
    /// Request timeout in seconds. Falls back to 30 when absent.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    // The API section is optional on purpose: a fresh deployment has no
    // endpoint yet, and the client must degrade to a configuration
    // warning instead of calling the network.
    #[serde(default)]
    pub api: Option<ApiConfig>,
}
