/// Configuration management for the flowcanvas server
///
/// Handles server binding, storage paths, and session cookie parameters.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Storage configuration
    pub storage: StorageConfig,
    /// Session cookie configuration
    pub session: SessionConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
    /// Directory holding the builder page and canvas assets
    pub static_dir: String,
}

/// Storage paths for workflow documents and the tool catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory where saved workflow documents land, one JSON file each
    pub workflows_dir: String,
    /// Path to the tool catalog resource (JSON array of tool definitions)
    pub tools_path: String,
}

/// Session cookie signing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Master secret for signing the session cookie. Must be at least 32
    /// bytes. The hardcoded default is insecure and only suitable for
    /// development; override via SESSION_SECRET in any real deployment.
    pub secret: String,
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("FLOWCANVAS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("FLOWCANVAS_PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .unwrap_or(5000),
                static_dir: std::env::var("FLOWCANVAS_STATIC_DIR")
                    .unwrap_or_else(|_| "static".to_string()),
            },
            storage: StorageConfig {
                workflows_dir: std::env::var("FLOWCANVAS_WORKFLOWS_DIR")
                    .unwrap_or_else(|_| "workflows".to_string()),
                tools_path: std::env::var("FLOWCANVAS_TOOLS_PATH")
                    .unwrap_or_else(|_| "config/tools.json".to_string()),
            },
            session: SessionConfig {
                secret: std::env::var("SESSION_SECRET")
                    .unwrap_or_else(|_| "dev-secret-key-change-in-production".to_string()),
            },
        }
    }
}
