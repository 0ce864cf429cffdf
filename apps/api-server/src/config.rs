//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Backing file for posts. `None` keeps posts in memory only.
    pub posts_file: Option<PathBuf>,
    /// Root for static assets and the SPA `index.html`.
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // An explicitly empty POSTS_FILE disables persistence.
        let posts_file = match lookup("POSTS_FILE") {
            Some(path) if path.is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
            None => Some(PathBuf::from("posts.json")),
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            posts_file,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.posts_file, Some(PathBuf::from("posts.json")));
        assert_eq!(config.static_dir, PathBuf::from("."));
    }

    #[test]
    fn test_port_override_and_bad_port() {
        assert_eq!(config_from(&[("PORT", "8081")]).port, 8081);
        assert_eq!(config_from(&[("PORT", "not-a-port")]).port, 3000);
    }

    #[test]
    fn test_empty_posts_file_disables_persistence() {
        assert_eq!(config_from(&[("POSTS_FILE", "")]).posts_file, None);
        assert_eq!(
            config_from(&[("POSTS_FILE", "/var/lib/voyage/posts.json")]).posts_file,
            Some(PathBuf::from("/var/lib/voyage/posts.json"))
        );
    }
}
