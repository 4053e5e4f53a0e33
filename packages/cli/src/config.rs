use pagecraft_content::WebsiteContent;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// Pagecraft configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// JSON file holding the draft and live content copies
    #[serde(default = "default_content_file")]
    pub content_file: String,

    /// Output directory for compiled pages
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_content_file() -> String {
    "content.json".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn content_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.content_file)
    }

    pub fn out_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_file: default_content_file(),
            out_dir: default_out_dir(),
        }
    }
}

/// On-disk shape of the content file: both lifecycle copies, side by side.
/// A demo artifact, not a storage engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub draft: WebsiteContent,
    pub live: WebsiteContent,
}

impl ContentDocument {
    pub fn seed() -> Self {
        let content = WebsiteContent::default();
        Self {
            draft: content.clone(),
            live: content,
        }
    }

    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "contentFile": "site-content.json",
            "outDir": "public"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.content_file, "site-content.json");
        assert_eq!(config.out_dir, "public");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.content_file, "content.json");
        assert_eq!(config.out_dir, "dist");
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config.content_file, "content.json");
    }

    #[test]
    fn test_content_document_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");

        let doc = ContentDocument::seed();
        std::fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();

        let loaded = ContentDocument::load(&path).unwrap();
        assert_eq!(loaded.draft, doc.draft);
        assert_eq!(loaded.live, doc.live);
    }
}
