use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root of the content collections (`projects/`, `certificates/`, ...).
    /// Empty means "not configured".
    pub content_root: PathBuf,

    /// Settings file path (path info only, no existence check)
    pub settings_path: PathBuf,

    /// Preferred UI language code as written in the file, e.g. `"id"`.
    pub language: String,

    /// Directory for rolling log files.
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys map to empty values. Wrong types are treated as missing.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            content_root: PathBuf::from(str_at(toml_value, "content", "root")),
            settings_path: PathBuf::from(str_at(toml_value, "storage", "settings_path")),
            language: str_at(toml_value, "general", "language").to_string(),
            log_dir: PathBuf::from(str_at(toml_value, "logging", "dir")),
        })
    }

    /// Create empty AppConfig (all empty values)
    /// 创建空的 AppConfig
    pub fn empty() -> Self {
        Self {
            content_root: PathBuf::new(),
            settings_path: PathBuf::new(),
            language: String::new(),
            log_dir: PathBuf::new(),
        }
    }

    /// Paths derived from a base data directory computed by the caller
    /// (e.g. through the `dirs` crate). The content root stays empty.
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            content_root: PathBuf::new(),
            settings_path: data_dir.join("settings.json"),
            language: String::new(),
            log_dir: data_dir.join("logs"),
        }
    }
}

fn str_at<'a>(value: &'a toml::Value, table: &str, key: &str) -> &'a str {
    value
        .get(table)
        .and_then(|t| t.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
}
