pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;
pub const DEFAULT_USER_AGENT: &str = concat!("user-fetch/", env!("CARGO_PKG_VERSION"));

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "user-fetch")]
#[command(about = "Fetch a single user record from a JSON REST endpoint")]
pub struct CliConfig {
    /// User identifier (numeric or string)
    #[arg(default_value = "1")]
    pub user_id: crate::core::UserId,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Load source settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Print the full record as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(skip)]
    pub headers: HashMap<String, String>,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn user_agent(&self) -> Option<&str> {
        None
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    // 指定設定檔時連線參數全由檔案提供，命令列的值不參與驗證
    fn validate(&self) -> Result<()> {
        match &self.config {
            Some(path) => crate::utils::validation::validate_non_empty_string("config", path),
            None => {
                validate_url("base_url", &self.base_url)?;
                validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)
            }
        }
    }
}

/// 不依賴 CLI 的簡單設定，供程式庫使用者直接建構
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: Option<String>,
    pub headers: HashMap<String, String>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}

impl ConfigProvider for SourceSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

impl Validate for SourceSettings {
    fn validate(&self) -> Result<()> {
        validate_url("source.base_url", &self.base_url)?;
        validate_range(
            "source.timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        if let Some(agent) = &self.user_agent {
            crate::utils::validation::validate_non_empty_string("source.user_agent", agent)?;
        }
        for (name, value) in &self.headers {
            crate::utils::validation::validate_header("source.headers", name, value)?;
        }
        crate::utils::validation::validate_unique_headers("source.headers", &self.headers)?;
        Ok(())
    }
}
