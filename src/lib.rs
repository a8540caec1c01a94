pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, SourceSettings};
pub use core::client::UserClient;
pub use domain::model::{User, UserId};
pub use domain::ports::{ConfigProvider, UserSource};
pub use utils::error::{ErrorCategory, FetchError, Result};
