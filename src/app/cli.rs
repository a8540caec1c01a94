use crate::config::CliConfig;
use crate::core::client::UserClient;
use crate::core::User;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use crate::TomlConfig;
use std::io::Write;

/// 取得記錄並輸出
pub const EXIT_OK: i32 = 0;
/// 結果為空（錯誤已記錄）
pub const EXIT_EMPTY: i32 = 1;
/// 設定無效
pub const EXIT_CONFIG: i32 = 2;

/// 執行一次 CLI 流程，結果寫到 `out`，回傳程序結束碼
pub async fn run<W: Write>(config: &CliConfig, out: &mut W) -> i32 {
    tracing::info!("Starting user-fetch CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return EXIT_CONFIG;
    }

    let client = match build_client(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(category = ?e.category(), "❌ Failed to set up client: {}", e);
            return EXIT_CONFIG;
        }
    };

    let Some(data) = client.fetch_user_data(config.user_id.clone()).await else {
        return EXIT_EMPTY;
    };

    let written = if config.json {
        let pretty = serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string());
        writeln!(out, "{}", pretty)
    } else {
        match User::from_value(&data).ok().and_then(|user| user.name) {
            Some(name) => writeln!(out, "User name: {}", name),
            None => {
                tracing::warn!("Record for user {} has no name field", config.user_id);
                Ok(())
            }
        }
    };

    if let Err(e) = written {
        tracing::error!("❌ Failed to write output: {}", e);
        return EXIT_EMPTY;
    }

    EXIT_OK
}

// 指定設定檔時，以檔案內的 [source] 取代命令列的連線參數
fn build_client(config: &CliConfig) -> Result<UserClient> {
    match &config.config {
        Some(path) => {
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            UserClient::from_config(&file_config)
        }
        None => UserClient::from_config(config),
    }
}
