use crate::domain::model::UserId;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> Option<&str>;
    fn headers(&self) -> &HashMap<String, String>;
}

#[async_trait]
pub trait UserSource: Send + Sync {
    /// 失敗時回傳錯誤，讓呼叫端能分辨失敗種類
    async fn try_fetch_user_data(&self, user_id: UserId) -> Result<serde_json::Value>;

    /// 任何失敗都記錄後轉成 `None`
    async fn fetch_user_data(&self, user_id: UserId) -> Option<serde_json::Value> {
        match self.try_fetch_user_data(user_id).await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::error!(category = ?e.category(), "Failed to fetch user data: {}", e);
                None
            }
        }
    }
}
