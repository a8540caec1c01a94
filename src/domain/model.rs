use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 使用者識別碼，可以是數字或字串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Numeric(id) => write!(f, "{}", id),
            UserId::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId::Numeric(id)
    }
}

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        UserId::Numeric(u64::from(id))
    }
}

// 負數沒有對應的數字 id，保留原樣當作字串段落
impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        u64::try_from(id)
            .map(UserId::Numeric)
            .unwrap_or_else(|_| UserId::Text(id.to_string()))
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        UserId::from(i64::from(id))
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId::Text(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        UserId::Text(id)
    }
}

impl std::str::FromStr for UserId {
    type Err = std::convert::Infallible;

    // 只有能原樣還原的數字才視為 Numeric，"007"、"+5" 保留原文
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u64>() {
            Ok(id) if id.to_string() == s => Ok(UserId::Numeric(id)),
            _ => Ok(UserId::Text(s.to_string())),
        }
    }
}

/// 使用者記錄的唯讀視圖；未列出的欄位保留在 `extra`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Option<serde_json::Value>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl User {
    pub fn from_value(value: &serde_json::Value) -> crate::utils::error::Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }
}
