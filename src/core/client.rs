use crate::config::{SourceSettings, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::core::{ConfigProvider, UserId, UserSource};
use crate::utils::error::{FetchError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// 對 `{base_url}/users/{id}` 發出單次 GET 的 HTTP 客戶端
#[derive(Debug, Clone)]
pub struct UserClient {
    base_url: Url,
    client: Client,
}

impl UserClient {
    /// 以預設逾時與 User-Agent 建立客戶端
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_config(&SourceSettings {
            base_url: base_url.to_string(),
            ..SourceSettings::default()
        })
    }

    /// 指向 jsonplaceholder 的預設客戶端
    pub fn jsonplaceholder() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in config.headers() {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                FetchError::InvalidConfigValueError {
                    field: "headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| FetchError::InvalidConfigValueError {
                    field: format!("headers.{}", name),
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
            // header 名稱不分大小寫，重複時無法決定要送哪個值
            if headers.contains_key(&header_name) {
                return Err(FetchError::InvalidConfigValueError {
                    field: "headers".to_string(),
                    value: name.clone(),
                    reason: "Duplicate header name (names are case-insensitive)".to_string(),
                });
            }
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .user_agent(config.user_agent().unwrap_or(DEFAULT_USER_AGENT))
            .default_headers(headers)
            .build()?;

        tracing::debug!(
            "Configured client for {} (timeout {}s, {} extra headers)",
            config.base_url(),
            config.timeout_seconds(),
            config.headers().len()
        );

        Ok(Self {
            base_url: parse_base_url(config.base_url())?,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 組出使用者資源的 URL，id 會編碼成單一路徑段落
    pub fn user_url(&self, user_id: &UserId) -> Result<Url> {
        let segment = user_id.to_string();
        // 空字串、"." 與 ".." 會被當成路徑操作，指到集合或上層資源
        if matches!(segment.as_str(), "" | "." | "..") {
            return Err(FetchError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: format!("'{}' is not a valid user id path segment", segment),
            });
        }

        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FetchError::InvalidUrl {
                    url: self.base_url.to_string(),
                    reason: "URL cannot be used as a base".to_string(),
                })?;
            segments
                .pop_if_empty()
                .push("users")
                .push(&segment);
        }
        Ok(url)
    }

    pub async fn fetch_user_data(&self, user_id: impl Into<UserId>) -> Option<serde_json::Value> {
        UserSource::fetch_user_data(self, user_id.into()).await
    }

    pub async fn try_fetch_user_data(
        &self,
        user_id: impl Into<UserId>,
    ) -> Result<serde_json::Value> {
        self.request_user(&user_id.into()).await
    }

    async fn request_user(&self, user_id: &UserId) -> Result<serde_json::Value> {
        let url = self.user_url(user_id)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let data: serde_json::Value = serde_json::from_slice(&body)?;
        Ok(data)
    }
}

#[async_trait::async_trait]
impl UserSource for UserClient {
    async fn try_fetch_user_data(&self, user_id: UserId) -> Result<serde_json::Value> {
        self.request_user(&user_id).await
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    crate::utils::validation::validate_url("base_url", base_url)?;
    Url::parse(base_url).map_err(|e| FetchError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })
}
