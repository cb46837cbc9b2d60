// ==========================================
// 献血管理系统 - HTTP 门户后端
// ==========================================
// 接口:
// - POST {base}/hospital/inventory/update/{id}   (表单 units=<n>)
// - GET  {base}/donor/notifications/count
// - GET  {base}/hospital/donations/pending/count
// ==========================================
// 服务端用 400/500 + JSON 报告业务失败，非 2xx 时仍尝试解析响应体
// ==========================================

use crate::client::backend::PortalBackend;
use crate::client::error::{ClientError, ClientResult};
use crate::config::PortalConfig;
use crate::domain::inventory::InventoryUpdateResponse;
use crate::domain::notification::CountResponse;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::instrument;

const CSRF_HEADER: &str = "X-CSRFToken";

pub struct HttpPortalBackend {
    client: reqwest::Client,
    base_url: String,
    csrf_token: Option<String>,
}

impl HttpPortalBackend {
    /// 根据客户端配置创建
    pub fn new(config: &PortalConfig) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder().timeout(config.request_timeout());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
            csrf_token: config.csrf_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<T>(&body) {
            Ok(value) => Ok(value),
            Err(e) if body.trim().is_empty() && !status.is_success() => {
                tracing::debug!(error = %e, "响应体为空");
                Err(ClientError::HttpStatus {
                    status: status.as_u16(),
                })
            }
            Err(e) => {
                tracing::warn!(status = status.as_u16(), error = %e, "响应体无法解析");
                Err(ClientError::UnexpectedResponse {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    async fn get_count(&self, path: &str) -> ClientResult<CountResponse> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl PortalBackend for HttpPortalBackend {
    #[instrument(skip(self))]
    async fn update_inventory(
        &self,
        inventory_id: i64,
        units: i64,
    ) -> ClientResult<InventoryUpdateResponse> {
        let mut request = self
            .client
            .post(self.url(&format!("/hospital/inventory/update/{}", inventory_id)))
            .form(&[("units", units.to_string())]);

        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn notification_count(&self) -> ClientResult<CountResponse> {
        self.get_count("/donor/notifications/count").await
    }

    async fn pending_donation_count(&self) -> ClientResult<CountResponse> {
        self.get_count("/hospital/donations/pending/count").await
    }
}
