// ==========================================
// 献血管理系统 - 库存调整 API
// ==========================================
// 职责: 提交库存调整，展示新单位数或错误提示
// 红线: 单次尝试，不重试、不退避
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::client::PortalBackend;
use crate::domain::inventory::InventoryAdjustment;
use crate::i18n;
use crate::presentation::{InventoryView, Notifier};
use std::sync::Arc;
use tracing::instrument;

pub struct InventoryApi {
    backend: Arc<dyn PortalBackend>,
    notifier: Arc<dyn Notifier>,
    view: Arc<dyn InventoryView>,
    locale: String,
}

impl InventoryApi {
    pub fn new(
        backend: Arc<dyn PortalBackend>,
        notifier: Arc<dyn Notifier>,
        view: Arc<dyn InventoryView>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            notifier,
            view,
            locale: locale.into(),
        }
    }

    /// 提交库存调整
    ///
    /// # 返回
    /// - Ok(units): 更新后的单位数（已写入页面并提示成功）
    /// - Err(ApiError::BackendRejected): 服务端返回 success=false（已提示错误原因）
    /// - Err(ApiError::Client): 请求失败（已提示通用错误）
    ///
    /// 所有失败都已通过 Notifier 告知用户，返回值供调用方记录
    #[instrument(skip(self))]
    pub async fn adjust(&self, adjustment: InventoryAdjustment) -> ApiResult<Option<i64>> {
        let response = match self
            .backend
            .update_inventory(adjustment.inventory_id, adjustment.units_delta)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "库存更新请求失败");
                self.notifier
                    .alert(&i18n::t_in(&self.locale, "inventory.request_failed", &[]));
                return Err(ApiError::Client(e));
            }
        };

        if !response.success {
            let reason = response.error_message().unwrap_or_default().to_string();
            tracing::warn!(reason = %reason, "服务端拒绝库存更新");
            self.notifier.alert(&i18n::t_in(
                &self.locale,
                "inventory.update_failed",
                &[("error", &reason)],
            ));
            return Err(ApiError::BackendRejected(reason));
        }

        let units = response.resolved_units();
        if let Some(units) = units {
            self.view.set_units(adjustment.inventory_id, units);
        }
        self.notifier
            .alert(&i18n::t_in(&self.locale, "inventory.update_success", &[]));
        tracing::info!(units = ?units, "库存更新成功");
        Ok(units)
    }
}
