// ==========================================
// 献血管理系统 - 门户后端接口 Trait
// ==========================================
// 职责: 定义库存更新与计数接口（不包含实现）
// 实现者: HttpPortalBackend；测试中使用内存实现
// 红线: 单次调用，不重试
// ==========================================

use crate::client::error::ClientResult;
use crate::domain::inventory::InventoryUpdateResponse;
use crate::domain::notification::CountResponse;
use async_trait::async_trait;

#[async_trait]
pub trait PortalBackend: Send + Sync {
    /// 提交库存更新
    ///
    /// # 返回
    /// - Ok(InventoryUpdateResponse): 服务端业务结果（success 可能为 false）
    /// - Err(ClientError): 网络失败或响应无法解析
    async fn update_inventory(
        &self,
        inventory_id: i64,
        units: i64,
    ) -> ClientResult<InventoryUpdateResponse>;

    /// 献血者未读通知数
    async fn notification_count(&self) -> ClientResult<CountResponse>;

    /// 医院待处理献血申请数
    async fn pending_donation_count(&self) -> ClientResult<CountResponse>;
}
