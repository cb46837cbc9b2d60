// ==========================================
// Mock 门户后端 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use blood_donation_portal::client::{ClientError, ClientResult, PortalBackend};
use blood_donation_portal::domain::{CountResponse, InventoryUpdateResponse};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// 预设的库存更新结果
#[derive(Debug, Clone)]
pub enum InventoryOutcome {
    Respond(InventoryUpdateResponse),
    Unavailable,
}

/// 预设的计数结果（None 表示请求失败）
#[derive(Debug)]
pub struct MockBackend {
    pub inventory: InventoryOutcome,
    pub notifications: Option<i64>,
    pub pending: Option<i64>,
    pub inventory_calls: Mutex<Vec<(i64, i64)>>,
    pub notification_calls: AtomicUsize,
    pub pending_calls: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            inventory: InventoryOutcome::Respond(InventoryUpdateResponse {
                success: true,
                units: Some(0),
                ..Default::default()
            }),
            notifications: Some(0),
            pending: Some(0),
            inventory_calls: Mutex::new(Vec::new()),
            notification_calls: AtomicUsize::new(0),
            pending_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_inventory(mut self, outcome: InventoryOutcome) -> Self {
        self.inventory = outcome;
        self
    }

    pub fn with_counts(mut self, notifications: Option<i64>, pending: Option<i64>) -> Self {
        self.notifications = notifications;
        self.pending = pending;
        self
    }

    fn count(value: Option<i64>) -> ClientResult<CountResponse> {
        value
            .map(|count| CountResponse { count })
            .ok_or_else(|| ClientError::Unavailable("connection refused".to_string()))
    }
}

#[async_trait]
impl PortalBackend for MockBackend {
    async fn update_inventory(
        &self,
        inventory_id: i64,
        units: i64,
    ) -> ClientResult<InventoryUpdateResponse> {
        self.inventory_calls
            .lock()
            .unwrap()
            .push((inventory_id, units));
        match &self.inventory {
            InventoryOutcome::Respond(response) => Ok(response.clone()),
            InventoryOutcome::Unavailable => {
                Err(ClientError::Unavailable("connection refused".to_string()))
            }
        }
    }

    async fn notification_count(&self) -> ClientResult<CountResponse> {
        self.notification_calls.fetch_add(1, Ordering::SeqCst);
        Self::count(self.notifications)
    }

    async fn pending_donation_count(&self) -> ClientResult<CountResponse> {
        self.pending_calls.fetch_add(1, Ordering::SeqCst);
        Self::count(self.pending)
    }
}
