// ==========================================
// 献血管理系统 - 仪表盘 API
// ==========================================
// 职责: 页面加载时轮询一次计数接口，更新角标
// 规则: count > 0 才展示；失败只记日志，不打扰用户
// ==========================================

use crate::client::{ClientResult, PortalBackend};
use crate::domain::notification::CountResponse;
use crate::domain::types::{BadgeKind, PortalRole};
use crate::presentation::BadgeSink;
use std::sync::Arc;
use tracing::instrument;

/// 单个角标的加载结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeUpdate {
    pub kind: BadgeKind,
    /// None: 请求失败
    pub count: Option<i64>,
    /// 是否写入了角标
    pub shown: bool,
}

pub struct DashboardApi {
    backend: Arc<dyn PortalBackend>,
    badges: Arc<dyn BadgeSink>,
}

impl DashboardApi {
    pub fn new(backend: Arc<dyn PortalBackend>, badges: Arc<dyn BadgeSink>) -> Self {
        Self { backend, badges }
    }

    /// 页面加载: 按角色轮询对应计数接口（各一次）
    #[instrument(skip(self))]
    pub async fn load(&self, role: PortalRole) -> Vec<BadgeUpdate> {
        match role {
            PortalRole::Donor => {
                let result = self.backend.notification_count().await;
                vec![self.apply(BadgeKind::Notifications, result)]
            }
            PortalRole::Hospital => {
                let result = self.backend.pending_donation_count().await;
                vec![self.apply(BadgeKind::PendingDonations, result)]
            }
            PortalRole::Admin => Vec::new(),
        }
    }

    /// 页面同时有两个角标时并发轮询
    pub async fn load_all(&self) -> Vec<BadgeUpdate> {
        let (notifications, pending) = futures::join!(
            self.backend.notification_count(),
            self.backend.pending_donation_count()
        );
        vec![
            self.apply(BadgeKind::Notifications, notifications),
            self.apply(BadgeKind::PendingDonations, pending),
        ]
    }

    fn apply(&self, kind: BadgeKind, result: ClientResult<CountResponse>) -> BadgeUpdate {
        match result {
            Ok(response) => {
                let text = response.badge_text();
                if let Some(text) = &text {
                    self.badges.set_badge(kind, text);
                }
                BadgeUpdate {
                    kind,
                    count: Some(response.count),
                    shown: text.is_some(),
                }
            }
            Err(e) => {
                tracing::error!(badge = %kind, error = %e, "计数接口请求失败");
                BadgeUpdate {
                    kind,
                    count: None,
                    shown: false,
                }
            }
        }
    }
}
