// ==========================================
// 献血管理系统 - 用户提示
// ==========================================
// 职责: 阻塞式用户提示接口 + 提示框自动关闭
// 红线: 不持有全局定时器，由调用方持有 JoinHandle
// ==========================================

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// 用户提示接口（浏览器中对应 alert / 页面提示框）
pub trait Notifier: Send + Sync {
    /// 阻塞式提示
    fn alert(&self, message: &str);

    /// 关闭页面上的提示框
    fn dismiss_alerts(&self);
}

/// 延迟后关闭提示框
///
/// 返回的任务可被 abort 以取消关闭
pub fn schedule_auto_dismiss(notifier: Arc<dyn Notifier>, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        tracing::debug!(delay_ms = delay.as_millis() as u64, "自动关闭提示框");
        notifier.dismiss_alerts();
    })
}
