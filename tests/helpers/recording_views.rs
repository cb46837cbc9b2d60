// ==========================================
// 记录型页面元素 - 用于集成测试
// ==========================================

use blood_donation_portal::domain::{BadgeKind, ChartKind};
use blood_donation_portal::presentation::{
    BadgeSink, ChartConfig, ChartRenderer, InventoryView, Notifier,
};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub alerts: Mutex<Vec<String>>,
    pub dismissed: Mutex<usize>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn dismiss_alerts(&self) {
        *self.dismissed.lock().unwrap() += 1;
    }
}

#[derive(Debug, Default)]
pub struct RecordingBadges {
    pub badges: Mutex<Vec<(BadgeKind, String)>>,
}

impl RecordingBadges {
    pub fn badges(&self) -> Vec<(BadgeKind, String)> {
        self.badges.lock().unwrap().clone()
    }
}

impl BadgeSink for RecordingBadges {
    fn set_badge(&self, kind: BadgeKind, text: &str) {
        self.badges.lock().unwrap().push((kind, text.to_string()));
    }
}

#[derive(Debug, Default)]
pub struct RecordingInventoryView {
    pub units: Mutex<Vec<(i64, i64)>>,
}

impl RecordingInventoryView {
    pub fn units(&self) -> Vec<(i64, i64)> {
        self.units.lock().unwrap().clone()
    }
}

impl InventoryView for RecordingInventoryView {
    fn set_units(&self, inventory_id: i64, units: i64) {
        self.units.lock().unwrap().push((inventory_id, units));
    }
}

/// 记录渲染过的图表类型；fail 为 true 时模拟渲染失败
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub rendered: Mutex<Vec<ChartKind>>,
    pub fail: bool,
}

impl RecordingRenderer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn rendered(&self) -> Vec<ChartKind> {
        self.rendered.lock().unwrap().clone()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, chart: &ChartConfig) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("canvas not found");
        }
        self.rendered.lock().unwrap().push(chart.kind);
        Ok(())
    }
}
