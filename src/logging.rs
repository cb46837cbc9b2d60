// ==========================================
// 献血管理系统 - 日志初始化
// ==========================================
// 基于 tracing-subscriber，级别由 RUST_LOG 控制
// 宿主页面可能已安装订阅者，库内一律 try_init，不 panic
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 默认过滤规则: 本库 info，HTTP 栈只保留告警
pub const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn,hyper_util=warn";

/// 测试过滤规则: 本库 debug（判定与请求细节）
const TEST_FILTER: &str = "blood_donation_portal=debug,reqwest=info";

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// 安装全局日志订阅者
///
/// # 环境变量
/// - RUST_LOG: 覆盖 DEFAULT_FILTER
///   例如: RUST_LOG=blood_donation_portal::client=trace
///
/// # 返回
/// - Err: 已存在全局订阅者
///
/// # 示例
/// ```no_run
/// use blood_donation_portal::logging;
/// logging::init().ok();
/// ```
pub fn init() -> InitResult {
    fmt()
        .with_env_filter(env_filter_or(DEFAULT_FILTER))
        .with_target(true)
        .with_line_number(true)
        .try_init()
}

/// 测试用订阅者，输出交给测试框架捕获；重复调用无副作用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(TEST_FILTER))
        .with_test_writer()
        .try_init();
}
