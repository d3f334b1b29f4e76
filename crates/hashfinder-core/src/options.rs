//! 扫描选项与统计信息（模块）
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 扫描选项
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// 取消标志：每轮窗口比较之间检查一次，置位后扫描以 Cancelled 结束
    pub cancel: Option<Arc<AtomicBool>>,
}

impl ScanOptions {
    pub fn with_cancel(cancel: Arc<AtomicBool>) -> Self {
        Self { cancel: Some(cancel) }
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|c| c.load(Ordering::Relaxed))
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// 已计算摘要的窗口数
    pub windows_evaluated: u64,
    /// 从输入读取的总字节数
    pub bytes_read: u64,
}
