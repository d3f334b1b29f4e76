//! 扫描结果
use crate::hexcodec::encode_hex_upper;

/// 命中的窗口
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// 窗口首字节在文件中的偏移
    pub offset: u64,
    /// 窗口内容（原始字节）
    pub window: Vec<u8>,
}

impl Match {
    /// 大写十六进制形式
    pub fn hex(&self) -> String {
        encode_hex_upper(&self.window)
    }
}

/// 一次扫描的结果；错误经 `Result` 的 Err 分支传递
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Matched(Match),
    NoMatch,
}

impl ScanOutcome {
    pub fn as_match(&self) -> Option<&Match> {
        match self {
            ScanOutcome::Matched(m) => Some(m),
            ScanOutcome::NoMatch => None,
        }
    }
}
