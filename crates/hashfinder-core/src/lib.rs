//! 哈希反查核心库
//!
//! 设计要点：
//! - 以固定长度窗口逐字节滑过文件内容，对每个窗口独立计算摘要并与目标摘要比较。
//! - 首个命中（最小起始偏移）即停止；读到文件末尾仍未命中则返回 NoMatch。
//! - 参数校验在扫描之前按固定顺序执行，扫描核心只接受已校验的参数。
//! - 核心库不打印、不打日志，结果与统计由外层（CLI）负责呈现。

mod algorithm;
mod config;
mod digest;
mod error;
mod hexcodec;
mod options;
mod outcome;
mod report;
mod scanner;
mod validate;
mod window;

pub use algorithm::{Algorithm, SUPPORTED_ALGORITHMS};
pub use config::{load_defaults, Defaults};
pub use digest::{digest_by_name, DigestProvider};
pub use error::{ErrorKind, ScanError};
pub use hexcodec::{decode_hex, encode_hex_upper};
pub use options::{ScanOptions, ScanStats};
pub use outcome::{Match, ScanOutcome};
pub use report::{write_report, ReportError, ReportStatus, ScanReport};
pub use scanner::{scan_file, scan_reader};
pub use validate::{validate, ScanRequest, ValidatedScan};
pub use window::Window;
