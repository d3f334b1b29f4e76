//! 十六进制编解码（输入不区分大小写，输出统一大写）
use crate::error::ScanError;

/// 解码十六进制字符串：奇数位数或含非十六进制字符均视为 MalformedHash
pub fn decode_hex(s: &str) -> Result<Vec<u8>, ScanError> {
    hex::decode(s).map_err(|_| ScanError::MalformedHash)
}

/// 编码为大写十六进制字符串
pub fn encode_hex_upper(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}
