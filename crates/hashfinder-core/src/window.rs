//! 滑动窗口
use std::io::Read;

use crate::error::ScanError;

/// 固定长度的字节窗口：始终保存最近读入的 `len()` 个字节
#[derive(Debug, Clone)]
pub struct Window {
    buf: Vec<u8>,
    offset: u64,
}

impl Window {
    /// 从输入起始处读满 `key_length` 个字节
    /// 可用字节不足时返回 FileTooShort（调用方本应事先排除）
    pub fn fill<R: Read>(reader: &mut R, key_length: usize) -> Result<Self, ScanError> {
        // 不按 key_length 预分配：输入可能远短于调用方给出的长度
        let mut buf = Vec::new();
        let n = reader.by_ref().take(key_length as u64).read_to_end(&mut buf)?;
        if n < key_length {
            return Err(ScanError::FileTooShort { file_len: n as u64, key_length });
        }
        Ok(Self { buf, offset: 0 })
    }

    /// 左移一位（丢弃首字节），新字节放在末尾
    pub fn push(&mut self, byte: u8) {
        if let Some(last) = self.buf.len().checked_sub(1) {
            self.buf.copy_within(1.., 0);
            self.buf[last] = byte;
        }
        self.offset += 1;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// 窗口首字节在输入中的偏移
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
