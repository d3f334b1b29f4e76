//! 滑动窗口扫描主流程
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::digest::DigestProvider;
use crate::error::ScanError;
use crate::options::{ScanOptions, ScanStats};
use crate::outcome::{Match, ScanOutcome};
use crate::validate::ValidatedScan;
use crate::window::Window;

/// 在任意输入流上执行滑动窗口扫描
/// - 先读满 `key_length` 字节作为首个窗口，之后每次只读 1 字节
/// - 每个窗口独立计算摘要，与 `target` 按长度与逐字节比较
/// - 首个命中即返回；输入耗尽仍未命中返回 NoMatch
/// - 摘要提供者报错时立即中止，不重试
pub fn scan_reader<R, D>(
    mut reader: R,
    target: &[u8],
    key_length: usize,
    provider: &D,
    opts: &ScanOptions,
) -> Result<(ScanOutcome, ScanStats), ScanError>
where
    R: Read,
    D: DigestProvider + ?Sized,
{
    if key_length == 0 {
        return Err(ScanError::NonPositiveKeyLength(0));
    }

    let mut stats = ScanStats::default();
    let mut window = Window::fill(&mut reader, key_length)?;
    stats.bytes_read = key_length as u64;

    let mut rest = reader.bytes();
    loop {
        if opts.is_cancelled() {
            return Err(ScanError::Cancelled);
        }

        let digest = provider.digest(window.as_bytes())?;
        stats.windows_evaluated += 1;
        if digest.as_slice() == target {
            let offset = window.offset();
            let found = Match { offset, window: window.into_bytes() };
            return Ok((ScanOutcome::Matched(found), stats));
        }

        match rest.next() {
            Some(byte) => {
                window.push(byte?);
                stats.bytes_read += 1;
            }
            None => break,
        }
    }

    Ok((ScanOutcome::NoMatch, stats))
}

/// 打开文件并扫描；文件句柄在任何返回路径上都会随作用域结束而释放
pub fn scan_file<D>(
    path: &Path,
    target: &[u8],
    key_length: usize,
    provider: &D,
    opts: &ScanOptions,
) -> Result<(ScanOutcome, ScanStats), ScanError>
where
    D: DigestProvider + ?Sized,
{
    let file = File::open(path)?;
    scan_reader(BufReader::new(file), target, key_length, provider, opts)
}

impl ValidatedScan {
    /// 以校验通过的参数执行扫描
    pub fn run(&self, opts: &ScanOptions) -> Result<(ScanOutcome, ScanStats), ScanError> {
        scan_file(&self.file, &self.target, self.key_length, &self.algorithm, opts)
    }
}
