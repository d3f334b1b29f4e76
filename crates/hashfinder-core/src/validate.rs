//! 扫描前参数校验
//!
//! 各项检查相互独立，按固定顺序执行并收集全部失败项：
//! 文件存在 → 非目录 → 哈希位数为偶数 → 算法可识别 → 摘要长度与算法一致
//! → 密钥长度可解析 → 密钥长度为正 → 文件长度不小于密钥长度。
//! 依赖前序结果的检查在前序失败时跳过（例如算法未识别时不比较摘要长度）。
use std::path::PathBuf;

use crate::algorithm::Algorithm;
use crate::config::Defaults;
use crate::error::ScanError;
use crate::hexcodec::decode_hex;

/// 未经校验的原始参数（来自命令行）
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub file: PathBuf,
    pub hash: String,
    /// 为空时使用 `Defaults::key_length`
    pub key_length: Option<String>,
    /// 为空时使用 `Defaults::algorithm`
    pub algorithm: Option<String>,
}

/// 校验通过的扫描参数
#[derive(Debug, Clone)]
pub struct ValidatedScan {
    pub file: PathBuf,
    pub file_len: u64,
    pub target: Vec<u8>,
    pub key_length: usize,
    pub algorithm: Algorithm,
}

/// 文件元数据检查的结果
struct FileFacts {
    len: u64,
}

/// 按固定顺序执行全部检查；任一失败则返回按顺序排列的错误列表
pub fn validate(req: &ScanRequest, defaults: &Defaults) -> Result<ValidatedScan, Vec<ScanError>> {
    let mut errors = Vec::new();

    // 1-2) 文件存在且不是目录
    let file = check_file(req, &mut errors);

    // 3) 哈希为偶数位十六进制
    let target = record(&mut errors, decode_hex(&req.hash));

    // 4) 算法可识别
    let algorithm_name = req.algorithm.as_deref().unwrap_or(&defaults.algorithm);
    let algorithm = record(&mut errors, algorithm_name.parse::<Algorithm>());

    // 5) 摘要长度与算法输出长度一致
    if let (Some(target), Some(algorithm)) = (&target, algorithm) {
        if target.len() != algorithm.output_len() {
            errors.push(ScanError::DigestLengthMismatch {
                algorithm: algorithm.to_string(),
                expected: algorithm.output_len(),
                actual: target.len(),
            });
        }
    }

    // 6-7) 密钥长度可解析且为正
    let key_length = check_key_length(req, defaults, &mut errors);

    // 8) 文件长度不小于密钥长度
    if let (Some(facts), Some(key_length)) = (&file, key_length) {
        if facts.len < key_length as u64 {
            errors.push(ScanError::FileTooShort { file_len: facts.len, key_length });
        }
    }

    match (errors.is_empty(), file, target, algorithm, key_length) {
        (true, Some(facts), Some(target), Some(algorithm), Some(key_length)) => Ok(ValidatedScan {
            file: req.file.clone(),
            file_len: facts.len,
            target,
            key_length,
            algorithm,
        }),
        _ => Err(errors),
    }
}

fn record<T>(errors: &mut Vec<ScanError>, res: Result<T, ScanError>) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

fn check_file(req: &ScanRequest, errors: &mut Vec<ScanError>) -> Option<FileFacts> {
    let md = match std::fs::metadata(&req.file) {
        Ok(md) => md,
        Err(_) => {
            errors.push(ScanError::FileNotFound(req.file.clone()));
            return None;
        }
    };
    if md.is_dir() {
        errors.push(ScanError::IsDirectory(req.file.clone()));
        return None;
    }
    Some(FileFacts { len: md.len() })
}

fn check_key_length(req: &ScanRequest, defaults: &Defaults, errors: &mut Vec<ScanError>) -> Option<usize> {
    let value = match req.key_length.as_deref() {
        Some(raw) => match raw.parse::<i64>() {
            Ok(v) => v,
            Err(_) => {
                errors.push(ScanError::InvalidKeyLength(raw.to_string()));
                return None;
            }
        },
        None => defaults.key_length,
    };
    if value <= 0 {
        errors.push(ScanError::NonPositiveKeyLength(value));
        return None;
    }
    match usize::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(ScanError::InvalidKeyLength(value.to_string()));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;

    const SHA256_ABC: &str = "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD";

    fn file_with(content: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content).unwrap();
        f.flush().unwrap();
        f
    }

    fn request(file: PathBuf, hash: &str, key: Option<&str>, alg: Option<&str>) -> ScanRequest {
        ScanRequest {
            file,
            hash: hash.to_string(),
            key_length: key.map(str::to_string),
            algorithm: alg.map(str::to_string),
        }
    }

    fn kinds(errors: &[ScanError]) -> Vec<ErrorKind> {
        errors.iter().map(ScanError::kind).collect()
    }

    #[test]
    fn accepts_well_formed_request() {
        let f = file_with(b"abc");
        let req = request(f.path().to_path_buf(), SHA256_ABC, Some("3"), Some("sha-256"));
        let ok = validate(&req, &Defaults::default()).unwrap();
        assert_eq!(ok.key_length, 3);
        assert_eq!(ok.file_len, 3);
        assert_eq!(ok.algorithm, Algorithm::Sha256);
        assert_eq!(ok.target.len(), 32);
    }

    #[test]
    fn applies_defaults() {
        let f = file_with(&[0u8; 16]);
        let req = request(f.path().to_path_buf(), &"00".repeat(32), None, None);
        let ok = validate(&req, &Defaults::default()).unwrap();
        assert_eq!(ok.key_length, 16);
        assert_eq!(ok.algorithm, Algorithm::Sha256);
    }

    #[test]
    fn unknown_algorithm_skips_length_check() {
        let f = file_with(b"abc");
        let req = request(f.path().to_path_buf(), SHA256_ABC, Some("3"), Some("SHA-999"));
        let errs = validate(&req, &Defaults::default()).unwrap_err();
        assert_eq!(kinds(&errs), vec![ErrorKind::UnsupportedAlgorithm]);
    }

    #[test]
    fn digest_length_mismatch() {
        let f = file_with(b"abc");
        let req = request(f.path().to_path_buf(), &"AB".repeat(20), Some("3"), Some("SHA-256"));
        let errs = validate(&req, &Defaults::default()).unwrap_err();
        assert!(matches!(
            errs.as_slice(),
            [ScanError::DigestLengthMismatch { expected: 32, actual: 20, .. }]
        ));
    }

    #[test]
    fn reports_all_failures_in_fixed_order() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.bin");
        let req = request(missing, "abc", Some("x"), Some("SHA-999"));
        let errs = validate(&req, &Defaults::default()).unwrap_err();
        assert_eq!(
            kinds(&errs),
            vec![
                ErrorKind::FileNotFound,
                ErrorKind::MalformedHash,
                ErrorKind::UnsupportedAlgorithm,
                ErrorKind::InvalidKeyLength,
            ]
        );
    }

    #[test]
    fn directory_and_non_positive_key() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path().to_path_buf(), SHA256_ABC, Some("-4"), None);
        let errs = validate(&req, &Defaults::default()).unwrap_err();
        assert!(matches!(
            errs.as_slice(),
            [ScanError::IsDirectory(_), ScanError::NonPositiveKeyLength(-4)]
        ));
    }

    #[test]
    fn file_shorter_than_key_is_last() {
        let f = file_with(b"ab");
        let req = request(f.path().to_path_buf(), "0", Some("3"), None);
        let errs = validate(&req, &Defaults::default()).unwrap_err();
        assert_eq!(kinds(&errs), vec![ErrorKind::MalformedHash, ErrorKind::FileTooShort]);
    }

    #[test]
    fn zero_key_length_is_not_positive() {
        let f = file_with(b"abc");
        let req = request(f.path().to_path_buf(), SHA256_ABC, Some("0"), None);
        let errs = validate(&req, &Defaults::default()).unwrap_err();
        assert!(matches!(errs.as_slice(), [ScanError::NonPositiveKeyLength(0)]));
    }
}
