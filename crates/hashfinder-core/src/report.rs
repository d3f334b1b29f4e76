//! 对外输出的扫描报告（JSON）
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::error::{ErrorKind, ScanError};
use crate::options::ScanStats;
use crate::outcome::ScanOutcome;
use crate::validate::ValidatedScan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Match,
    NoMatch,
    Error,
}

/// 单条错误（分类 + 提示文本）
#[derive(Debug, Clone, Serialize)]
pub struct ReportError {
    pub kind: ErrorKind,
    pub message: String,
}

/// 报告结构（对应 `--json` 输出的单个对象）
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub file: PathBuf,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_length: Option<usize>,
    /// 命中窗口（大写十六进制）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    pub windows_evaluated: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ReportError>,
}

impl ScanReport {
    /// 校验失败（扫描未开始）
    pub fn rejected(file: &Path, errors: &[ScanError]) -> Self {
        Self {
            file: file.to_path_buf(),
            status: ReportStatus::Error,
            algorithm: None,
            key_length: None,
            window: None,
            offset: None,
            windows_evaluated: 0,
            errors: errors.iter().map(ReportError::from).collect(),
        }
    }

    /// 扫描完成或扫描中出错
    pub fn finished(scan: &ValidatedScan, result: &Result<(ScanOutcome, ScanStats), ScanError>) -> Self {
        let mut report = Self {
            file: scan.file.clone(),
            status: ReportStatus::NoMatch,
            algorithm: Some(scan.algorithm.to_string()),
            key_length: Some(scan.key_length),
            window: None,
            offset: None,
            windows_evaluated: 0,
            errors: Vec::new(),
        };
        match result {
            Ok((outcome, stats)) => {
                report.windows_evaluated = stats.windows_evaluated;
                if let Some(m) = outcome.as_match() {
                    report.status = ReportStatus::Match;
                    report.window = Some(m.hex());
                    report.offset = Some(m.offset);
                }
            }
            Err(e) => {
                report.status = ReportStatus::Error;
                report.errors.push(ReportError::from(e));
            }
        }
        report
    }
}

impl From<&ScanError> for ReportError {
    fn from(e: &ScanError) -> Self {
        Self { kind: e.kind(), message: e.to_string() }
    }
}

/// 将报告以单行 JSON 写入 `out`
pub fn write_report(out: &mut dyn Write, report: &ScanReport) -> Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::outcome::Match;

    fn validated() -> ValidatedScan {
        ValidatedScan {
            file: PathBuf::from("data.bin"),
            file_len: 3,
            target: vec![0; 32],
            key_length: 3,
            algorithm: Algorithm::Sha256,
        }
    }

    fn to_json(report: &ScanReport) -> serde_json::Value {
        let mut buf = Vec::new();
        write_report(&mut buf, report).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn match_report() {
        let stats = ScanStats { windows_evaluated: 2, bytes_read: 4 };
        let outcome = ScanOutcome::Matched(Match { offset: 1, window: b"abc".to_vec() });
        let v = to_json(&ScanReport::finished(&validated(), &Ok((outcome, stats))));
        assert_eq!(v["status"], "match");
        assert_eq!(v["window"], "616263");
        assert_eq!(v["offset"], 1);
        assert_eq!(v["algorithm"], "SHA-256");
        assert!(v.get("errors").is_none());
    }

    #[test]
    fn rejected_report_lists_kinds() {
        let errors = vec![ScanError::MalformedHash, ScanError::UnsupportedAlgorithm("SHA-999".into())];
        let v = to_json(&ScanReport::rejected(Path::new("x"), &errors));
        assert_eq!(v["status"], "error");
        assert_eq!(v["errors"][0]["kind"], "malformed_hash");
        assert_eq!(v["errors"][1]["kind"], "unsupported_algorithm");
    }
}
