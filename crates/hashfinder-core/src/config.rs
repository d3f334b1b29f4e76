//! 默认参数配置加载（TOML）
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// 内置默认密钥长度（字节）
pub const DEFAULT_KEY_LENGTH: i64 = 16;

/// 配置文件结构（字段均可省略）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    key_length: Option<i64>,
    #[serde(default)]
    algorithm: Option<String>,
}

/// 命令行省略位置参数时使用的默认值
/// 这里只做原样保存，合法性仍由校验流程按顺序检查
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub key_length: i64,
    pub algorithm: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_LENGTH,
            algorithm: crate::algorithm::Algorithm::default().to_string(),
        }
    }
}

/// 从 TOML 文件加载默认值；文件中缺省的字段回退到内置默认
pub fn load_defaults(path: &Path) -> Result<Defaults> {
    let txt = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    parse_defaults(&txt).with_context(|| format!("parse config {}", path.display()))
}

fn parse_defaults(txt: &str) -> Result<Defaults> {
    let parsed: ConfigFile = toml::from_str(txt)?;
    let base = Defaults::default();
    Ok(Defaults {
        key_length: parsed.key_length.unwrap_or(base.key_length),
        algorithm: parsed.algorithm.unwrap_or(base.algorithm),
    })
}
