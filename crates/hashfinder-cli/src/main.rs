use anyhow::{Context, Result};
use clap::Parser;
use hashfinder_core::{
    load_defaults, validate, write_report, Defaults, ScanError, ScanOptions, ScanOutcome, ScanReport,
    ScanRequest, SUPPORTED_ALGORITHMS,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(
    name = "hashfinder",
    version,
    about = "在文件中查找摘要与给定哈希一致的定长字节序列"
)]
struct Cli {
    /// 待搜索的文件（相对或绝对路径）
    file: PathBuf,

    /// 目标哈希（十六进制，不区分大小写）
    hash: String,

    /// 密钥长度（字节，正整数，默认 16）
    #[arg(allow_negative_numbers = true)]
    key_length: Option<String>,

    /// 摘要算法：MD2, MD5, SHA-1, SHA-224, SHA-256, SHA-384, SHA-512（默认 SHA-256）
    algorithm: Option<String>,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,

    /// 默认参数配置文件（TOML，可设置 key_length 与 algorithm）
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    let defaults = match &cli.config {
        Some(path) => load_defaults(path).context("load config failed")?,
        None => Defaults::default(),
    };

    let req = ScanRequest {
        file: cli.file.clone(),
        hash: cli.hash.clone(),
        key_length: cli.key_length.clone(),
        algorithm: cli.algorithm.clone(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // 按固定顺序校验全部参数；任一失败即不扫描
    let scan = match validate(&req, &defaults) {
        Ok(scan) => scan,
        Err(errors) => {
            if cli.json {
                write_report(&mut out, &ScanReport::rejected(&req.file, &errors))?;
            } else {
                for e in &errors {
                    print_error(&mut out, e)?;
                }
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    info!(file = ?scan.file, algorithm = %scan.algorithm, key_length = scan.key_length, file_len = scan.file_len, "starting scan");
    let result = scan.run(&ScanOptions::default());

    if cli.json {
        write_report(&mut out, &ScanReport::finished(&scan, &result))?;
    }

    match result {
        Ok((outcome, stats)) => {
            info!(windows_evaluated = stats.windows_evaluated, bytes_read = stats.bytes_read, "scan finished");
            if let Some(m) = outcome.as_match() {
                info!(offset = m.offset, "match found");
            }
            if !cli.json {
                print_outcome(&mut out, &outcome)?;
            }
            out.flush().ok();
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(error = %e, "scan aborted");
            if !cli.json {
                print_error(&mut out, &e)?;
            }
            out.flush().ok();
            Ok(ExitCode::FAILURE)
        }
    }
}

/// 打印扫描结果；命中时第二行给出窗口在文件中的字节偏移
fn print_outcome(out: &mut dyn Write, outcome: &ScanOutcome) -> Result<()> {
    match outcome {
        ScanOutcome::Matched(m) => {
            writeln!(out, "Hex string {} matches given hash!", m.hex())?;
            writeln!(out, "Found at byte offset {}.", m.offset)?;
        }
        ScanOutcome::NoMatch => {
            writeln!(out, "No strings matching the given hash were found in the file.")?;
        }
    }
    Ok(())
}

/// 打印单条错误；算法相关错误附带可选算法列表
fn print_error(out: &mut dyn Write, e: &ScanError) -> Result<()> {
    writeln!(out, "{e}")?;
    if matches!(e, ScanError::UnsupportedAlgorithm(_)) {
        writeln!(out, "Possible algorithms: {}", SUPPORTED_ALGORITHMS.join(", "))?;
    }
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只保留结果输出
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
