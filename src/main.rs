use std::env;
use std::path::PathBuf;

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

use speech_locales::{ReportConfig, report};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI options
    let mut config_path: Option<PathBuf> = None;
    let mut output_dir: Option<PathBuf> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                config_path = Some(PathBuf::from(path));
            }
            "-o" | "--output" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("--output requires a directory path"))?;
                output_dir = Some(PathBuf::from(path));
            }
            other => {
                anyhow::bail!(
                    "Unknown option '{other}'. Use --config <file> or --output <dir>"
                );
            }
        }
    }

    // Load configuration
    let mut config = match &config_path {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::from_env()?,
    };
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }

    let written = report::run(&config).await?;

    tracing::info!("Generated files:");
    for path in &written {
        tracing::info!("  {}", path.display());
    }

    Ok(())
}
