use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use shortbatch::cli::Cli;
use shortbatch::config::StaticConfig;
use shortbatch::runtime::modes::{self, Mode};
use shortbatch::system::logging::init_logging;
use shortbatch::system::panic_handler::{RunMode, install_panic_hook};

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mode = modes::detect_mode(cli.command.as_ref());

    let config = match StaticConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            return Ok(ExitCode::FAILURE);
        }
    };

    #[cfg(feature = "tui")]
    let interactive = mode == Mode::Tui;
    #[cfg(not(feature = "tui"))]
    let interactive = false;

    let log_guard = init_logging(&config.logging, interactive)
        .context("failed to initialize logging")?;
    install_panic_hook(if interactive {
        RunMode::Tui
    } else {
        RunMode::Cli
    });
    debug!("Configuration loaded: {:?}", config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;
    let result = runtime.block_on(dispatch(cli, mode, &config));

    // 运行时关闭时会等待仍在发送的日志请求，之后才能释放日志 guard
    drop(runtime);
    drop(log_guard);

    result
}

async fn dispatch(cli: Cli, mode: Mode, config: &StaticConfig) -> Result<ExitCode> {
    match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            if let Err(e) = modes::run_tui(config).await {
                error!("TUI error: {}", e);
                eprintln!("{}", e.format_colored());
                return Ok(ExitCode::FAILURE);
            }
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                anyhow::bail!("no command given");
            };
            if let Err(e) = modes::run_cli(command, config).await {
                eprintln!("{}", e.format_colored());
                return Ok(ExitCode::FAILURE);
            }
        }
        Mode::Unknown => {
            anyhow::bail!("no interface enabled, rebuild with the 'tui' or 'cli' feature");
        }
    }

    Ok(ExitCode::SUCCESS)
}
