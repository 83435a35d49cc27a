pub mod capture;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod launcher;
pub mod logging;

use anyhow::Result;
use cli::Args;
use config::Config;
use launcher::{Launcher, SystemLauncher};
use tracing::{error, info};

pub fn run(args: Args) -> Result<()> {
    // 先加载配置再初始化日志：文件日志的位置来自配置本身。
    let config = Config::load(&args.config);
    logging::init(config.as_ref().ok().and_then(Config::file_logging));
    let config = config?;

    execute(&config, &args, &SystemLauncher)
}

/// Builds the tshark command for `config`, runs it and logs how it ended.
/// A non-zero tshark exit is logged but not returned as an error.
pub fn execute(config: &Config, args: &Args, launcher: &impl Launcher) -> Result<()> {
    let tshark_args = capture::build_tshark_args(config);
    let command_line = capture::render_command(&args.tshark, &tshark_args);
    info!("Starting tshark with command: {command_line}");

    if args.dry_run {
        info!("dry run, tshark not started");
        return Ok(());
    }

    match launcher.launch(&args.tshark, &tshark_args)? {
        Some(0) => info!("tshark completed successfully"),
        Some(code) => error!("tshark exited with code {code}"),
        None => error!("tshark terminated by signal"),
    }

    Ok(())
}
