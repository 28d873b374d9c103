//! # Swerve CLI
//!
//! 针对仿真引擎的命令行工具（one-shot 模式）。
//!
//! ```bash
//! # 生成默认底盘配置
//! swerve-cli config init
//!
//! # 执行一条驱动指令（内部：构建引擎 -> 指令 -> 停止）
//! swerve-cli drive --vx 1.0 --vy 0.0 --omega 0.5 --mode field
//!
//! # 跑一段固定周期演示循环
//! swerve-cli demo --hz 50 --seconds 5
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{ConfigCommand, DemoCommand, DriveCommand};

/// Swerve CLI - 底盘驱动命令行工具
#[derive(Parser, Debug)]
#[command(name = "swerve-cli")]
#[command(about = "Command-line interface for the swerve drive SDK", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 配置管理
    #[command(subcommand)]
    Config(ConfigCommand),

    /// 一条驱动指令（one-shot）
    Drive(DriveCommand),

    /// 固定周期演示循环
    Demo(DemoCommand),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Config(command) => command.run(),
        Commands::Drive(command) => command.run(),
        Commands::Demo(command) => command.run(),
    }
}
