//! CLI 子命令实现

pub mod config;
pub mod demo;
pub mod drive;

pub use config::ConfigCommand;
pub use demo::DemoCommand;
pub use drive::DriveCommand;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use swerve_engine::DrivetrainConfig;

/// 默认配置文件路径：`<config dir>/swerve/drivetrain.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("cannot determine user config directory")?;
    Ok(base.join("swerve").join("drivetrain.toml"))
}

/// 加载底盘配置
///
/// 显式给出路径时文件必须存在；未给出时尝试默认路径，
/// 不存在则回落到内置默认配置。
pub fn load_config(path: Option<&Path>) -> Result<DrivetrainConfig> {
    match path {
        Some(path) => DrivetrainConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => {
            let default_path = default_config_path()?;
            if default_path.exists() {
                DrivetrainConfig::load(&default_path).with_context(|| {
                    format!("failed to load config from {}", default_path.display())
                })
            } else {
                Ok(DrivetrainConfig::default())
            }
        },
    }
}
