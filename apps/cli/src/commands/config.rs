//! 配置管理子命令

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Subcommand;

use swerve_engine::DrivetrainConfig;

use super::{default_config_path, load_config};

/// 配置管理
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// 写出默认配置文件
    Init {
        /// 目标路径（默认 `<config dir>/swerve/drivetrain.toml`）
        #[arg(long)]
        path: Option<PathBuf>,

        /// 覆盖已存在的文件
        #[arg(long)]
        force: bool,
    },

    /// 显示当前生效的配置
    Show {
        /// 配置文件路径（默认按 `init` 的默认路径查找）
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

impl ConfigCommand {
    pub fn run(self) -> Result<()> {
        match self {
            ConfigCommand::Init { path, force } => {
                let path = match path {
                    Some(path) => path,
                    None => default_config_path()?,
                };
                if path.exists() && !force {
                    bail!(
                        "config file {} already exists (use --force to overwrite)",
                        path.display()
                    );
                }
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create directory {}", parent.display())
                    })?;
                }

                let config = DrivetrainConfig::default();
                config
                    .save(&path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("wrote default drivetrain config to {}", path.display());
                Ok(())
            },
            ConfigCommand::Show { path } => {
                let config = load_config(path.as_deref())?;
                config.validate().context("config failed validation")?;
                print!("{}", config.to_toml_string()?);
                Ok(())
            },
        }
    }
}
