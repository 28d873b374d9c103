//! 一条驱动指令（one-shot）

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};

use swerve_client::DriveCommandFacade;
use swerve_core::ChassisSpeeds;
use swerve_engine::SimEngineBuilder;

use super::load_config;

/// 指令参考系
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Frame {
    /// 车体坐标系
    Robot,
    /// 场地坐标系
    Field,
}

/// 一条驱动指令（one-shot）
///
/// 内部流程：构建仿真引擎 → 发送一条速度指令 → 打印结果 → 停止。
#[derive(Args, Debug)]
pub struct DriveCommand {
    /// X 方向速度（m/s，前为正）
    #[arg(long, default_value_t = 0.0)]
    pub vx: f64,

    /// Y 方向速度（m/s，左为正）
    #[arg(long, default_value_t = 0.0)]
    pub vy: f64,

    /// 旋转速度（rad/s，逆时针为正）
    #[arg(long, default_value_t = 0.0)]
    pub omega: f64,

    /// 指令参考系
    #[arg(long, value_enum, default_value_t = Frame::Field)]
    pub mode: Frame,

    /// 初始航向角（度）
    #[arg(long, default_value_t = 0.0)]
    pub yaw: f64,

    /// 配置文件路径
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl DriveCommand {
    pub fn run(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let engine = SimEngineBuilder::new()
            .config(config)
            .initial_yaw_deg(self.yaw)
            .build()?;
        let mut facade = DriveCommandFacade::new(engine);

        let speeds = ChassisSpeeds::new(self.vx, self.vy, self.omega);
        match self.mode {
            Frame::Robot => facade.drive_robot_centric(speeds)?,
            Frame::Field => facade.drive_field_centric(speeds)?,
        }

        println!("commanded: {}", speeds);
        println!("applied (robot frame): {}", facade.engine().applied_speeds());
        println!("yaw: {:.2} deg", facade.robot_heading());

        facade.stop()?;
        Ok(())
    }
}
