//! 固定周期演示循环

use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use swerve_client::{DriveCommandFacade, LoopConfig, run_drive_loop};
use swerve_core::Angle;
use swerve_engine::SimEngineBuilder;

use super::load_config;

/// 固定周期演示循环
///
/// 极坐标扫掠 + 每秒一次模式切换，Ctrl-C 干净退出。
#[derive(Args, Debug)]
pub struct DemoCommand {
    /// 控制频率（Hz）
    #[arg(long, default_value_t = 50.0)]
    pub hz: f64,

    /// 运行时长（秒）
    #[arg(long, default_value_t = 5.0)]
    pub seconds: f64,

    /// 配置文件路径
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl DemoCommand {
    pub fn run(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let engine = SimEngineBuilder::new().config(config).build()?;
        let mut facade = DriveCommandFacade::new(engine);

        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .context("failed to install Ctrl-C handler")?;

        let iterations = (self.hz * self.seconds).max(0.0) as u64;
        let per_second = self.hz.max(1.0) as u64;
        let loop_config = LoopConfig {
            frequency_hz: self.hz,
            dt_clamp_multiplier: 2.0,
            max_iterations: Some(iterations),
        };

        info!(hz = self.hz, seconds = self.seconds, "starting demo loop");
        let mut elapsed = 0.0_f64;
        let mut iteration = 0_u64;
        run_drive_loop(&mut facade, loop_config, |facade, dt| {
            if interrupted.load(Ordering::SeqCst) {
                return Ok(ControlFlow::Break(()));
            }
            elapsed += dt;
            iteration += 1;

            let drive_angle = Angle::from_degrees((elapsed * 45.0) % 360.0);
            facade.drive_polar_field_centric(drive_angle, 1.0, 0.0)?;

            if iteration % per_second == 0 {
                let mode = facade.cycle_mode();
                println!(
                    "t={:6.2}s mode={:<17} yaw={:7.2} deg",
                    elapsed,
                    mode,
                    facade.robot_heading()
                );
            }
            Ok(ControlFlow::Continue(()))
        })?;

        facade.stop()?;
        println!("demo finished, final yaw = {:.2} deg", facade.robot_heading());
        Ok(())
    }
}
