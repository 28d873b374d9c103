//! 仿真遥控演示
//!
//! 用仿真引擎跑一段固定周期驱动循环：极坐标扫掠 + 每 50 个周期
//! 切换一次驾驶模式，周期性打印遥测。
//!
//! ```bash
//! cargo run --example sim_teleop -p swerve-client
//! ```

use std::ops::ControlFlow;

use swerve_client::{DriveCommandFacade, LoopConfig, run_drive_loop};
use swerve_core::Angle;
use swerve_engine::SimEngineBuilder;

fn main() -> Result<(), swerve_engine::EngineError> {
    let engine = SimEngineBuilder::new().build()?;
    let mut facade = DriveCommandFacade::new(engine);

    let config = LoopConfig {
        frequency_hz: 50.0,
        dt_clamp_multiplier: 2.0,
        max_iterations: Some(300),
    };

    let mut elapsed = 0.0_f64;
    let mut iteration = 0_u64;
    run_drive_loop(&mut facade, config, |facade, dt| {
        elapsed += dt;
        iteration += 1;

        // 驾驶角随时间扫掠一整圈，速度固定 1 m/s
        let drive_angle = Angle::from_degrees((elapsed * 60.0) % 360.0);
        facade.drive_polar_field_centric(drive_angle, 1.0, 0.0)?;

        if iteration % 50 == 0 {
            let mode = facade.cycle_mode();
            println!(
                "t={:6.2}s mode={} yaw={:7.2} deg",
                elapsed,
                mode,
                facade.robot_heading()
            );
        }
        Ok(ControlFlow::Continue(()))
    })?;

    facade.stop()?;
    println!("done, final yaw = {:.2} deg", facade.robot_heading());
    Ok(())
}
