//! 控制循环包装器
//!
//! 固定周期驱动 [`DriveCommandFacade`] 的单线程协作式循环：
//! 每个周期恰好调用一次 `periodic()`，然后执行使用方的 tick 闭包。
//!
//! # 核心功能
//!
//! - **精确定时**: 使用 `spin_sleep` 实现低抖动延时
//! - **dt 钳位**: 限制调度抖动/时间跳变造成的异常大时间步长
//! - **错误传播**: tick 的错误原样向上传播并终止循环

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use swerve_engine::{DriveEngine, EngineError};

use crate::facade::DriveCommandFacade;

/// 控制循环配置
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// 控制频率（Hz）
    pub frequency_hz: f64,

    /// dt 钳位倍数
    ///
    /// 实际 dt 超过标称周期的此倍数时被钳位，避免一次调度延迟
    /// 放大为一次大步长。
    pub dt_clamp_multiplier: f64,

    /// 最大迭代次数（None 表示无限循环）
    pub max_iterations: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        LoopConfig {
            frequency_hz: 50.0,
            dt_clamp_multiplier: 2.0,
            max_iterations: None,
        }
    }
}

/// 运行固定周期驱动循环
///
/// 每个周期执行：`facade.periodic()` → `tick(facade, dt)` → 睡到下一周期。
/// tick 返回 [`ControlFlow::Break`] 或配置的迭代次数耗尽时正常退出；
/// tick 返回错误时立即退出并向上传播。
///
/// # Errors
///
/// - [`EngineError::InvalidConfig`]: 循环配置非法（频率或钳位倍数非正）
/// - tick 闭包返回的任何引擎错误
///
/// # Example
///
/// ```
/// use std::ops::ControlFlow;
/// use swerve_client::{DriveCommandFacade, LoopConfig, run_drive_loop};
/// use swerve_core::ChassisSpeeds;
/// use swerve_engine::SimEngineBuilder;
///
/// let engine = SimEngineBuilder::new().build().unwrap();
/// let mut facade = DriveCommandFacade::new(engine);
/// let config = LoopConfig {
///     frequency_hz: 200.0,
///     max_iterations: Some(10),
///     ..Default::default()
/// };
///
/// run_drive_loop(&mut facade, config, |facade, _dt| {
///     facade.drive_field_centric(ChassisSpeeds::new(0.5, 0.0, 0.0))?;
///     Ok(ControlFlow::Continue(()))
/// })
/// .unwrap();
/// ```
pub fn run_drive_loop<E, F>(
    facade: &mut DriveCommandFacade<E>,
    config: LoopConfig,
    mut tick: F,
) -> Result<(), EngineError>
where
    E: DriveEngine,
    F: FnMut(&mut DriveCommandFacade<E>, f64) -> Result<ControlFlow<()>, EngineError>,
{
    if !(config.frequency_hz > 0.0) || !config.frequency_hz.is_finite() {
        return Err(EngineError::InvalidConfig(format!(
            "loop frequency must be positive and finite, got {}",
            config.frequency_hz
        )));
    }
    if !(config.dt_clamp_multiplier >= 1.0) {
        return Err(EngineError::InvalidConfig(format!(
            "dt clamp multiplier must be >= 1, got {}",
            config.dt_clamp_multiplier
        )));
    }

    let nominal_dt = 1.0 / config.frequency_hz;
    let max_dt = nominal_dt * config.dt_clamp_multiplier;
    let period = Duration::from_secs_f64(nominal_dt);

    let mut iterations: u64 = 0;
    let mut last = Instant::now();

    loop {
        if config.max_iterations.is_some_and(|max| iterations >= max) {
            return Ok(());
        }

        let now = Instant::now();
        let dt = (now - last).as_secs_f64().min(max_dt);
        last = now;

        // 调度契约：每周期恰好一次 periodic()，之后才是使用方逻辑
        facade.periodic();
        match tick(facade, dt)? {
            ControlFlow::Break(()) => return Ok(()),
            ControlFlow::Continue(()) => {},
        }

        iterations += 1;
        spin_sleep::sleep(period);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swerve_core::ChassisSpeeds;
    use swerve_engine::{SimDriveEngine, SimEngineBuilder};

    fn facade() -> DriveCommandFacade<SimDriveEngine> {
        DriveCommandFacade::new(SimEngineBuilder::new().build().unwrap())
    }

    fn fast_config(max_iterations: u64) -> LoopConfig {
        LoopConfig {
            frequency_hz: 2000.0,
            dt_clamp_multiplier: 2.0,
            max_iterations: Some(max_iterations),
        }
    }

    #[test]
    fn test_runs_exact_iteration_count() {
        let mut facade = facade();
        let mut ticks = 0;
        run_drive_loop(&mut facade, fast_config(5), |_, _| {
            ticks += 1;
            Ok(ControlFlow::Continue(()))
        })
        .unwrap();
        assert_eq!(ticks, 5);
    }

    #[test]
    fn test_break_stops_early() {
        let mut facade = facade();
        let mut ticks = 0;
        run_drive_loop(&mut facade, fast_config(100), |_, _| {
            ticks += 1;
            if ticks == 3 {
                Ok(ControlFlow::Break(()))
            } else {
                Ok(ControlFlow::Continue(()))
            }
        })
        .unwrap();
        assert_eq!(ticks, 3);
    }

    #[test]
    fn test_tick_error_propagates() {
        let mut facade = facade();
        let err = run_drive_loop(&mut facade, fast_config(100), |facade, _| {
            // NaN 指令被仿真引擎拒绝，错误应原样冒出循环
            facade.drive_robot_centric(ChassisSpeeds::new(f64::NAN, 0.0, 0.0))?;
            Ok(ControlFlow::Continue(()))
        })
        .unwrap_err();
        assert!(matches!(err, EngineError::Rejected(_)));
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut facade = facade();
        let config = LoopConfig {
            frequency_hz: 100.0,
            dt_clamp_multiplier: 2.0,
            max_iterations: Some(3),
        };
        let max_dt = 2.0 / 100.0;
        run_drive_loop(&mut facade, config, |_, dt| {
            assert!(dt <= max_dt + 1e-9);
            Ok(ControlFlow::Continue(()))
        })
        .unwrap();
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut facade = facade();
        let bad = LoopConfig {
            frequency_hz: 0.0,
            ..Default::default()
        };
        let err =
            run_drive_loop(&mut facade, bad, |_, _| Ok(ControlFlow::Continue(()))).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));

        let bad = LoopConfig {
            dt_clamp_multiplier: 0.5,
            max_iterations: Some(1),
            ..Default::default()
        };
        let err =
            run_drive_loop(&mut facade, bad, |_, _| Ok(ControlFlow::Continue(()))).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_iterations_never_ticks() {
        let mut facade = facade();
        run_drive_loop(&mut facade, fast_config(0), |_, _| {
            panic!("tick must not run");
        })
        .unwrap();
    }
}
