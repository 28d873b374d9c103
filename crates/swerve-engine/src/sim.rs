//! 仿真驱动引擎
//!
//! 无硬件依赖的 [`DriveEngine`] 实现，用于测试和演示。不复现模块级
//! 逆运动学（Non-goal）：只记录收到的指令、把场地系指令旋转进车体系、
//! 并按固定周期一阶积分航向角。
//!
//! 指令历史通过共享的 [`SimObserver`] 暴露给测试代码。

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use swerve_core::telemetry::keys;
use swerve_core::{Angle, ChassisSpeeds, TelemetrySink};

use crate::config::DrivetrainConfig;
use crate::engine::DriveEngine;
use crate::error::EngineError;

/// 朝向保持闭环的输出限幅（rad/s）
const MAX_HEADING_OMEGA: f64 = 2.0 * std::f64::consts::PI;

/// 仿真引擎收到的一条指令
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimCommand {
    /// 停止
    Stop,
    /// 车体坐标系指令
    RobotCentric(ChassisSpeeds),
    /// 场地坐标系指令
    FieldCentric(ChassisSpeeds),
    /// 场地平移 + 朝向保持
    HeadingHold {
        /// 场地系 X 速度
        x: f64,
        /// 场地系 Y 速度
        y: f64,
        /// 目标朝向
        target: Angle,
    },
}

#[derive(Debug, Default)]
struct SimLog {
    commands: Vec<SimCommand>,
}

/// 仿真引擎的只读观察端
///
/// 与引擎共享指令日志，测试代码用它断言 façade 转发了什么。
#[derive(Debug, Clone)]
pub struct SimObserver {
    log: Arc<Mutex<SimLog>>,
}

impl SimObserver {
    /// 按接收顺序返回全部指令
    pub fn commands(&self) -> Vec<SimCommand> {
        self.log.lock().commands.clone()
    }

    /// 取走全部指令（清空日志）
    pub fn take_commands(&self) -> Vec<SimCommand> {
        std::mem::take(&mut self.log.lock().commands)
    }

    /// 最近一条指令
    pub fn last_command(&self) -> Option<SimCommand> {
        self.log.lock().commands.last().copied()
    }

    /// 已接收指令数
    pub fn len(&self) -> usize {
        self.log.lock().commands.len()
    }

    /// 日志是否为空
    pub fn is_empty(&self) -> bool {
        self.log.lock().commands.is_empty()
    }
}

/// 仿真驱动引擎
///
/// 通过 [`SimEngineBuilder`](crate::builder::SimEngineBuilder) 构造。
#[derive(Debug)]
pub struct SimDriveEngine {
    config: DrivetrainConfig,
    /// 每次指令对应的积分步长（秒）
    cycle_period_s: f64,
    /// 当前航向角（度，逆时针为正）
    yaw_deg: f64,
    /// 最近一次落到车体系的速度
    applied: ChassisSpeeds,
    ready: bool,
    log: Arc<Mutex<SimLog>>,
}

impl SimDriveEngine {
    pub(crate) fn new(
        config: DrivetrainConfig,
        initial_yaw_deg: f64,
        cycle_period_s: f64,
    ) -> Self {
        SimDriveEngine {
            config,
            cycle_period_s,
            yaw_deg: initial_yaw_deg,
            applied: ChassisSpeeds::ZERO,
            ready: true,
            log: Arc::new(Mutex::new(SimLog::default())),
        }
    }

    /// 创建共享指令日志的观察端
    pub fn observer(&self) -> SimObserver {
        SimObserver {
            log: Arc::clone(&self.log),
        }
    }

    /// 关闭引擎：之后的指令返回 [`EngineError::NotReady`]
    pub fn shutdown(&mut self) {
        self.ready = false;
    }

    /// 底盘配置
    pub fn config(&self) -> &DrivetrainConfig {
        &self.config
    }

    /// 最近一次落到车体系的速度
    pub fn applied_speeds(&self) -> ChassisSpeeds {
        self.applied
    }

    fn ensure_ready(&self) -> Result<(), EngineError> {
        if self.ready { Ok(()) } else { Err(EngineError::NotReady) }
    }

    fn ensure_finite(speeds: ChassisSpeeds) -> Result<(), EngineError> {
        if speeds.is_finite() {
            Ok(())
        } else {
            Err(EngineError::Rejected("non-finite speed component".to_string()))
        }
    }

    /// 场地系向量旋转进车体系
    fn field_to_robot(&self, speeds: ChassisSpeeds) -> ChassisSpeeds {
        let yaw = Angle::from_degrees(self.yaw_deg);
        let (sin, cos) = (yaw.sin(), yaw.cos());
        ChassisSpeeds::new(
            cos * speeds.vx + sin * speeds.vy,
            -sin * speeds.vx + cos * speeds.vy,
            speeds.omega,
        )
    }

    /// 应用车体系速度并积分航向角
    fn apply(&mut self, speeds: ChassisSpeeds) {
        self.yaw_deg += speeds.omega.to_degrees() * self.cycle_period_s;
        self.applied = speeds;
    }
}

impl DriveEngine for SimDriveEngine {
    fn stop(&mut self) -> Result<(), EngineError> {
        self.ensure_ready()?;
        trace!("sim engine: stop");
        self.log.lock().commands.push(SimCommand::Stop);
        self.apply(ChassisSpeeds::ZERO);
        Ok(())
    }

    fn command_robot_centric(&mut self, speeds: ChassisSpeeds) -> Result<(), EngineError> {
        self.ensure_ready()?;
        Self::ensure_finite(speeds)?;
        trace!(%speeds, "sim engine: robot-centric");
        self.log.lock().commands.push(SimCommand::RobotCentric(speeds));
        self.apply(speeds);
        Ok(())
    }

    fn command_field_centric(&mut self, speeds: ChassisSpeeds) -> Result<(), EngineError> {
        self.ensure_ready()?;
        Self::ensure_finite(speeds)?;
        trace!(%speeds, yaw_deg = self.yaw_deg, "sim engine: field-centric");
        self.log.lock().commands.push(SimCommand::FieldCentric(speeds));
        let robot = self.field_to_robot(speeds);
        self.apply(robot);
        Ok(())
    }

    fn command_heading_hold(
        &mut self,
        x: f64,
        y: f64,
        target: Angle,
    ) -> Result<(), EngineError> {
        self.ensure_ready()?;
        if !x.is_finite() || !y.is_finite() || !target.is_finite() {
            return Err(EngineError::Rejected("non-finite speed component".to_string()));
        }
        trace!(x, y, target_deg = target.as_degrees(), "sim engine: heading hold");
        self.log.lock().commands.push(SimCommand::HeadingHold { x, y, target });

        // 朝向闭环：比例项 + 限幅
        let error = (target - Angle::from_degrees(self.yaw_deg)).normalized();
        let omega = (self.config.heading_gains.kp * error.as_radians())
            .clamp(-MAX_HEADING_OMEGA, MAX_HEADING_OMEGA);

        let robot = self.field_to_robot(ChassisSpeeds::new(x, y, omega));
        self.apply(robot);
        Ok(())
    }

    fn yaw(&self) -> f64 {
        self.yaw_deg
    }

    fn publish_telemetry(&self, sink: &mut dyn TelemetrySink) {
        sink.publish_f64(keys::ROBOT_YAW, self.yaw_deg);
        sink.publish_f64(keys::COMMAND_NORM, self.applied.translation_norm());
    }
}
