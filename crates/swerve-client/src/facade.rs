//! 驱动指令门面
//!
//! [`DriveCommandFacade`] 把高层驾驶意图翻译成对
//! [`DriveEngine`] 的调用，并维护驾驶模式状态机。引擎句柄在构造时
//! 注入且独占持有，之后不再更换。
//!
//! # 错误语义
//!
//! 所有转发方法把引擎的 `Result` 原样返回：不包装、不重试、不吞错。

use tracing::{debug, trace};

use swerve_core::telemetry::keys;
use swerve_core::{Angle, ChassisSpeeds, DriveMode, TelemetrySink};
use swerve_engine::{DriveEngine, EngineError};

/// 驱动指令门面
///
/// # Example
///
/// ```
/// use swerve_client::DriveCommandFacade;
/// use swerve_core::{ChassisSpeeds, DriveMode};
/// use swerve_engine::SimEngineBuilder;
///
/// let engine = SimEngineBuilder::new().build().unwrap();
/// let mut facade = DriveCommandFacade::new(engine);
///
/// assert_eq!(facade.mode(), DriveMode::FieldCentric);
/// facade.drive_field_centric(ChassisSpeeds::new(1.0, 0.0, 0.0)).unwrap();
/// facade.cycle_mode();
/// assert_eq!(facade.mode(), DriveMode::AngleFieldCentric);
/// ```
#[derive(Debug)]
pub struct DriveCommandFacade<E: DriveEngine> {
    engine: E,
    mode: DriveMode,
}

impl<E: DriveEngine> DriveCommandFacade<E> {
    /// 创建门面，接管引擎句柄
    ///
    /// 初始驾驶模式为 [`DriveMode::FieldCentric`]。
    pub fn new(engine: E) -> Self {
        DriveCommandFacade {
            engine,
            mode: DriveMode::FieldCentric,
        }
    }

    /// 停止所有运动
    ///
    /// 等价于向引擎发送零速度指令，与当前模式和先前指令无关。
    pub fn stop(&mut self) -> Result<(), EngineError> {
        trace!("facade: stop");
        self.engine.stop()
    }

    /// 车体坐标系速度指令（原样转发）
    pub fn drive_robot_centric(&mut self, speeds: ChassisSpeeds) -> Result<(), EngineError> {
        trace!(%speeds, "facade: robot-centric");
        self.engine.command_robot_centric(speeds)
    }

    /// 场地坐标系速度指令（原样转发）
    ///
    /// 场地系 → 车体系的旋转变换由引擎完成。
    pub fn drive_field_centric(&mut self, speeds: ChassisSpeeds) -> Result<(), EngineError> {
        trace!(%speeds, "facade: field-centric");
        self.engine.command_field_centric(speeds)
    }

    /// 场地坐标系平移 + 显式目标朝向
    pub fn drive_angle_field_centric(
        &mut self,
        x: f64,
        y: f64,
        target: Angle,
    ) -> Result<(), EngineError> {
        trace!(x, y, target_deg = target.as_degrees(), "facade: angle field-centric");
        self.engine.command_heading_hold(x, y, target)
    }

    /// 极坐标驾驶指令
    ///
    /// 转换为笛卡尔分量后走朝向保持通道：
    /// `x = sin(drive_angle) · speed`，`y = cos(drive_angle) · speed`。
    /// 0° 对应 +Y（车体前进轴）是刻意的轴约定，不是常规三角约定。
    /// `robot_angle_deg` 以度给出，在此转换为引擎的角度类型。
    pub fn drive_polar_field_centric(
        &mut self,
        drive_angle: Angle,
        speed: f64,
        robot_angle_deg: f64,
    ) -> Result<(), EngineError> {
        let x = drive_angle.sin() * speed;
        let y = drive_angle.cos() * speed;
        self.drive_angle_field_centric(x, y, Angle::from_degrees(robot_angle_deg))
    }

    /// 循环切换驾驶模式
    ///
    /// 纯状态转移，对引擎无副作用。返回切换后的模式。
    pub fn cycle_mode(&mut self) -> DriveMode {
        let previous = self.mode;
        self.mode = self.mode.cycle();
        debug!(from = %previous, to = %self.mode, "facade: drive mode cycled");
        self.mode
    }

    /// 当前驾驶模式
    pub fn mode(&self) -> DriveMode {
        self.mode
    }

    /// 当前航向角（单位由引擎定义）
    pub fn robot_heading(&self) -> f64 {
        self.engine.yaw()
    }

    /// 周期回调（预留扩展点）
    ///
    /// 由外部调度器每个控制周期调用一次。当前无动作，但调用方必须
    /// 保持每周期一次的契约，后续版本可能在此挂接周期性工作。
    pub fn periodic(&mut self) {}

    /// 发布遥测：当前模式名，其余委托给引擎
    pub fn publish_telemetry(&self, sink: &mut dyn TelemetrySink) {
        sink.publish_str(keys::DRIVE_MODE, self.mode.name());
        self.engine.publish_telemetry(sink);
    }

    /// 引擎句柄（只读）
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// 拆出引擎句柄，消费门面
    pub fn into_engine(self) -> E {
        self.engine
    }
}
