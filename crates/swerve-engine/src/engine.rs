//! 驱动引擎能力 trait
//!
//! 这是 façade 与底层底盘之间的唯一接缝：façade 持有一个独占的
//! `DriveEngine` 句柄，构造后不再更换。硬件实现（逆运动学、模块闭环、
//! CAN 通信）在本仓库范围之外，由实现方提供。

use swerve_core::{Angle, ChassisSpeeds, TelemetrySink};

use crate::error::EngineError;

/// 驱动引擎能力接口
///
/// # 错误语义
///
/// 指令方法的失败原样向上传播：调用方（façade）不包装、不重试。
/// 实现方自行决定对非有限输入的处理方式。
pub trait DriveEngine {
    /// 停止所有运动（等价于零速度指令）
    fn stop(&mut self) -> Result<(), EngineError>;

    /// 车体坐标系速度指令
    fn command_robot_centric(&mut self, speeds: ChassisSpeeds) -> Result<(), EngineError>;

    /// 场地坐标系速度指令
    ///
    /// 实现方负责用当前航向角完成场地系 → 车体系的旋转变换。
    fn command_field_centric(&mut self, speeds: ChassisSpeeds) -> Result<(), EngineError>;

    /// 场地坐标系平移 + 目标朝向保持
    ///
    /// 实现方用单独的朝向闭环把车体朝向拉到 `target`。
    fn command_heading_hold(
        &mut self,
        x: f64,
        y: f64,
        target: Angle,
    ) -> Result<(), EngineError>;

    /// 当前航向角
    ///
    /// 单位与取值范围由实现方定义，本层不做解释。
    fn yaw(&self) -> f64;

    /// 发布引擎自身的遥测数据
    fn publish_telemetry(&self, sink: &mut dyn TelemetrySink);
}
