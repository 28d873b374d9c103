//! # Swerve Core
//!
//! 全向底盘（swerve drive）的纯数据层（无硬件依赖）
//!
//! ## 模块
//!
//! - `mode`: 驾驶模式状态机（FieldCentric / AngleFieldCentric / RobotCentric）
//! - `speeds`: 底盘速度指令值类型
//! - `units`: 强类型角度单位
//! - `telemetry`: 键值对遥测发布接口
//!
//! ## 坐标系约定
//!
//! 遵循 WPI 坐标系：X 轴向前，Y 轴向左，逆时针为正旋转。

pub mod mode;
pub mod speeds;
pub mod telemetry;
pub mod units;

// 重新导出常用类型
pub use mode::DriveMode;
pub use speeds::ChassisSpeeds;
pub use telemetry::{TelemetrySink, keys};
pub use units::Angle;
