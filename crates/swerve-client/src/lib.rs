//! 客户端接口模块
//!
//! 本模块提供 swerve 底盘的用户侧接口：
//! - [`DriveCommandFacade`] - 驱动指令门面（持有引擎句柄 + 驾驶模式状态机）
//! - [`loop_runner`] - 固定周期控制循环包装器
//!
//! # 使用场景
//!
//! 这是大多数使用方应该依赖的模块：把驾驶员意图（摇杆/极坐标输入、
//! 模式切换请求）翻译成对 [`DriveEngine`](swerve_engine::DriveEngine)
//! 的调用。需要直接操作引擎时使用 `swerve-engine` crate。

pub mod facade;
pub mod loop_runner;

// 重新导出常用类型
pub use facade::DriveCommandFacade;
pub use loop_runner::{LoopConfig, run_drive_loop};
