//! # Swerve Engine
//!
//! 驱动引擎能力层：上层（façade）只依赖 [`DriveEngine`] trait，
//! 具体实现（厂商底盘、仿真）在构造期注入。
//!
//! ## 模块
//!
//! - `engine`: `DriveEngine` 能力 trait
//! - `config`: 底盘配置模型（CAN ID、减速比、编码器偏置、闭环增益）
//! - `builder`: 仿真引擎的链式构造器
//! - `sim`: 无硬件依赖的仿真引擎（测试/演示用）
//! - `error`: 引擎层错误类型
//!
//! ## 架构位置
//!
//! ```text
//! swerve-client (DriveCommandFacade)
//!     ↓ DriveEngine trait
//! swerve-engine (此 crate)
//!     ↓ 硬件实现（本仓库外）/ SimDriveEngine（本仓库内）
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod sim;

// 重新导出常用类型
pub use builder::SimEngineBuilder;
pub use config::{DrivetrainConfig, Gains, ModuleConfig};
pub use engine::DriveEngine;
pub use error::EngineError;
pub use sim::{SimCommand, SimDriveEngine, SimObserver};
