//! Builder 模式实现
//!
//! 提供链式构造 [`SimDriveEngine`] 实例的便捷方式。

use tracing::debug;

use crate::config::DrivetrainConfig;
use crate::error::EngineError;
use crate::sim::SimDriveEngine;

/// 默认积分周期（秒，对应 50 Hz 控制循环）
const DEFAULT_CYCLE_PERIOD_S: f64 = 0.02;

/// 仿真引擎 Builder（链式构造）
///
/// # Example
///
/// ```
/// use swerve_engine::SimEngineBuilder;
///
/// // 使用默认底盘配置
/// let engine = SimEngineBuilder::new().build().unwrap();
///
/// // 自定义初始航向角和积分周期
/// let engine = SimEngineBuilder::new()
///     .initial_yaw_deg(90.0)
///     .cycle_period_s(0.01)
///     .build()
///     .unwrap();
/// ```
pub struct SimEngineBuilder {
    config: Option<DrivetrainConfig>,
    initial_yaw_deg: f64,
    cycle_period_s: f64,
}

impl SimEngineBuilder {
    /// 创建新的 Builder
    pub fn new() -> Self {
        SimEngineBuilder {
            config: None,
            initial_yaw_deg: 0.0,
            cycle_period_s: DEFAULT_CYCLE_PERIOD_S,
        }
    }

    /// 设置底盘配置（可选，默认 [`DrivetrainConfig::default`]）
    pub fn config(mut self, config: DrivetrainConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// 设置初始航向角（度，可选，默认 0）
    pub fn initial_yaw_deg(mut self, yaw_deg: f64) -> Self {
        self.initial_yaw_deg = yaw_deg;
        self
    }

    /// 设置每条指令的积分周期（秒，可选，默认 0.02）
    pub fn cycle_period_s(mut self, period_s: f64) -> Self {
        self.cycle_period_s = period_s;
        self
    }

    /// 构建仿真引擎
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidConfig`]: 底盘配置校验失败，或积分周期/
    ///   初始航向角非法
    pub fn build(self) -> Result<SimDriveEngine, EngineError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        if !(self.cycle_period_s > 0.0) || !self.cycle_period_s.is_finite() {
            return Err(EngineError::InvalidConfig(format!(
                "cycle period must be positive and finite, got {}",
                self.cycle_period_s
            )));
        }
        if !self.initial_yaw_deg.is_finite() {
            return Err(EngineError::InvalidConfig(
                "initial yaw must be finite".to_string(),
            ));
        }

        debug!(
            modules = config.modules.len(),
            can_bus = %config.can_bus,
            cycle_period_s = self.cycle_period_s,
            "building sim drive engine"
        );
        Ok(SimDriveEngine::new(
            config,
            self.initial_yaw_deg,
            self.cycle_period_s,
        ))
    }
}

impl Default for SimEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
