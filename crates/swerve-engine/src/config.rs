//! 底盘配置模型
//!
//! 描述一个三模块 swerve 底盘的全部接线与标定参数：CAN ID、减速比、
//! 编码器偏置、模块安装位置、闭环增益。配置以 TOML 持久化。
//!
//! 默认值对应一台 22"×22" 的三模块底盘（前左、前右、后中）。
//! 编码器偏置必须按实车标定后覆盖默认值。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::EngineError;

/// 闭环增益
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gains {
    /// 比例增益
    pub kp: f64,
    /// 积分增益
    pub ki: f64,
    /// 微分增益
    pub kd: f64,
}

impl Gains {
    /// 创建新的增益组
    pub const fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Gains { kp, ki, kd }
    }
}

impl Default for Gains {
    fn default() -> Self {
        Gains::new(0.0, 0.0, 0.0)
    }
}

/// 单个 swerve 模块的接线与标定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// 模块名称（遥测和日志用）
    pub name: String,
    /// 行进电机 CAN ID
    pub drive_can_id: u8,
    /// 转向电机 CAN ID
    pub steer_can_id: u8,
    /// 绝对编码器 CAN ID
    pub encoder_can_id: u8,
    /// 编码器偏置（圈，实车标定值）
    pub encoder_offset: f64,
    /// 模块安装位置 X（米，车体中心为原点，前为正）
    pub location_x_m: f64,
    /// 模块安装位置 Y（米，左为正）
    pub location_y_m: f64,
}

/// 整车底盘配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrivetrainConfig {
    /// CAN 总线名称
    pub can_bus: String,
    /// IMU（航向角源）CAN ID
    pub imu_can_id: u8,
    /// 行进减速比（电机 → 车轮）
    pub drive_gear_ratio: f64,
    /// 转向减速比（电机 → 编码器）
    pub steer_gear_ratio: f64,
    /// 车轮直径（米）
    pub wheel_diameter_m: f64,
    /// 行进电机定子电流限制（A，防打滑）
    pub stator_current_limit_a: f64,
    /// 转向闭环增益
    pub steer_gains: Gains,
    /// 行进闭环增益
    pub drive_gains: Gains,
    /// 朝向保持闭环增益
    pub heading_gains: Gains,
    /// 各模块配置
    pub modules: Vec<ModuleConfig>,
}

/// 默认轮距（22 英寸，米）
const WHEEL_BASE_M: f64 = 0.5588;

impl Default for DrivetrainConfig {
    fn default() -> Self {
        DrivetrainConfig {
            can_bus: "canfd".to_string(),
            imu_can_id: 1,
            drive_gear_ratio: 6.55,
            steer_gear_ratio: 12.8,
            wheel_diameter_m: 0.1016,
            stator_current_limit_a: 17.0,
            steer_gains: Gains::new(30.0, 0.0, 0.2),
            drive_gains: Gains::new(1.0, 0.0, 0.0),
            heading_gains: Gains::new(5.0, 0.1, 0.0),
            modules: vec![
                ModuleConfig {
                    name: "front_right".to_string(),
                    drive_can_id: 0,
                    steer_can_id: 1,
                    encoder_can_id: 0,
                    encoder_offset: -0.538818,
                    location_x_m: WHEEL_BASE_M / 2.0,
                    location_y_m: -WHEEL_BASE_M / 2.0,
                },
                ModuleConfig {
                    name: "front_left".to_string(),
                    drive_can_id: 2,
                    steer_can_id: 3,
                    encoder_can_id: 1,
                    encoder_offset: -0.474609,
                    location_x_m: WHEEL_BASE_M / 2.0,
                    location_y_m: WHEEL_BASE_M / 2.0,
                },
                ModuleConfig {
                    name: "back".to_string(),
                    drive_can_id: 4,
                    steer_can_id: 5,
                    encoder_can_id: 2,
                    encoder_offset: -0.928467,
                    location_x_m: -WHEEL_BASE_M / 2.0,
                    location_y_m: 0.0,
                },
            ],
        }
    }
}

impl DrivetrainConfig {
    /// 校验配置
    ///
    /// # Errors
    ///
    /// 模块数不足、电机 CAN ID 冲突、编码器 CAN ID 冲突、
    /// 减速比/车轮直径非正、偏置或位置非有限时返回
    /// [`EngineError::InvalidConfig`]。
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.modules.len() < 2 {
            return Err(EngineError::InvalidConfig(format!(
                "at least 2 modules required, got {}",
                self.modules.len()
            )));
        }
        if !(self.drive_gear_ratio > 0.0) || !(self.steer_gear_ratio > 0.0) {
            return Err(EngineError::InvalidConfig(
                "gear ratios must be positive".to_string(),
            ));
        }
        if !(self.wheel_diameter_m > 0.0) {
            return Err(EngineError::InvalidConfig(
                "wheel diameter must be positive".to_string(),
            ));
        }

        // 电机 ID 在行进+转向集合内必须唯一；编码器 ID 在编码器集合内唯一
        // （CTRE 风格：不同设备类型各有独立 ID 空间）
        let mut motor_ids = Vec::new();
        let mut encoder_ids = Vec::new();
        for module in &self.modules {
            for id in [module.drive_can_id, module.steer_can_id] {
                if motor_ids.contains(&id) {
                    return Err(EngineError::InvalidConfig(format!(
                        "duplicate motor CAN id {} (module '{}')",
                        id, module.name
                    )));
                }
                motor_ids.push(id);
            }
            if encoder_ids.contains(&module.encoder_can_id) {
                return Err(EngineError::InvalidConfig(format!(
                    "duplicate encoder CAN id {} (module '{}')",
                    module.encoder_can_id, module.name
                )));
            }
            encoder_ids.push(module.encoder_can_id);

            if !module.encoder_offset.is_finite() {
                return Err(EngineError::InvalidConfig(format!(
                    "non-finite encoder offset (module '{}')",
                    module.name
                )));
            }
            if !module.location_x_m.is_finite() || !module.location_y_m.is_finite() {
                return Err(EngineError::InvalidConfig(format!(
                    "non-finite module location (module '{}')",
                    module.name
                )));
            }
        }
        Ok(())
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> Result<Self, EngineError> {
        let config: DrivetrainConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// 序列化为 TOML 字符串
    pub fn to_toml_string(&self) -> Result<String, EngineError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 从文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 保存配置到文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), EngineError> {
        let content = self.to_toml_string()?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DrivetrainConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.modules.len(), 3);
        assert_eq!(config.modules[2].name, "back");
    }

    #[test]
    fn test_too_few_modules() {
        let mut config = DrivetrainConfig::default();
        config.modules.truncate(1);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_duplicate_motor_id() {
        let mut config = DrivetrainConfig::default();
        config.modules[1].drive_can_id = config.modules[0].steer_can_id;
        let err = config.validate().unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("duplicate motor CAN id"));
    }

    #[test]
    fn test_duplicate_encoder_id() {
        let mut config = DrivetrainConfig::default();
        config.modules[2].encoder_can_id = config.modules[0].encoder_can_id;
        let err = config.validate().unwrap_err();
        assert!(format!("{}", err).contains("duplicate encoder CAN id"));
    }

    #[test]
    fn test_non_finite_offset() {
        let mut config = DrivetrainConfig::default();
        config.modules[0].encoder_offset = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_ratios() {
        let mut config = DrivetrainConfig::default();
        config.drive_gear_ratio = 0.0;
        assert!(config.validate().is_err());

        let mut config = DrivetrainConfig::default();
        config.wheel_diameter_m = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DrivetrainConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = DrivetrainConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        // serde(default)：缺失字段取默认值
        let parsed = DrivetrainConfig::from_toml_str("can_bus = \"can0\"\n").unwrap();
        assert_eq!(parsed.can_bus, "can0");
        assert_eq!(parsed.imu_can_id, 1);
        assert_eq!(parsed.modules.len(), 3);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drivetrain.toml");

        let config = DrivetrainConfig::default();
        config.save(&path).unwrap();

        let loaded = DrivetrainConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DrivetrainConfig::load("/nonexistent/drivetrain.toml").unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }
}
