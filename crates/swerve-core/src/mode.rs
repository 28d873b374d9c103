//! 驾驶模式状态机
//!
//! 定义底盘的驾驶参考系模式，以及驾驶员循环切换模式时的后继关系。
//!
//! # 模式说明
//!
//! - **FieldCentric**: 场地坐标系平移 + 摇杆控制旋转速度
//! - **AngleFieldCentric**: 场地坐标系平移 + 目标朝向闭环保持
//! - **RobotCentric**: 车体坐标系平移（不做朝向旋转变换）
//!
//! # 切换规则
//!
//! `cycle()` 是全函数：每个模式都有确定的后继，循环周期为 3。
//! 从原始整数解码时，越界值一律回落到 `RobotCentric`（已知安全状态），
//! 而不是 panic 或保留未定义状态。

use std::fmt;

/// 驾驶参考系模式
///
/// 同一时刻只有一个模式生效。默认（初始）模式为 `FieldCentric`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum DriveMode {
    /// 场地坐标系模式（默认）
    ///
    /// 平移指令相对场地，旋转速度由驾驶员直接给定。
    #[default]
    FieldCentric = 0,

    /// 带朝向保持的场地坐标系模式
    ///
    /// 平移指令相对场地，车体朝向由单独的闭环保持到目标角度。
    AngleFieldCentric = 1,

    /// 车体坐标系模式
    ///
    /// 平移指令相对车体前进轴，不使用航向角变换。
    RobotCentric = 2,
}

impl DriveMode {
    /// 循环切换到下一个模式
    ///
    /// 后继表：FieldCentric → AngleFieldCentric → RobotCentric → FieldCentric。
    /// 纯状态转移，对驱动引擎无副作用。
    pub fn cycle(self) -> Self {
        match self {
            Self::FieldCentric => Self::AngleFieldCentric,
            Self::AngleFieldCentric => Self::RobotCentric,
            Self::RobotCentric => Self::FieldCentric,
        }
    }

    /// 从 u8 解码
    ///
    /// 越界值回落到 `RobotCentric`：车体坐标系是不依赖航向角的
    /// 已知安全状态。
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::FieldCentric,
            1 => Self::AngleFieldCentric,
            2 => Self::RobotCentric,
            _ => Self::RobotCentric,
        }
    }

    /// 编码为 u8
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// 模式名称（用于遥测发布）
    pub fn name(self) -> &'static str {
        match self {
            Self::FieldCentric => "FieldCentric",
            Self::AngleFieldCentric => "AngleFieldCentric",
            Self::RobotCentric => "RobotCentric",
        }
    }

    /// 是否为场地坐标系模式（含朝向保持变体）
    pub fn is_field_centric(self) -> bool {
        matches!(self, Self::FieldCentric | Self::AngleFieldCentric)
    }
}

impl fmt::Display for DriveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_field_centric() {
        let mode: DriveMode = Default::default();
        assert_eq!(mode, DriveMode::FieldCentric);
    }

    #[test]
    fn test_cycle_successor_table() {
        assert_eq!(DriveMode::FieldCentric.cycle(), DriveMode::AngleFieldCentric);
        assert_eq!(DriveMode::AngleFieldCentric.cycle(), DriveMode::RobotCentric);
        assert_eq!(DriveMode::RobotCentric.cycle(), DriveMode::FieldCentric);
    }

    #[test]
    fn test_cycle_period_is_three() {
        // 从任意模式出发，三次切换回到起点
        for start in [
            DriveMode::FieldCentric,
            DriveMode::AngleFieldCentric,
            DriveMode::RobotCentric,
        ] {
            assert_eq!(start.cycle().cycle().cycle(), start);
        }
    }

    #[test]
    fn test_from_u8_roundtrip() {
        assert_eq!(DriveMode::from_u8(0), DriveMode::FieldCentric);
        assert_eq!(DriveMode::from_u8(1), DriveMode::AngleFieldCentric);
        assert_eq!(DriveMode::from_u8(2), DriveMode::RobotCentric);
        // 越界值回落到 RobotCentric
        assert_eq!(DriveMode::from_u8(3), DriveMode::RobotCentric);
        assert_eq!(DriveMode::from_u8(255), DriveMode::RobotCentric);
    }

    #[test]
    fn test_name() {
        assert_eq!(DriveMode::FieldCentric.name(), "FieldCentric");
        assert_eq!(DriveMode::AngleFieldCentric.name(), "AngleFieldCentric");
        assert_eq!(DriveMode::RobotCentric.name(), "RobotCentric");
        assert_eq!(format!("{}", DriveMode::RobotCentric), "RobotCentric");
    }

    #[test]
    fn test_is_field_centric() {
        assert!(DriveMode::FieldCentric.is_field_centric());
        assert!(DriveMode::AngleFieldCentric.is_field_centric());
        assert!(!DriveMode::RobotCentric.is_field_centric());
    }

    proptest! {
        /// from_u8 是全函数：任何字节都解码为三个合法模式之一
        #[test]
        fn prop_from_u8_total(value: u8) {
            let mode = DriveMode::from_u8(value);
            prop_assert!(matches!(
                mode,
                DriveMode::FieldCentric | DriveMode::AngleFieldCentric | DriveMode::RobotCentric
            ));
        }

        /// 编码后再解码保持不变
        #[test]
        fn prop_u8_roundtrip(value in 0u8..3) {
            let mode = DriveMode::from_u8(value);
            prop_assert_eq!(DriveMode::from_u8(mode.as_u8()), mode);
        }
    }
}
