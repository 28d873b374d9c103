//! 底盘速度指令值类型
//!
//! `ChassisSpeeds` 是驱动指令的统一载体：平移分量 (vx, vy) 加旋转分量 omega。
//! 分量的参考系由使用方的驾驶模式决定（场地系或车体系），本类型不做解释。

use std::fmt;

/// 底盘速度指令
///
/// # 设计特性
///
/// - **Copy**：纯值类型，适合每个控制周期按值传递
/// - **无参考系语义**：同一类型在场地系和车体系模式下复用
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChassisSpeeds {
    /// X 方向速度（m/s，前为正）
    pub vx: f64,
    /// Y 方向速度（m/s，左为正）
    pub vy: f64,
    /// 旋转速度（rad/s，逆时针为正）
    pub omega: f64,
}

impl ChassisSpeeds {
    /// 零速度指令
    pub const ZERO: Self = ChassisSpeeds::new(0.0, 0.0, 0.0);

    /// 创建新的速度指令
    pub const fn new(vx: f64, vy: f64, omega: f64) -> Self {
        ChassisSpeeds { vx, vy, omega }
    }

    /// 平移速度大小（不含旋转分量）
    pub fn translation_norm(&self) -> f64 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    /// 所有分量是否有限
    pub fn is_finite(&self) -> bool {
        self.vx.is_finite() && self.vy.is_finite() && self.omega.is_finite()
    }

    /// 是否为零指令
    pub fn is_zero(&self) -> bool {
        self.vx == 0.0 && self.vy == 0.0 && self.omega == 0.0
    }
}

impl fmt::Display for ChassisSpeeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vx={:.3} m/s, vy={:.3} m/s, omega={:.3} rad/s",
            self.vx, self.vy, self.omega
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert!(ChassisSpeeds::ZERO.is_zero());
        assert_eq!(ChassisSpeeds::ZERO, ChassisSpeeds::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_translation_norm() {
        let speeds = ChassisSpeeds::new(3.0, 4.0, 1.0);
        assert!((speeds.translation_norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_finite() {
        assert!(ChassisSpeeds::new(1.0, -2.0, 0.5).is_finite());
        assert!(!ChassisSpeeds::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!ChassisSpeeds::new(0.0, f64::INFINITY, 0.0).is_finite());
    }
}
