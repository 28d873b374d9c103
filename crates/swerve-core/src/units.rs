//! 强类型角度单位
//!
//! 内部以弧度存储，避免接口上度/弧度混用。

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// 平面角度（内部为弧度）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle(f64);

impl Angle {
    /// 零角度
    pub const ZERO: Self = Angle(0.0);

    /// 从弧度创建
    pub const fn from_radians(radians: f64) -> Self {
        Angle(radians)
    }

    /// 从度创建
    pub fn from_degrees(degrees: f64) -> Self {
        Angle(degrees.to_radians())
    }

    /// 弧度值
    pub const fn as_radians(self) -> f64 {
        self.0
    }

    /// 度值
    pub fn as_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// 正弦
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    /// 余弦
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    /// 归一化到 (-π, π]
    pub fn normalized(self) -> Self {
        let two_pi = 2.0 * std::f64::consts::PI;
        let mut r = self.0 % two_pi;
        if r <= -std::f64::consts::PI {
            r += two_pi;
        } else if r > std::f64::consts::PI {
            r -= two_pi;
        }
        Angle(r)
    }

    /// 所有分量是否有限
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} rad", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_degree_radian_conversion() {
        let a = Angle::from_degrees(180.0);
        assert!((a.as_radians() - PI).abs() < 1e-12);
        assert!((a.as_degrees() - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_trig() {
        let a = Angle::from_degrees(90.0);
        assert!((a.sin() - 1.0).abs() < 1e-12);
        assert!(a.cos().abs() < 1e-12);
    }

    #[test]
    fn test_normalized() {
        // 370° → 10°
        let a = Angle::from_degrees(370.0).normalized();
        assert!((a.as_degrees() - 10.0).abs() < 1e-9);

        // -270° → 90°
        let b = Angle::from_degrees(-270.0).normalized();
        assert!((b.as_degrees() - 90.0).abs() < 1e-9);

        // 边界：-180° 归一化到 +180°
        let c = Angle::from_degrees(-180.0).normalized();
        assert!((c.as_degrees() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Angle::from_degrees(30.0) + Angle::from_degrees(60.0);
        assert!((a.as_degrees() - 90.0).abs() < 1e-9);

        let b = Angle::from_degrees(30.0) - Angle::from_degrees(60.0);
        assert!((b.as_degrees() + 30.0).abs() < 1e-9);

        let c = -Angle::from_degrees(45.0);
        assert!((c.as_degrees() + 45.0).abs() < 1e-9);
    }
}
