//! 键值对遥测发布接口
//!
//! 面板（dashboard）发布的最小抽象：上层只依赖本 trait，
//! 具体的渲染/网络传输由实现方负责（Non-goal，本仓库不实现）。

/// 遥测键名常量
pub mod keys {
    /// 当前驾驶模式
    pub const DRIVE_MODE: &str = "Drive/Mode";
    /// 底盘航向角
    pub const ROBOT_YAW: &str = "Drive/Yaw";
    /// 最近一次速度指令的平移大小
    pub const COMMAND_NORM: &str = "Drive/CommandNorm";
}

/// 键值对遥测发布端
///
/// 实现方决定值的去向（面板、日志、测试缓冲区）。发布失败不向上传递：
/// 遥测是尽力而为的旁路输出，不允许影响控制路径。
pub trait TelemetrySink {
    /// 发布字符串值
    fn publish_str(&mut self, key: &str, value: &str);

    /// 发布数值
    fn publish_f64(&mut self, key: &str, value: f64);
}

/// 丢弃所有发布的空实现（测试和无面板运行时使用）
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn publish_str(&mut self, _key: &str, _value: &str) {}

    fn publish_f64(&mut self, _key: &str, _value: f64) {}
}

/// 记录所有发布的实现（测试用）
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// 按发布顺序记录的字符串条目
    pub strings: Vec<(String, String)>,
    /// 按发布顺序记录的数值条目
    pub numbers: Vec<(String, f64)>,
}

impl RecordingSink {
    /// 创建空的记录端
    pub fn new() -> Self {
        Self::default()
    }

    /// 查找最近一次发布到 `key` 的字符串值
    pub fn last_str(&self, key: &str) -> Option<&str> {
        self.strings
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 查找最近一次发布到 `key` 的数值
    pub fn last_f64(&self, key: &str) -> Option<f64> {
        self.numbers.iter().rev().find(|(k, _)| k == key).map(|(_, v)| *v)
    }
}

impl TelemetrySink for RecordingSink {
    fn publish_str(&mut self, key: &str, value: &str) {
        self.strings.push((key.to_string(), value.to_string()));
    }

    fn publish_f64(&mut self, key: &str, value: f64) {
        self.numbers.push((key.to_string(), value));
    }
}
