//! 引擎层错误类型定义

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 配置无效（模块数不足、CAN ID 冲突、非法数值等）
    #[error("Invalid drivetrain config: {0}")]
    InvalidConfig(String),

    /// 引擎未就绪（未配置或已关闭）
    #[error("Engine not ready")]
    NotReady,

    /// 指令被引擎拒绝（如非有限分量）
    #[error("Command rejected: {0}")]
    Rejected(String),

    /// 配置文件读写错误
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 配置文件解析错误
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// 配置文件序列化错误
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
