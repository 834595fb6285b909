//! 统一错误处理模块
//!
//! 提供引擎范围内的统一错误类型定义。
//!
//! 分类与生成路径上不存在致命错误：输入畸形退化为安全默认值，
//! 越界配置在边界处裁剪。错误只出现在基础设施边界（配置文件
//! 读取/解析、IO）。

use thiserror::Error;

use crate::config::ConfigError;

/// 引擎核心错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Initialization error: {0}")]
    Init(String),
}

/// 引擎结果类型别名
pub type EngineResult<T> = Result<T, EngineError>;
