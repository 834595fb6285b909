//! 核心模块
//!
//! 包含引擎的核心功能：
//! - `engine` - 主引擎入口和每帧驱动逻辑
//! - `error` - 错误类型定义

pub mod engine;
pub mod error;

// 重新导出错误类型
pub use error::{EngineError, EngineResult};

// 重新导出主要类型
pub use engine::{gesture_targets, Engine};
