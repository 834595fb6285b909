//! 粒子模块
//!
//! 包含程序化形状生成和粒子场模拟：
//! - `shapes` - 五个形状族的位置（和初速度）生成
//! - `field` - 缓冲区所有权、重力积分与缩放/旋转平滑

pub mod field;
pub mod shapes;


pub use field::{ParticleField, MAX_SCALE, MIN_SCALE};
pub use shapes::{generate, ParticleShape};
