//! 手势模块
//!
//! 包含手部关键点数据模型和无状态的手势分类器：
//! - `landmarks` - 关键点、左右手标签等数据类型
//! - `classifier` - 单帧手势分类

pub mod classifier;
pub mod landmarks;

pub use classifier::{
    classify, hand_distance, is_hand_open, pinch_angle, pinch_strength, GestureState,
};
pub use landmarks::{DetectedHand, HandLandmarks, Handedness, Point2D, LANDMARK_COUNT};
