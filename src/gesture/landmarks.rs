//! 手部关键点数据模型
//!
//! 定义归一化图像坐标下的手部关键点序列。关键点索引遵循
//! MediaPipe Hands 的解剖学编号：0 = 手腕/掌根，4 = 拇指尖，
//! 8 = 食指尖，9 = 中指掌骨（掌心中部），12/16/20 = 其余指尖。

use serde::{Deserialize, Serialize};

/// 一只完整的手包含的关键点数量
pub const LANDMARK_COUNT: usize = 21;

/// 掌根索引
pub const PALM_BASE: usize = 0;
/// 拇指尖索引
pub const THUMB_TIP: usize = 4;
/// 食指尖索引
pub const INDEX_TIP: usize = 8;
/// 掌心中部索引（中指掌骨）
pub const PALM_MIDDLE: usize = 9;
/// 五个指尖的索引
pub const FINGER_TIPS: [usize; 5] = [4, 8, 12, 16, 20];

/// 归一化图像空间中的一个关键点
///
/// 坐标范围为 `[0, 1]`，原点在图像左上角。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 计算到另一个点的欧氏距离
    pub fn distance(&self, other: &Point2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// 左右手标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

/// 一只手的关键点序列
///
/// 完整的手恰好包含 [`LANDMARK_COUNT`] 个点。长度不足的序列不会被
/// 拒绝，但分类器会对缺失索引的计算退化为安全默认值。
#[derive(Debug, Clone, Default)]
pub struct HandLandmarks {
    points: Vec<Point2D>,
}

impl HandLandmarks {
    /// 从关键点序列创建
    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    /// 获取指定索引的关键点
    pub fn get(&self, index: usize) -> Option<Point2D> {
        self.points.get(index).copied()
    }

    /// 关键点数量
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 是否为一只完整的手（21 个关键点）
    pub fn is_complete(&self) -> bool {
        self.points.len() >= LANDMARK_COUNT
    }
}

/// 单帧中检测到的一只手：关键点序列及其左右手标签
#[derive(Debug, Clone)]
pub struct DetectedHand {
    pub landmarks: HandLandmarks,
    pub handedness: Handedness,
}

impl DetectedHand {
    pub fn new(landmarks: HandLandmarks, handedness: Handedness) -> Self {
        Self {
            landmarks,
            handedness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(0.3, 0.4);
        assert!((a.distance(&b) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_incomplete_hand() {
        let hand = HandLandmarks::from_points(vec![Point2D::default(); 5]);
        assert!(!hand.is_complete());
        assert!(hand.get(4).is_some());
        assert!(hand.get(20).is_none());
    }

    #[test]
    fn test_complete_hand() {
        let hand = HandLandmarks::from_points(vec![Point2D::default(); LANDMARK_COUNT]);
        assert!(hand.is_complete());
        assert_eq!(hand.len(), 21);
    }
}
