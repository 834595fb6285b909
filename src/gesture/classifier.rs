//! 手势分类器
//!
//! 将单帧的手部关键点样本转换为紧凑且语义稳定的手势状态。
//! 分类器是无状态的纯函数：每帧从零重新计算整个 [`GestureState`]，
//! 不保留任何历史；平滑处理由下游的粒子场负责。
//!
//! ## 分类规则
//!
//! - 张开检测：以掌根到掌心中部的距离为参考，五个指尖中至少
//!   3 个距掌根超过 1.5 倍参考距离即视为张开（粗糙的几何启发式，
//!   阈值可调，并非解剖学精确）
//! - 捏合强度：拇指尖与食指尖距离越近强度越大，
//!   `clamp(1 - 2 * distance, 0, 1)`
//! - 捏合角度：拇指尖指向食指尖的向量角度（度）
//! - 双手距离：两掌根之间的欧氏距离，裁剪到 `[0, 1]`
//!
//! 任何长度不足的关键点序列只会使对应的计算退化为安全默认值
//! （握拳 / 零强度 / 零角度），不会中断整帧的分类。

use super::landmarks::{
    DetectedHand, HandLandmarks, Handedness, FINGER_TIPS, INDEX_TIP, LANDMARK_COUNT, PALM_BASE,
    PALM_MIDDLE, THUMB_TIP,
};

/// 指尖距离相对掌距的张开判定倍数（可调阈值）
const OPEN_FINGER_RATIO: f32 = 1.5;

/// 判定整手张开所需的最少张开手指数
const OPEN_FINGER_MIN: usize = 3;

/// 检测到至少一只手时的固定置信度
///
/// 简化处理：不按检测质量加权。
const DETECTION_CONFIDENCE: f32 = 0.8;

/// 单帧手势状态快照
///
/// 每帧整体重建，无增量修改。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    /// 左手是否张开
    pub left_hand_open: bool,
    /// 右手是否张开
    pub right_hand_open: bool,
    /// 两手掌根间距离，`[0, 1]`；单手或无手时为 0
    pub hand_distance: f32,
    /// 捏合强度，`[0, 1]`
    pub pinch_strength: f32,
    /// 捏合角度，度，`(-180, 180]`
    pub pinch_angle: f32,
    /// 检测到的手数量（0、1 或 2）
    pub hands_detected: u8,
    /// 检测置信度，`[0, 1]`
    pub confidence: f32,
}

/// 对单帧检测结果进行分类
///
/// 最多消费前两只手；更多的手会被忽略。
///
/// - 无手：所有字段归零
/// - 单手：按其左右手标签赋值张开标志，捏合量取自该手
/// - 双手：按第一只手的标签解析左右（标签为 Left 则第一只为左手，
///   否则反转），捏合量只取解析出的右手
pub fn classify(hands: &[DetectedHand]) -> GestureState {
    let hands = &hands[..hands.len().min(2)];

    let mut state = GestureState {
        hands_detected: hands.len() as u8,
        ..Default::default()
    };

    if hands.is_empty() {
        return state;
    }

    state.confidence = DETECTION_CONFIDENCE;

    match hands {
        [hand] => {
            let open = is_hand_open(&hand.landmarks);
            match hand.handedness {
                Handedness::Left => state.left_hand_open = open,
                Handedness::Right => state.right_hand_open = open,
            }
            state.hand_distance = 0.0;
            state.pinch_strength = pinch_strength(&hand.landmarks);
            state.pinch_angle = pinch_angle(&hand.landmarks);
        }
        [first, second] => {
            // 以第一只手的标签解析左右，第二只取反
            let (left, right) = match first.handedness {
                Handedness::Left => (first, second),
                Handedness::Right => (second, first),
            };

            state.left_hand_open = is_hand_open(&left.landmarks);
            state.right_hand_open = is_hand_open(&right.landmarks);
            state.hand_distance = hand_distance(&left.landmarks, &right.landmarks);

            // 捏合量只取右手
            state.pinch_strength = pinch_strength(&right.landmarks);
            state.pinch_angle = pinch_angle(&right.landmarks);
        }
        _ => unreachable!(),
    }

    state
}

/// 判定一只手是否张开
///
/// 参考距离为掌根（索引 0）到掌心中部（索引 9）的欧氏距离；
/// 五个指尖中距掌根超过 1.5 倍参考距离的视为伸出，
/// 至少 3 个伸出即判定张开。不足 21 个关键点时返回 `false`。
pub fn is_hand_open(landmarks: &HandLandmarks) -> bool {
    if landmarks.len() < LANDMARK_COUNT {
        return false;
    }

    let (Some(palm_base), Some(palm_middle)) =
        (landmarks.get(PALM_BASE), landmarks.get(PALM_MIDDLE))
    else {
        return false;
    };

    let palm_distance = palm_base.distance(&palm_middle);

    let open_fingers = FINGER_TIPS
        .iter()
        .filter_map(|&tip| landmarks.get(tip))
        .filter(|tip| tip.distance(&palm_base) > palm_distance * OPEN_FINGER_RATIO)
        .count();

    open_fingers >= OPEN_FINGER_MIN
}

/// 计算捏合强度
///
/// 取拇指尖（索引 4）与食指尖（索引 8）之间的距离，
/// 距离为 0 时强度饱和到 1，距离 ≥ 0.5（归一化单位）时强度为 0。
pub fn pinch_strength(landmarks: &HandLandmarks) -> f32 {
    let (Some(thumb), Some(index)) = (landmarks.get(THUMB_TIP), landmarks.get(INDEX_TIP)) else {
        return 0.0;
    };

    let distance = thumb.distance(&index);
    (1.0 - distance * 2.0).clamp(0.0, 1.0)
}

/// 计算捏合角度
///
/// 拇指尖指向食指尖的向量的 `atan2` 角度，转换为度，
/// 范围 `(-180, 180]`。关键点缺失时返回 0。
pub fn pinch_angle(landmarks: &HandLandmarks) -> f32 {
    let (Some(thumb), Some(index)) = (landmarks.get(THUMB_TIP), landmarks.get(INDEX_TIP)) else {
        return 0.0;
    };

    (index.y - thumb.y).atan2(index.x - thumb.x).to_degrees()
}

/// 计算两手之间的距离
///
/// 取两只手掌根（各自索引 0）之间的欧氏距离，裁剪到 `[0, 1]`。
pub fn hand_distance(hand1: &HandLandmarks, hand2: &HandLandmarks) -> f32 {
    let (Some(palm1), Some(palm2)) = (hand1.get(PALM_BASE), hand2.get(PALM_BASE)) else {
        return 0.0;
    };

    palm1.distance(&palm2).clamp(0.0, 1.0)
}
