//! 外部协作者的能力抽象
//!
//! 摄像头/关键点检测模型与 3D 渲染管线不属于本核心，这里以
//! capability trait 建模，使核心无需真实摄像头、GPU 或训练好的
//! 模型即可运行和测试：
//! - [`LandmarkSource`] - 按自身节奏产出关键点帧的异步生产者
//! - [`RenderSink`] - 每个显示帧消费一次位置缓冲区与绘制参数

use crate::config::Rgb;
use crate::gesture::landmarks::DetectedHand;

/// 关键点源产出的一帧：零、一或两只手
///
/// 超过两只手的条目会被分类器忽略。
#[derive(Debug, Clone, Default)]
pub struct LandmarkFrame {
    pub hands: Vec<DetectedHand>,
}

impl LandmarkFrame {
    pub fn new(hands: Vec<DetectedHand>) -> Self {
        Self { hands }
    }

    /// 无手的空帧
    pub fn empty() -> Self {
        Self::default()
    }
}

/// 关键点源
///
/// 独立的异步生产者（采集/推理节奏通常低于显示刷新率）。
/// 引擎每 tick 轮询一次，只消费最新状态；没有新帧时分类沿用
/// 上一次的结果，不需要背压或丢帧策略。
pub trait LandmarkSource {
    /// 取走自上次轮询以来的最新帧；无新帧时返回 `None`
    fn poll(&mut self) -> Option<LandmarkFrame>;
}

/// 提交给渲染端的一帧绘制数据
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    /// 扁平位置缓冲区，`3 * count` 个分量
    pub positions: &'a [f32],
    /// 粒子颜色
    pub color: Rgb,
    /// 点精灵大小
    pub size: f32,
    /// 平滑后的缩放
    pub scale: f32,
    /// 平滑后的旋转（弧度，绕 Z 轴）
    pub rotation: f32,
    /// 位置数据自上帧以来是否失效（需要重新上传）
    pub positions_dirty: bool,
}

/// 渲染接收端
///
/// 每个 tick 收到一次当前帧；`positions_dirty` 为真时应在下次
/// 绘制前重新上传位置缓冲区。
pub trait RenderSink {
    fn submit(&mut self, frame: RenderFrame<'_>);
}
