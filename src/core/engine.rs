//! 引擎主入口
//!
//! 定义Engine结构和每帧驱动逻辑。
//!
//! 单线程协作模型：宿主动画循环每个显示帧调用一次 [`Engine::tick`]，
//! tick 内依次完成关键点轮询、手势分类、目标更新、模拟推进和向
//! 渲染端的提交，全部同步执行，互不阻塞。

use crate::config::{EngineConfig, LogLevel, LoggingConfig, Rgb};
use crate::core::error::EngineResult;
use crate::gesture::{classify, GestureState};
use crate::particles::{ParticleField, ParticleShape};
use crate::pipeline::{LandmarkSource, RenderFrame, RenderSink};
use std::path::Path;

/// 手距映射到缩放目标的基数与增益
const SCALE_BASE: f32 = 0.5;
const SCALE_GAIN: f32 = 1.5;

/// 由手势状态计算缩放/旋转目标
///
/// 缩放随两手距离线性增长（`0.5 + distance * 1.5`），
/// 旋转取捏合角度并转换为弧度。
pub fn gesture_targets(gesture: &GestureState) -> (f32, f32) {
    let scale = SCALE_BASE + gesture.hand_distance * SCALE_GAIN;
    let rotation = gesture.pinch_angle.to_radians();
    (scale, rotation)
}

/// 手势粒子引擎
///
/// `Engine` 将关键点源、手势分类器、粒子场与渲染端连成一条
/// 每帧执行的流水线：
///
/// 1. 轮询 [`LandmarkSource`]，对最新帧做无状态分类
/// 2. 将手势映射为缩放/旋转目标写入粒子场
/// 3. `advance(dt)` 推进平滑与模拟
/// 4. 将位置缓冲区与绘制参数提交给 [`RenderSink`]
///
/// 关键点源的节奏通常低于显示刷新率；没有新帧时沿用上一次的
/// 手势状态，目标值保持不变。
///
/// # 生命周期
///
/// 构造时生成初始缓冲区；[`Engine::shutdown`] 按确定性顺序释放
/// 关键点源、渲染端和缓冲区，此后不会再有任何回调触发。
pub struct Engine<S, R> {
    source: S,
    sink: R,
    field: ParticleField,
    gesture: GestureState,
}

impl<S: LandmarkSource, R: RenderSink> Engine<S, R> {
    /// 按配置创建引擎
    pub fn new(config: EngineConfig, source: S, sink: R) -> Self {
        Self::initialize_logging(&config.logging);
        tracing::info!(target: "engine", "Engine starting");

        Self {
            source,
            sink,
            field: ParticleField::new(config.field),
            gesture: GestureState::default(),
        }
    }

    /// 从TOML配置文件创建引擎
    pub fn from_config_file<P: AsRef<Path>>(path: P, source: S, sink: R) -> EngineResult<Self> {
        let config = EngineConfig::from_toml_file(path)?;
        Ok(Self::new(config, source, sink))
    }

    /// 初始化日志系统
    ///
    /// 配置tracing日志框架。日志级别可以通过`RUST_LOG`环境变量
    /// 控制，未设置时回退到配置文件中的级别。
    fn initialize_logging(config: &LoggingConfig) {
        if !config.log_to_console {
            return;
        }

        let fallback = match config.level {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// 执行一个帧 tick
    ///
    /// `dt` 为距上一帧的秒数。
    pub fn tick(&mut self, dt: f32) {
        if let Some(frame) = self.source.poll() {
            self.gesture = classify(&frame.hands);
            let (scale, rotation) = gesture_targets(&self.gesture);
            self.field.set_scale(scale);
            self.field.set_rotation(rotation);
        }

        self.field.advance(dt);

        let positions_dirty = self.field.take_dirty();
        self.sink.submit(RenderFrame {
            positions: self.field.positions_flat(),
            color: self.field.color(),
            size: self.field.config().size,
            scale: self.field.scale(),
            rotation: self.field.rotation(),
            positions_dirty,
        });
    }

    /// 最近一次分类得到的手势状态
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// 粒子场（只读）
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// 切换形状族；相同值为空操作
    pub fn set_particle_shape(&mut self, shape: ParticleShape) {
        self.field.set_particle_shape(shape);
    }

    /// 调整粒子数量
    pub fn set_particle_count(&mut self, count: usize) {
        self.field.set_particle_count(count);
    }

    /// 调整粒子颜色
    pub fn set_color(&mut self, color: Rgb) {
        self.field.set_color(color);
    }

    /// 关闭引擎并确定性释放资源
    ///
    /// 消费 `self`：关键点源与渲染端随之析构，缓冲区立即释放，
    /// 此后不会再有回调触发。
    pub fn shutdown(self) {
        tracing::info!(target: "engine", "Engine shutting down");
        drop(self.source);
        drop(self.sink);
    }
}
