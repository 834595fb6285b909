//! 粒子场
//!
//! 持有 N 个粒子的位置/速度缓冲区，在形状或数量变化时整体重建，
//! 并随时间推进模拟（烟花变体做重力积分）。同时持有由手势目标驱动
//! 的缩放/旋转指数平滑状态。
//!
//! 缓冲区由粒子场独占；重建时先在本地构造新缓冲区再整体替换，
//! 读取方不会看到半成品数组。

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{FieldConfig, Rgb, MAX_PARTICLE_COUNT, MIN_PARTICLE_COUNT};
use crate::particles::shapes::{self, ParticleShape};

/// 缩放/旋转的指数平滑系数
///
/// 每个 tick 逼近目标值的 10%。已知限制：收敛速度与 `dt` 无关，
/// 未做帧率归一化。
const SMOOTHING_FACTOR: f32 = 0.1;

/// 烟花粒子 z 轴速度每秒衰减量（重力近似）
const GRAVITY: f32 = 0.5;

/// 缩放目标的下限
pub const MIN_SCALE: f32 = 0.5;
/// 缩放目标的上限
pub const MAX_SCALE: f32 = 2.0;

/// 粒子场
///
/// 所有输入在边界处防御性裁剪，任何操作都不会失败。
pub struct ParticleField {
    config: FieldConfig,
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    current_scale: f32,
    target_scale: f32,
    current_rotation: f32,
    target_rotation: f32,
    rng: StdRng,
    dirty: bool,
}

impl ParticleField {
    /// 按配置创建粒子场并生成初始缓冲区
    ///
    /// 越界配置被裁剪到有效范围。`seed` 存在时随机抖动完全可复现。
    pub fn new(config: FieldConfig) -> Self {
        let config = config.sanitized();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut field = Self {
            config,
            positions: Vec::new(),
            velocities: Vec::new(),
            current_scale: 1.0,
            target_scale: 1.0,
            current_rotation: 0.0,
            target_rotation: 0.0,
            rng,
            dirty: false,
        };
        field.rebuild();
        field
    }

    /// 整体重建位置/速度缓冲区
    ///
    /// 新缓冲区先在本地完整构造，再一次性替换旧缓冲区。
    fn rebuild(&mut self) {
        let count = self.config.count;
        let shape = self.config.shape;

        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);

        for index in 0..count {
            let (position, velocity) = shapes::generate(shape, index, count, &mut self.rng);
            positions.push(position);
            velocities.push(velocity.unwrap_or(Vec3::ZERO));
        }

        self.positions = positions;
        self.velocities = velocities;
        self.dirty = true;

        tracing::debug!(
            target: "field",
            "Rebuilt particle buffers: shape={}, count={}",
            shape.name(),
            count
        );
    }

    /// 设置缩放目标，裁剪到 `[0.5, 2.0]`
    pub fn set_scale(&mut self, scale: f32) {
        self.target_scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// 设置旋转目标（弧度，绕 Z 轴），不裁剪
    pub fn set_rotation(&mut self, rotation: f32) {
        self.target_rotation = rotation;
    }

    /// 设置粒子颜色
    pub fn set_color(&mut self, color: Rgb) {
        self.config.color = color.clamped();
    }

    /// 设置粒子数量；相同值为空操作，否则整体重建
    pub fn set_particle_count(&mut self, count: usize) {
        let count = count.clamp(MIN_PARTICLE_COUNT, MAX_PARTICLE_COUNT);
        if count == self.config.count {
            return;
        }
        self.config.count = count;
        self.rebuild();
    }

    /// 设置形状族；相同值为空操作，否则整体重建
    pub fn set_particle_shape(&mut self, shape: ParticleShape) {
        if shape == self.config.shape {
            return;
        }
        self.config.shape = shape;
        self.rebuild();
    }

    /// 推进一个模拟 tick
    ///
    /// 缩放与旋转分别向目标值做指数平滑；烟花形状还对位置做
    /// 欧拉积分并对 z 轴速度施加恒定重力。粒子不消亡、不回收，
    /// 无边界裁剪。
    pub fn advance(&mut self, dt: f32) {
        self.current_scale += (self.target_scale - self.current_scale) * SMOOTHING_FACTOR;
        self.current_rotation += (self.target_rotation - self.current_rotation) * SMOOTHING_FACTOR;

        if self.config.shape == ParticleShape::Firework {
            for (position, velocity) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
                *position += *velocity * dt;
                velocity.z -= GRAVITY * dt;
            }
            self.dirty = true;
        }
    }

    /// 粒子位置
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// 位置缓冲区的扁平视图（每个粒子 3 个分量）
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// 粒子速度（仅烟花形状有意义）
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// 当前（平滑后）缩放
    pub fn scale(&self) -> f32 {
        self.current_scale
    }

    /// 当前（平滑后）旋转（弧度）
    pub fn rotation(&self) -> f32 {
        self.current_rotation
    }

    /// 粒子数量
    pub fn count(&self) -> usize {
        self.config.count
    }

    /// 当前形状族
    pub fn shape(&self) -> ParticleShape {
        self.config.shape
    }

    /// 当前颜色
    pub fn color(&self) -> Rgb {
        self.config.color
    }

    /// 当前配置
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// 取走脏标记
    ///
    /// 返回自上次调用以来位置数据是否失效（重建或积分），
    /// 渲染端据此决定是否重新上传缓冲区。读取后标记清零。
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
