//! 程序化粒子形状生成
//!
//! 将 `(形状, 粒子索引, 粒子总数)` 映射到三维位置（烟花形状还附带
//! 初速度）。球形是完全确定性的；心形、花形、烟花和星云在特定轴上
//! 引入有界随机抖动，随机源由调用方注入，便于在测试中复现。

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// 球面分布半径
const SPHERE_RADIUS: f32 = 3.0;

/// 心形曲线的整体缩放
const HEART_SCALE: f32 = 2.0;

/// 花形的花瓣数
const FLOWER_PETALS: f32 = 6.0;

/// 粒子形状族
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleShape {
    #[default]
    Sphere,
    Heart,
    Flower,
    Firework,
    Nebula,
}

impl ParticleShape {
    /// 按名称解析形状，未知名称回退到球形
    pub fn from_name(name: &str) -> Self {
        match name {
            "sphere" => Self::Sphere,
            "heart" => Self::Heart,
            "flower" => Self::Flower,
            "firework" => Self::Firework,
            "nebula" => Self::Nebula,
            _ => Self::Sphere,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Heart => "heart",
            Self::Flower => "flower",
            Self::Firework => "firework",
            Self::Nebula => "nebula",
        }
    }

    /// 该形状是否携带模拟状态（初速度）
    pub fn has_velocity(&self) -> bool {
        matches!(self, Self::Firework)
    }
}

/// 生成第 `index` 个粒子的位置（烟花形状还返回初速度）
///
/// # 参数
///
/// * `shape` - 形状族
/// * `index` - 粒子索引，`index < count`
/// * `count` - 粒子总数
/// * `rng` - 注入的随机源；传入固定种子即可复现
pub fn generate(
    shape: ParticleShape,
    index: usize,
    count: usize,
    rng: &mut impl Rng,
) -> (Vec3, Option<Vec3>) {
    match shape {
        ParticleShape::Sphere => (sphere(index, count), None),
        ParticleShape::Heart => (heart(index, count, rng), None),
        ParticleShape::Flower => (flower(index, count, rng), None),
        ParticleShape::Firework => {
            let (position, velocity) = firework(index, count, rng);
            (position, Some(velocity))
        }
        ParticleShape::Nebula => (nebula(rng), None),
    }
}

/// 球形：偏移斐波那契球面参数化，近似均匀分布，无随机性
fn sphere(index: usize, count: usize) -> Vec3 {
    let count = count.max(1) as f32;
    let phi = (-1.0 + 2.0 * index as f32 / count).acos();
    let theta = (count * PI).sqrt() * phi;

    Vec3::new(
        SPHERE_RADIUS * theta.cos() * phi.sin(),
        SPHERE_RADIUS * theta.sin() * phi.sin(),
        SPHERE_RADIUS * phi.cos(),
    )
}

/// 心形：经典心形参数曲线，z 轴均匀抖动
fn heart(index: usize, count: usize, rng: &mut impl Rng) -> Vec3 {
    let t = index as f32 / count.max(1) as f32 * TAU;

    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();

    Vec3::new(
        x / 16.0 * HEART_SCALE,
        y / 16.0 * HEART_SCALE,
        rng.gen_range(-0.25..0.25),
    )
}

/// 花形：六瓣玫瑰曲线，z 轴均匀抖动
fn flower(index: usize, count: usize, rng: &mut impl Rng) -> Vec3 {
    let t = index as f32 / count.max(1) as f32 * TAU;
    let r = 2.0 * (FLOWER_PETALS * t).cos();

    Vec3::new(r * t.cos(), r * t.sin(), rng.gen_range(-0.15..0.15))
}

/// 烟花：原点附近的盘状喷射，附带向外的初速度
fn firework(index: usize, count: usize, rng: &mut impl Rng) -> (Vec3, Vec3) {
    let angle = index as f32 / count.max(1) as f32 * TAU;
    let radius = 0.1 + rng.gen::<f32>() * 3.0;

    let position = Vec3::new(
        radius * angle.cos(),
        radius * angle.sin(),
        rng.gen_range(-1.0..1.0),
    );
    let velocity = Vec3::new(
        angle.cos() * (rng.gen::<f32>() + 0.5),
        angle.sin() * (rng.gen::<f32>() + 0.5),
        rng.gen_range(-0.25..0.25),
    );

    (position, velocity)
}

/// 星云：三轴独立均匀分布的纯噪声云
fn nebula(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-3.0..3.0),
        rng.gen_range(-3.0..3.0),
        rng.gen_range(-3.0..3.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_shape_from_name_fallback() {
        assert_eq!(ParticleShape::from_name("heart"), ParticleShape::Heart);
        assert_eq!(ParticleShape::from_name("unknown"), ParticleShape::Sphere);
        assert_eq!(ParticleShape::from_name(""), ParticleShape::Sphere);
    }

    #[test]
    fn test_sphere_radius() {
        let count = 1000;
        for index in 0..count {
            let (position, velocity) = generate(ParticleShape::Sphere, index, count, &mut rng());
            assert!(velocity.is_none());
            assert!((position.length() - 3.0).abs() < 1e-4, "index {}", index);
        }
    }

    #[test]
    fn test_sphere_deterministic() {
        let (a, _) = generate(ParticleShape::Sphere, 17, 1000, &mut rng());
        let (b, _) = generate(ParticleShape::Sphere, 17, 1000, &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_heart_at_t_zero() {
        // t = 0 => x = 0, y = (13 - 5 - 2 - 1) / 16 * scale
        let (position, _) = generate(ParticleShape::Heart, 0, 4, &mut rng());
        assert!(position.x.abs() < 1e-6);
        assert!((position.y - 5.0 / 16.0 * 2.0).abs() < 1e-5);
        assert!(position.z >= -0.25 && position.z < 0.25);
    }

    #[test]
    fn test_flower_jitter_bounds() {
        for index in 0..200 {
            let (position, _) = generate(ParticleShape::Flower, index, 200, &mut rng());
            assert!(position.z >= -0.15 && position.z < 0.15);
            // r = 2cos(6t)，平面半径不超过 2
            assert!(position.truncate().length() <= 2.0 + 1e-5);
        }
    }

    #[test]
    fn test_firework_has_velocity() {
        let (position, velocity) = generate(ParticleShape::Firework, 3, 100, &mut rng());
        let velocity = velocity.expect("firework must carry velocity");

        assert!(position.z >= -1.0 && position.z < 1.0);
        assert!(velocity.z >= -0.25 && velocity.z < 0.25);
        // 平面速度沿发射角向外，模长在 [0.5, 1.5)
        let planar = velocity.truncate().length();
        assert!(planar >= 0.5 && planar < 1.5);
    }

    #[test]
    fn test_nebula_bounds() {
        for _ in 0..100 {
            let (position, velocity) = generate(ParticleShape::Nebula, 0, 100, &mut rng());
            assert!(velocity.is_none());
            assert!(position.abs().max_element() < 3.0);
        }
    }

    #[test]
    fn test_seeded_reproducibility() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for index in 0..50 {
            assert_eq!(
                generate(ParticleShape::Nebula, index, 50, &mut a),
                generate(ParticleShape::Nebula, index, 50, &mut b),
            );
        }
    }
}
