/// 统一配置系统
///
/// 提供TOML/JSON配置文件、环境变量覆盖和边界裁剪
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::particles::shapes::ParticleShape;

/// 粒子数下限
pub const MIN_PARTICLE_COUNT: usize = 1_000;
/// 粒子数上限
pub const MAX_PARTICLE_COUNT: usize = 50_000;
/// 默认粒子大小
pub const DEFAULT_PARTICLE_SIZE: f32 = 0.05;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// RGB 颜色，分量范围 `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// 各分量裁剪到 `[0, 1]`
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        // 青色，原版的默认粒子颜色
        Self::new(0.0, 1.0, 1.0)
    }
}

/// 粒子场配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// 粒子数量（有效范围 1_000 - 50_000）
    pub count: usize,

    /// 粒子大小
    pub size: f32,

    /// 粒子颜色
    pub color: Rgb,

    /// 形状族
    pub shape: ParticleShape,

    /// 随机种子；`None` 时使用系统熵源
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            size: DEFAULT_PARTICLE_SIZE,
            color: Rgb::default(),
            shape: ParticleShape::Sphere,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// 将越界值裁剪/回退到安全默认，不报错
    ///
    /// 越界配置在入口处退化而非失败（count=0、负 size 等）。
    pub fn sanitized(mut self) -> Self {
        self.count = self.count.clamp(MIN_PARTICLE_COUNT, MAX_PARTICLE_COUNT);
        if !self.size.is_finite() || self.size <= 0.0 {
            self.size = DEFAULT_PARTICLE_SIZE;
        }
        self.color = self.color.clamped();
        self
    }

    /// 严格验证配置（用于显式检查配置文件）
    pub fn validate(&self) -> ConfigResult<()> {
        if self.count < MIN_PARTICLE_COUNT || self.count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::ValidationError(format!(
                "particle count {} out of range {}..={}",
                self.count, MIN_PARTICLE_COUNT, MAX_PARTICLE_COUNT
            )));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "particle size must be positive, got {}",
                self.size
            )));
        }
        Ok(())
    }
}

/// 引擎主配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 粒子场配置
    pub field: FieldConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("GESTURE_PARTICLES_COUNT") {
            if let Ok(count) = val.parse() {
                self.field.count = count;
            }
        }
        if let Ok(val) = env::var("GESTURE_PARTICLES_SHAPE") {
            self.field.shape = ParticleShape::from_name(&val);
        }
        if let Ok(val) = env::var("GESTURE_PARTICLES_SIZE") {
            if let Ok(size) = val.parse() {
                self.field.size = size;
            }
        }
        if let Ok(val) = env::var("GESTURE_PARTICLES_SEED") {
            if let Ok(seed) = val.parse() {
                self.field.seed = Some(seed);
            }
        }
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.field.validate()
    }

    /// 自动查找并加载配置文件，最后套用环境变量覆盖
    ///
    /// 按以下顺序查找：
    /// 1. ./config.toml
    /// 2. ./config.json
    /// 3. ~/.config/gesture_particles/config.toml
    /// 4. 使用默认配置
    pub fn load_or_default() -> Self {
        let mut config = Self::load_file_or_default();
        config.apply_env_overrides();
        config
    }

    fn load_file_or_default() -> Self {
        if let Ok(config) = Self::from_toml_file("config.toml") {
            tracing::info!(target: "config", "Loaded config from config.toml");
            return config;
        }

        if let Ok(config) = Self::from_json_file("config.json") {
            tracing::info!(target: "config", "Loaded config from config.json");
            return config;
        }

        if let Some(home) = env::var_os("HOME") {
            let config_path = PathBuf::from(home)
                .join(".config")
                .join("gesture_particles")
                .join("config.toml");

            if let Ok(config) = Self::from_toml_file(&config_path) {
                tracing::info!(target: "config", "Loaded config from {:?}", config_path);
                return config;
            }
        }

        tracing::info!(target: "config", "Using default configuration");
        Self::default()
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: LogLevel,

    /// 是否输出到控制台
    pub log_to_console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            log_to_console: true,
        }
    }
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}
