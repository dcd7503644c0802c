use super::{ConfigError, ConfigResult};
use crate::impl_default;
use crate::render::Color;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// 粒子参数
///
/// 所有数值都以"每帧"为单位，与帧率无关地逐帧推进。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// 同时存活的最大粒子数
    pub max_particles: usize,
    /// 未按下指针时每隔多少帧生成一个粒子
    pub spawn_interval: u64,
    /// 每帧覆盖在画布上的背景色透明度（拖尾效果）
    pub fade_alpha: u8,
    /// 初始直径范围 `[start, end)`
    pub size_range: Range<f32>,
    /// 速度大小范围 `[start, end)`
    pub speed_range: Range<f32>,
    /// 初始生命值，同时作为初始透明度
    pub lifetime_start: i32,
    /// 每帧生命值衰减
    pub lifetime_decay: i32,
    /// 每帧直径乘数
    pub size_decay: f32,
    /// 直径低于该值即死亡
    pub min_size: f32,
    /// 粒子颜色（透明度由生命值决定）
    pub particle_color: Color,
    /// 背景颜色
    pub background: Color,
    /// 随机种子（None = 使用系统熵）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl_default!(ParticleConfig {
    max_particles: 1000,
    spawn_interval: 2,
    fade_alpha: 25,
    size_range: 5.0..20.0,
    speed_range: 1.0..3.0,
    lifetime_start: 255,
    lifetime_decay: 5,
    size_decay: 0.95,
    min_size: 1.0,
    particle_color: Color::WHITE,
    background: Color::BLACK,
    seed: None,
});

impl ParticleConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_particles == 0 {
            return Err(invalid("max_particles must be greater than 0"));
        }
        if self.spawn_interval == 0 {
            return Err(invalid("spawn_interval must be at least 1"));
        }
        check_range("size_range", &self.size_range)?;
        check_range("speed_range", &self.speed_range)?;
        if !(self.size_decay > 0.0 && self.size_decay <= 1.0) {
            return Err(invalid("size_decay must be in (0, 1]"));
        }
        if self.lifetime_decay < 0 {
            return Err(invalid("lifetime_decay must not be negative"));
        }
        // 直径只会趋近 0，min_size 不为正时尺寸条件永远不成立
        if !(self.min_size > 0.0 && self.min_size.is_finite()) {
            return Err(invalid("min_size must be a positive finite number"));
        }
        let shrinks_away = self.size_decay < 1.0;
        if !shrinks_away && self.lifetime_decay == 0 {
            return Err(invalid(
                "particles never die: size_decay is 1 and lifetime_decay is 0",
            ));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> ConfigError {
    ConfigError::ValidationError(msg.to_string())
}

fn check_range(name: &str, range: &Range<f32>) -> ConfigResult<()> {
    if !(range.start.is_finite() && range.end.is_finite()) {
        return Err(ConfigError::ValidationError(format!(
            "{} must be finite",
            name
        )));
    }
    if range.start <= 0.0 || range.start >= range.end {
        return Err(ConfigError::ValidationError(format!(
            "{} must satisfy 0 < start < end, got {:?}",
            name, range
        )));
    }
    Ok(())
}
