//! 单个粒子
//!
//! 粒子自身只保存运动和外观状态，衰减参数由 [`ParticleConfig`] 传入。

use crate::config::ParticleConfig;
use crate::render::{Color, DrawSurface};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// 粒子
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// 位置（像素）
    pub position: Vec2,
    /// 每帧位移，生命周期内不变
    pub velocity: Vec2,
    /// 直径（像素）
    pub size: f32,
    /// 生命值，同时作为透明度
    pub lifetime: i32,
}

impl Particle {
    /// 在指定位置生成随机粒子
    ///
    /// 速度方向在圆周上均匀分布，大小在 `rules.speed_range` 内均匀采样；
    /// 直径在 `rules.size_range` 内均匀采样。
    pub fn spawn<R: Rng + ?Sized>(position: Vec2, rules: &ParticleConfig, rng: &mut R) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(rules.speed_range.clone());
        Self {
            position,
            velocity: Vec2::from_angle(angle) * speed,
            size: rng.gen_range(rules.size_range.clone()),
            lifetime: rules.lifetime_start,
        }
    }

    /// 用确定的参数构造粒子
    pub fn from_parts(position: Vec2, velocity: Vec2, size: f32, lifetime: i32) -> Self {
        Self {
            position,
            velocity,
            size,
            lifetime,
        }
    }

    /// 推进一帧：移动、缩小、衰减生命值（按此顺序）
    #[inline]
    pub fn advance(&mut self, rules: &ParticleConfig) {
        self.position += self.velocity;
        self.size *= rules.size_decay;
        self.lifetime -= rules.lifetime_decay;
    }

    /// 绘制粒子，不修改任何状态
    ///
    /// 透明度取生命值，截断到 `0..=255`。
    pub fn render(&self, surface: &mut dyn DrawSurface, color: Color) {
        surface.fill_circle(
            self.position,
            self.size,
            color.with_alpha_clamped(self.lifetime),
        );
    }

    #[inline]
    pub fn is_dead(&self, rules: &ParticleConfig) -> bool {
        self.size < rules.min_size || self.lifetime < 0
    }
}
