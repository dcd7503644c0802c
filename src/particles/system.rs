//! 粒子系统
//!
//! 持有粒子集合、参数和随机源，负责每帧的淡出、生成、更新、绘制和剔除。

use super::particle::Particle;
use crate::config::{ConfigResult, ParticleConfig};
use crate::platform::FrameInput;
use crate::render::DrawSurface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 粒子系统统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParticleSystemStats {
    /// 当前存活粒子数
    pub alive_count: usize,
    /// 总生成数
    pub total_spawned: u64,
    /// 总剔除数
    pub total_culled: u64,
    /// 本帧生成数
    pub frame_spawned: u32,
    /// 本帧剔除数
    pub frame_culled: u32,
    /// 已执行的帧数
    pub frames: u64,
}

/// 粒子系统
///
/// 粒子按插入顺序保存，数量不超过 `rules.max_particles`。
pub struct ParticleSystem<R = StdRng> {
    particles: Vec<Particle>,
    rules: ParticleConfig,
    rng: R,
    stats: ParticleSystemStats,
}

impl ParticleSystem<StdRng> {
    /// 按配置创建；设置了 `seed` 时结果可复现
    pub fn from_config(rules: ParticleConfig) -> ConfigResult<Self> {
        let rng = match rules.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rules, rng)
    }
}

impl<R: Rng> ParticleSystem<R> {
    /// 使用给定随机源创建
    ///
    /// 参数先经过 [`ParticleConfig::validate`]，保证生成间隔非零、
    /// 采样区间非空且粒子终将死亡。
    pub fn new(rules: ParticleConfig, rng: R) -> ConfigResult<Self> {
        rules.validate()?;
        Ok(Self {
            particles: Vec::with_capacity(rules.max_particles),
            rules,
            rng,
            stats: ParticleSystemStats::default(),
        })
    }

    /// 设置表面尺寸并清为不透明背景
    pub fn initialize(&mut self, surface: &mut dyn DrawSurface, width: u32, height: u32) {
        surface.resize(width, height);
        surface.fill(self.rules.background.with_alpha(u8::MAX));
        tracing::debug!(target: "particles", "Initialized surface {}x{}", width, height);
    }

    /// 执行一帧
    ///
    /// 1. 以半透明背景覆盖画布，形成拖尾
    /// 2. 指针按下或帧号满足间隔且未达上限时，在指针处生成一个粒子
    /// 3. 从最新到最旧依次推进、绘制，死亡的粒子当帧移除
    pub fn tick(&mut self, input: &FrameInput, surface: &mut dyn DrawSurface) {
        let _span = tracing::trace_span!(target: "particles", "tick", frame = input.frame).entered();

        surface.fill(self.rules.background.with_alpha(self.rules.fade_alpha));

        self.stats.frame_spawned = 0;
        if self.should_spawn(input) {
            let particle = Particle::spawn(input.pointer, &self.rules, &mut self.rng);
            self.particles.push(particle);
            self.stats.frame_spawned = 1;
            self.stats.total_spawned += 1;
        }

        // 倒序遍历：移除当前下标只会移动已经访问过的元素
        let mut culled = 0u32;
        for i in (0..self.particles.len()).rev() {
            let particle = &mut self.particles[i];
            particle.advance(&self.rules);
            particle.render(surface, self.rules.particle_color);
            if particle.is_dead(&self.rules) {
                self.particles.remove(i);
                culled += 1;
            }
        }

        self.stats.frame_culled = culled;
        self.stats.total_culled += culled as u64;
        self.stats.alive_count = self.particles.len();
        self.stats.frames += 1;
    }

    /// 本帧是否生成粒子（按下与偶数帧同时满足时也只生成一个）
    pub fn should_spawn(&self, input: &FrameInput) -> bool {
        let on_cadence = input.frame % self.rules.spawn_interval == 0;
        (input.pressed || on_cadence) && self.particles.len() < self.rules.max_particles
    }

    /// 窗口尺寸变化：调整表面并清为不透明背景
    ///
    /// 已有粒子保持绝对坐标和大小，不随尺寸缩放；
    /// 靠近原边缘的粒子可能落在新表面之外。
    pub fn on_resize(&mut self, surface: &mut dyn DrawSurface, width: u32, height: u32) {
        surface.resize(width, height);
        surface.fill(self.rules.background.with_alpha(u8::MAX));
        tracing::debug!(
            target: "particles",
            "Resized to {}x{} with {} live particles",
            width,
            height,
            self.particles.len()
        );
    }

    /// 指针移动不影响模拟；返回 `true` 表示平台默认行为（滚动/平移）被拦截
    pub fn on_pointer_move(&self, _position: Vec2) -> bool {
        true
    }

    /// 直接插入粒子，达到上限时返回 `false`
    pub fn insert(&mut self, particle: Particle) -> bool {
        if self.particles.len() >= self.rules.max_particles {
            return false;
        }
        self.particles.push(particle);
        self.stats.alive_count = self.particles.len();
        true
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.stats.alive_count = 0;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn stats(&self) -> ParticleSystemStats {
        self.stats
    }

    pub fn rules(&self) -> &ParticleConfig {
        &self.rules
    }
}
