//! 粒子模块
//!
//! 指针附近生成的粒子逐帧漂移、缩小、淡出并消亡。
//!
//! ## 每帧流程
//!
//! ```text
//! tick(input, surface)
//!   ├─ fill(background, fade_alpha)        拖尾淡出
//!   ├─ pressed || frame % interval == 0    生成（不超过上限）
//!   └─ for particle in newest..=oldest
//!        advance → render → is_dead? remove
//! ```
//!
//! ## 使用示例
//!
//! ```
//! use particle_trail::config::ParticleConfig;
//! use particle_trail::particles::ParticleSystem;
//! use particle_trail::platform::FrameInput;
//! use particle_trail::render::{Canvas, Color};
//! use glam::Vec2;
//!
//! let mut canvas = Canvas::new(0, 0, Color::BLACK);
//! let mut system = ParticleSystem::from_config(ParticleConfig::default()).unwrap();
//! system.initialize(&mut canvas, 320, 240);
//!
//! let input = FrameInput { pointer: Vec2::new(160.0, 120.0), pressed: true, frame: 1 };
//! system.tick(&input, &mut canvas);
//! assert_eq!(system.len(), 1);
//! ```

pub mod particle;
pub mod system;


pub use particle::Particle;
pub use system::{ParticleSystem, ParticleSystemStats};
