//! # Particle Trail
//!
//! An interactive particle trail: particles spawn at the pointer, drift,
//! shrink, fade and die, leaving a fading trail on a 2D canvas.
//!
//! ## Architecture
//!
//! - **Simulation**: [`particles::ParticleSystem`] owns the particles, the
//!   tunables and the random source; [`particles::Particle`] advances itself.
//! - **Drawing**: the simulation only sees [`render::DrawSurface`]. At runtime
//!   that is a CPU [`render::Canvas`] shown through a wgpu
//!   [`render::CanvasPresenter`]; tests use [`render::RecordingSurface`].
//! - **Shell**: [`core::Engine`] wires config, logging, the winit window and
//!   the event loop together.
//!
//! ## Modules
//!
//! - [`core`]: engine loop, errors, macros
//! - [`config`]: TOML/JSON configuration with env overrides
//! - [`particles`]: particle lifecycle and per-frame simulation
//! - [`render`]: drawing surfaces and presentation
//! - [`platform`]: input translation and per-frame input state

/// Core functionality: main loop, error types and macros
#[macro_use]
pub mod core;
/// Configuration system
pub mod config;
/// Particle lifecycle and simulation loop
pub mod particles;
/// Platform input abstraction
pub mod platform;
/// Drawing surfaces and wgpu presentation
pub mod render;
