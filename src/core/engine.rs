//! 引擎主入口
//!
//! 定义Engine结构和主运行循环

use crate::config::{LoggingConfig, TrailConfig};
use crate::particles::ParticleSystem;
use crate::platform::winit::{build_window, WinitInputTranslator};
use crate::platform::{InputEvent, InputState};
use crate::render::{Canvas, CanvasPresenter};
use glam::Vec2;
use std::sync::Arc;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopWindowTarget};
use winit::window::Window;

use super::error::{EngineError, EngineResult, RenderError};

/// 粒子拖尾主程序
///
/// `Engine` 负责：
/// - 加载配置并初始化日志
/// - 创建窗口和 wgpu 呈现器
/// - 在每次重绘时推进一帧模拟并呈现画布
///
/// # 示例
///
/// ```no_run
/// use particle_trail::core::Engine;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     Engine::run()?;
///     Ok(())
/// }
/// ```
pub struct Engine;

impl Engine {
    /// 运行主循环，直到窗口关闭
    pub fn run() -> EngineResult<()> {
        let mut config = TrailConfig::load_or_default();
        config.apply_env_overrides();

        Self::initialize_logging(&config.logging);
        match &config.source {
            Some(path) => tracing::info!(target: "engine", "Loaded config from {}", path.display()),
            None => tracing::info!(target: "engine", "Using default configuration"),
        }
        config.validate()?;

        let event_loop = EventLoop::new()
            .map_err(|e| EngineError::EventLoop(format!("Failed to create event loop: {}", e)))?;
        let window = build_window(&event_loop, &config.window)?;
        let presenter =
            pollster::block_on(CanvasPresenter::new(window.clone(), config.window.vsync))?;

        let size = window.inner_size();
        let mut canvas = Canvas::new(0, 0, config.particles.background);
        let mut system = ParticleSystem::from_config(config.particles.clone())?;
        system.initialize(&mut canvas, size.width.max(1), size.height.max(1));

        let mut app = TrailApp {
            window,
            presenter,
            canvas,
            system,
            input: InputState::new(),
            translator: WinitInputTranslator::new(),
            stats_interval: config.window.stats_interval,
            failure: None,
        };

        tracing::info!(
            target: "engine",
            "Running with max {} particles",
            config.particles.max_particles
        );
        event_loop
            .run(|event, elwt| app.handle_event(event, elwt))
            .map_err(|e| EngineError::EventLoop(format!("Event loop error: {}", e)))?;

        if let Some(err) = app.failure.take() {
            return Err(err.into());
        }

        let stats = app.system.stats();
        tracing::info!(
            target: "engine",
            "Shutting down after {} frames, {} particles spawned",
            stats.frames,
            stats.total_spawned
        );
        Ok(())
    }

    /// 初始化日志系统
    ///
    /// `RUST_LOG` 设置时优先使用，否则使用配置中的级别。
    fn initialize_logging(config: &LoggingConfig) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.level.as_directive()));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        tracing::info!(target: "engine", "particle_trail starting");
    }
}

/// 事件循环持有的运行时状态
struct TrailApp {
    window: Arc<Window>,
    presenter: CanvasPresenter,
    canvas: Canvas,
    system: ParticleSystem,
    input: InputState,
    translator: WinitInputTranslator,
    stats_interval: u64,
    failure: Option<RenderError>,
}

impl TrailApp {
    fn handle_event(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        match event {
            Event::WindowEvent { window_id, event } if window_id == self.window.id() => {
                self.handle_window_event(&event, elwt);
            }
            // 由显示器刷新驱动帧时钟
            Event::AboutToWait => self.window.request_redraw(),
            _ => {}
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        if let WindowEvent::RedrawRequested = event {
            self.redraw(elwt);
            return;
        }

        let Some(input) = self.translator.translate(event) else {
            return;
        };
        match input {
            InputEvent::WindowCloseRequested => {
                tracing::info!(target: "engine", "Close requested");
                elwt.exit();
            }
            InputEvent::WindowResized { width, height } => {
                if width == 0 || height == 0 {
                    return;
                }
                self.presenter.resize(width, height);
                self.system.on_resize(&mut self.canvas, width, height);
            }
            InputEvent::PointerMoved { x, y } => {
                self.input.handle(&input);
                // 桌面端没有需要拦截的默认手势
                let _ = self.system.on_pointer_move(Vec2::new(x, y));
            }
            other => self.input.handle(&other),
        }
    }

    fn redraw(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let frame = self.input.next_frame();
        self.system.tick(&frame, &mut self.canvas);

        if let Err(e) = self.presenter.present(&self.canvas) {
            tracing::error!(target: "render", "Present failed: {}", e);
            self.failure = Some(e);
            elwt.exit();
            return;
        }

        if self.stats_interval > 0 && frame.frame % self.stats_interval == 0 {
            let stats = self.system.stats();
            tracing::debug!(
                target: "particles",
                frame = frame.frame,
                alive = stats.alive_count,
                spawned = stats.total_spawned,
                culled = stats.total_culled,
                "particle stats"
            );
        }
    }
}
