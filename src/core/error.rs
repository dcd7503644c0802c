//! 统一错误处理模块
//!
//! 粒子模拟本身没有失败路径（超出上限时只是跳过生成），
//! 这里的错误类型只覆盖外壳层：配置加载、窗口、事件循环和 wgpu 呈现。

use crate::config::ConfigError;
use thiserror::Error;

/// 引擎核心错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Window creation failed: {0}")]
    Window(String),

    #[error("Event loop error: {0}")]
    EventLoop(String),
}

/// 渲染/呈现错误
#[derive(Error, Debug, Clone)]
pub enum RenderError {
    #[error("Failed to create surface: {0}")]
    SurfaceCreation(String),

    #[error("Failed to request adapter: no compatible GPU found")]
    NoAdapter,

    #[error("Failed to request device: {0}")]
    DeviceRequest(String),

    #[error("Surface error: {0}")]
    Surface(String),
}

/// 引擎结果类型别名
pub type EngineResult<T> = Result<T, EngineError>;
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let config_err = ConfigError::ValidationError("max_particles must be > 0".to_string());
        let engine_err: EngineError = config_err.into();
        assert!(matches!(engine_err, EngineError::Config(_)));

        let engine_err: EngineError = RenderError::NoAdapter.into();
        assert!(matches!(engine_err, EngineError::Render(RenderError::NoAdapter)));

        // 文件读取失败经由配置错误上抛
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
        let engine_err: EngineError = ConfigError::from(io_err).into();
        assert!(matches!(
            engine_err,
            EngineError::Config(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_error_display() {
        let err = RenderError::NoAdapter;
        assert_eq!(
            err.to_string(),
            "Failed to request adapter: no compatible GPU found"
        );

        let err = EngineError::Render(RenderError::Surface("lost".to_string()));
        assert_eq!(err.to_string(), "Render error: Surface error: lost");
    }
}
