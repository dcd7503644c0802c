use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 窗口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// 窗口标题
    pub title: String,

    /// 初始宽度（像素）
    pub width: u32,

    /// 初始高度（像素）
    pub height: u32,

    /// 垂直同步，决定帧时钟是否跟随显示器刷新率
    pub vsync: bool,

    /// 每隔多少帧输出一次统计日志（0 = 关闭）
    pub stats_interval: u64,
}

impl_default!(WindowConfig {
    title: "Particle Trail".to_string(),
    width: 800,
    height: 600,
    vsync: true,
    stats_interval: 300,
});

impl WindowConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ValidationError(format!(
                "Invalid window size {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
