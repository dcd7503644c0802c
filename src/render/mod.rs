//! 绘制模块
//!
//! 粒子模拟只依赖 [`DrawSurface`] 这一绘制能力：
//!
//! ```text
//! ParticleSystem ──▶ &mut dyn DrawSurface
//!                         ├── Canvas            (CPU 光栅，运行时使用)
//!                         │      └── CanvasPresenter (wgpu 上传并显示)
//!                         └── RecordingSurface  (记录绘制命令，测试使用)
//! ```

pub mod canvas;
pub mod recording;
pub mod presenter;

pub use canvas::Canvas;
pub use recording::{DrawCommand, RecordingSurface};
pub use presenter::CanvasPresenter;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA8 颜色（sRGB，非预乘）
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// 替换透明度
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// 以整数替换透明度，超出 `0..=255` 的值被截断
    pub fn with_alpha_clamped(self, a: i32) -> Self {
        self.with_alpha(a.clamp(0, 255) as u8)
    }

    pub fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }

    /// 源覆盖（source-over）混合：`self` 画在 `dst` 之上
    pub fn blend_over(self, dst: Color) -> Color {
        match self.a {
            0 => dst,
            255 => self,
            a => {
                let a = a as u32;
                let inv = 255 - a;
                let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv + 127) / 255) as u8;
                let out_a = a + (dst.a as u32 * inv + 127) / 255;
                Color::rgba(
                    mix(self.r, dst.r),
                    mix(self.g, dst.g),
                    mix(self.b, dst.b),
                    out_a.min(255) as u8,
                )
            }
        }
    }
}

/// 绘制表面
///
/// 模拟核心通过此 trait 写入像素，从而无需真实窗口即可测试。
pub trait DrawSurface {
    /// 当前尺寸（像素）
    fn size(&self) -> (u32, u32);

    /// 调整尺寸。调整后内容未定义，调用方需要随后 `fill`。
    fn resize(&mut self, width: u32, height: u32);

    /// 用颜色覆盖整个表面；不透明颜色等价于清屏
    fn fill(&mut self, color: Color);

    /// 绘制无描边的实心圆
    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_clamped() {
        assert_eq!(Color::WHITE.with_alpha_clamped(-5).a, 0);
        assert_eq!(Color::WHITE.with_alpha_clamped(300).a, 255);
        assert_eq!(Color::WHITE.with_alpha_clamped(128).a, 128);
    }

    #[test]
    fn test_blend_over() {
        assert_eq!(Color::WHITE.blend_over(Color::BLACK), Color::WHITE);
        assert_eq!(Color::TRANSPARENT.blend_over(Color::WHITE), Color::WHITE);

        let half = Color::WHITE.with_alpha(128).blend_over(Color::BLACK);
        assert_eq!(half.r, 128);
        assert_eq!(half.a, 255);

        // 黑色 25/255 覆盖在白色上
        let faded = Color::BLACK.with_alpha(25).blend_over(Color::WHITE);
        assert_eq!(faded.r, 230);
    }
}
