//! CPU 光栅画布
//!
//! 以 RGBA8 像素缓冲实现 [`DrawSurface`]，每帧整体上传到 GPU 纹理。

use super::{Color, DrawSurface};
use glam::Vec2;

/// CPU 画布
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: Color,
    pixels: Vec<Color>,
}

impl Canvas {
    /// 创建指定尺寸的画布，内容为背景色
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![background; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 读取像素，越界返回 `None`
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// 紧密排列的 RGBA8 字节，可直接写入纹理
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    fn blend_at(&mut self, idx: usize, color: Color) {
        let dst = self.pixels[idx];
        self.pixels[idx] = color.blend_over(dst);
    }
}

impl DrawSurface for Canvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize((width as usize) * (height as usize), self.background);
    }

    fn fill(&mut self, color: Color) {
        if color.is_opaque() {
            self.background = color;
            self.pixels.fill(color);
            return;
        }
        for px in self.pixels.iter_mut() {
            *px = color.blend_over(*px);
        }
    }

    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Color) {
        if color.a == 0 || !(diameter > 0.0) || !center.is_finite() {
            return;
        }
        let radius = diameter * 0.5;
        let r2 = radius * radius;

        // 像素中心落在圆内才着色，包围盒裁剪到画布范围
        let min_x = (center.x - radius).floor().max(0.0);
        let min_y = (center.y - radius).floor().max(0.0);
        let max_x = (center.x + radius).ceil().min(self.width as f32);
        let max_y = (center.y + radius).ceil().min(self.height as f32);
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        for y in min_y as u32..max_y as u32 {
            let dy = y as f32 + 0.5 - center.y;
            for x in min_x as u32..max_x as u32 {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    let idx = self.index(x, y);
                    self.blend_at(idx, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_background() {
        let canvas = Canvas::new(4, 3, Color::BLACK);
        assert_eq!(canvas.pixels().len(), 12);
        assert_eq!(canvas.as_bytes().len(), 48);
        assert!(canvas.pixels().iter().all(|&p| p == Color::BLACK));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_fill_circle_covers_center_only() {
        let mut canvas = Canvas::new(20, 20, Color::BLACK);
        canvas.fill_circle(Vec2::new(10.0, 10.0), 6.0, Color::WHITE);

        assert_eq!(canvas.pixel(10, 10), Some(Color::WHITE));
        assert_eq!(canvas.pixel(9, 9), Some(Color::WHITE));
        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(canvas.pixel(14, 10), Some(Color::BLACK));
    }

    #[test]
    fn test_fill_circle_blends_alpha() {
        let mut canvas = Canvas::new(8, 8, Color::BLACK);
        canvas.fill_circle(Vec2::new(4.0, 4.0), 4.0, Color::WHITE.with_alpha(128));
        assert_eq!(canvas.pixel(4, 4).map(|c| c.r), Some(128));

        canvas.fill_circle(Vec2::new(4.0, 4.0), 4.0, Color::WHITE.with_alpha(0));
        assert_eq!(canvas.pixel(4, 4).map(|c| c.r), Some(128));
    }

    #[test]
    fn test_fill_circle_off_surface() {
        let mut canvas = Canvas::new(8, 8, Color::BLACK);
        canvas.fill_circle(Vec2::new(-50.0, 4.0), 10.0, Color::WHITE);
        canvas.fill_circle(Vec2::new(4.0, 500.0), 10.0, Color::WHITE);
        canvas.fill_circle(Vec2::new(f32::NAN, 4.0), 10.0, Color::WHITE);
        assert!(canvas.pixels().iter().all(|&p| p == Color::BLACK));

        // 部分越界的圆只绘制可见部分
        canvas.fill_circle(Vec2::new(0.0, 0.0), 6.0, Color::WHITE);
        assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
    }

    #[test]
    fn test_translucent_fill_fades() {
        let mut canvas = Canvas::new(2, 2, Color::BLACK);
        canvas.fill(Color::WHITE);
        canvas.fill(Color::BLACK.with_alpha(25));
        assert_eq!(canvas.pixel(1, 1).map(|c| c.r), Some(230));
    }

    #[test]
    fn test_resize_clears_to_background() {
        let mut canvas = Canvas::new(8, 6, Color::BLACK);
        canvas.fill_circle(Vec2::new(4.0, 3.0), 4.0, Color::WHITE);
        canvas.resize(4, 3);
        assert_eq!(canvas.size(), (4, 3));
        assert_eq!(canvas.pixels().len(), 12);
        assert!(canvas.pixels().iter().all(|&p| p == Color::BLACK));
    }
}
