//! 记录型绘制表面
//!
//! 不产生像素，只按顺序记录绘制命令，供测试断言绘制顺序和参数。

use super::{Color, DrawSurface};
use glam::Vec2;

/// 一条绘制命令
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Resize { width: u32, height: u32 },
    Fill(Color),
    Circle {
        center: Vec2,
        diameter: f32,
        color: Color,
    },
}

/// 记录型绘制表面
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// 取出并清空已记录的命令
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// 已记录的圆形数量
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            diameter,
            color,
        });
    }
}
