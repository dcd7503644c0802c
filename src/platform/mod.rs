pub mod winit;

use glam::Vec2;

// ============================================================================
// Input Abstraction
// ============================================================================

/// 平台无关的输入事件
///
/// 触摸与鼠标左键统一视为"指针"。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: f32, y: f32 },
    PointerPressed { x: f32, y: f32 },
    PointerReleased { x: f32, y: f32 },
    WindowResized { width: u32, height: u32 },
    WindowCloseRequested,
}

/// 单帧输入快照
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// 指针位置（像素）
    pub pointer: Vec2,
    /// 指针是否按下
    pub pressed: bool,
    /// 帧号，首帧为 1，单调递增
    pub frame: u64,
}

/// 输入状态
///
/// 累积事件中的指针位置和按下状态，并为每帧分配帧号。
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pointer: Vec2,
    pressed: bool,
    frame: u64,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一个输入事件
    pub fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerMoved { x, y } => {
                self.pointer = Vec2::new(x, y);
            }
            InputEvent::PointerPressed { x, y } => {
                self.pointer = Vec2::new(x, y);
                self.pressed = true;
            }
            InputEvent::PointerReleased { x, y } => {
                self.pointer = Vec2::new(x, y);
                self.pressed = false;
            }
            InputEvent::WindowResized { .. } | InputEvent::WindowCloseRequested => {}
        }
    }

    /// 推进帧号并返回本帧输入
    pub fn next_frame(&mut self) -> FrameInput {
        self.frame += 1;
        FrameInput {
            pointer: self.pointer,
            pressed: self.pressed,
            frame: self.frame,
        }
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// 上一次分配的帧号（尚未开始时为 0）
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_start_at_one() {
        let mut state = InputState::new();
        assert_eq!(state.frame(), 0);
        assert_eq!(state.next_frame().frame, 1);
        assert_eq!(state.next_frame().frame, 2);
    }

    #[test]
    fn test_pointer_tracking() {
        let mut state = InputState::new();
        state.handle(&InputEvent::PointerMoved { x: 3.0, y: 4.0 });
        assert_eq!(state.pointer(), Vec2::new(3.0, 4.0));
        assert!(!state.is_pressed());

        state.handle(&InputEvent::PointerPressed { x: 5.0, y: 6.0 });
        let input = state.next_frame();
        assert!(input.pressed);
        assert_eq!(input.pointer, Vec2::new(5.0, 6.0));

        state.handle(&InputEvent::PointerMoved { x: 7.0, y: 8.0 });
        assert!(state.is_pressed());

        state.handle(&InputEvent::PointerReleased { x: 9.0, y: 1.0 });
        assert!(!state.is_pressed());
        assert_eq!(state.pointer(), Vec2::new(9.0, 1.0));

        state.handle(&InputEvent::WindowResized { width: 10, height: 10 });
        assert_eq!(state.pointer(), Vec2::new(9.0, 1.0));
    }
}
