use super::InputEvent;
use crate::config::WindowConfig;
use crate::core::error::{EngineError, EngineResult};
use glam::Vec2;
use std::sync::Arc;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

/// 按配置创建窗口
pub fn build_window(event_loop: &EventLoop<()>, config: &WindowConfig) -> EngineResult<Arc<Window>> {
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .build(event_loop)
        .map_err(|e| EngineError::Window(e.to_string()))?;
    Ok(Arc::new(window))
}

/// winit 窗口事件到 [`InputEvent`] 的转换
///
/// winit 的鼠标按键事件不携带坐标，这里记住最近一次光标位置。
#[derive(Debug, Default)]
pub struct WinitInputTranslator {
    cursor: Vec2,
}

impl WinitInputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(InputEvent::PointerMoved {
                    x: self.cursor.x,
                    y: self.cursor.y,
                })
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = (self.cursor.x, self.cursor.y);
                Some(match state {
                    ElementState::Pressed => InputEvent::PointerPressed { x, y },
                    ElementState::Released => InputEvent::PointerReleased { x, y },
                })
            }
            WindowEvent::Touch(touch) => {
                self.cursor = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                let (x, y) = (self.cursor.x, self.cursor.y);
                Some(match touch.phase {
                    TouchPhase::Started => InputEvent::PointerPressed { x, y },
                    TouchPhase::Moved => InputEvent::PointerMoved { x, y },
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        InputEvent::PointerReleased { x, y }
                    }
                })
            }
            WindowEvent::Resized(size) => Some(InputEvent::WindowResized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::CloseRequested => Some(InputEvent::WindowCloseRequested),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::event::{DeviceId, Touch};

    fn device() -> DeviceId {
        // SAFETY: 仅用于构造测试事件，不会传回 winit
        unsafe { DeviceId::dummy() }
    }

    #[test]
    fn test_mouse_button_uses_last_cursor() {
        let mut translator = WinitInputTranslator::new();
        let moved = translator.translate(&WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(12.0, 34.0),
        });
        assert_eq!(moved, Some(InputEvent::PointerMoved { x: 12.0, y: 34.0 }));

        let pressed = translator.translate(&WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Left,
        });
        assert_eq!(pressed, Some(InputEvent::PointerPressed { x: 12.0, y: 34.0 }));

        let right = translator.translate(&WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Right,
        });
        assert_eq!(right, None);
    }

    #[test]
    fn test_touch_counts_as_pointer() {
        let mut translator = WinitInputTranslator::new();
        let touch = |phase| {
            WindowEvent::Touch(Touch {
                device_id: device(),
                phase,
                location: PhysicalPosition::new(5.0, 6.0),
                force: None,
                id: 0,
            })
        };

        assert_eq!(
            translator.translate(&touch(TouchPhase::Started)),
            Some(InputEvent::PointerPressed { x: 5.0, y: 6.0 })
        );
        assert_eq!(
            translator.translate(&touch(TouchPhase::Moved)),
            Some(InputEvent::PointerMoved { x: 5.0, y: 6.0 })
        );
        assert_eq!(
            translator.translate(&touch(TouchPhase::Cancelled)),
            Some(InputEvent::PointerReleased { x: 5.0, y: 6.0 })
        );
    }

    #[test]
    fn test_window_events() {
        let mut translator = WinitInputTranslator::new();
        assert_eq!(
            translator.translate(&WindowEvent::Resized(PhysicalSize::new(400, 300))),
            Some(InputEvent::WindowResized {
                width: 400,
                height: 300
            })
        );
        assert_eq!(
            translator.translate(&WindowEvent::CloseRequested),
            Some(InputEvent::WindowCloseRequested)
        );
        assert_eq!(translator.translate(&WindowEvent::Focused(true)), None);
    }
}
