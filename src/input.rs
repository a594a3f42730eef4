//! Per-frame pointer input relevant to the pull gesture.

use egui::Rect;

/// One frame of pointer input, reduced to what the pull gesture needs.
///
/// Built from egui with [`PullInput::from_ui`], or by hand when driving a
/// [`PullToRefreshState`](crate::PullToRefreshState) without a UI.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PullInput {
    /// Primary button is held and the press started inside the container
    pub pointer_down: bool,
    /// Vertical pointer movement this frame (positive is downward)
    pub drag_delta_y: f32,
    /// Primary button was released this frame
    pub released: bool,
    /// Scrollable body is at its top edge
    pub content_at_top: bool,
    /// Seconds since the previous frame
    pub dt: f32,
}

impl PullInput {
    /// A frame where the pointer is held and moved by `delta_y` over content
    /// scrolled to the top.
    pub fn drag(delta_y: f32) -> Self {
        Self {
            pointer_down: true,
            drag_delta_y: delta_y,
            released: false,
            content_at_top: true,
            dt: 0.0,
        }
    }

    /// A frame where the primary button is released.
    pub fn release() -> Self {
        Self {
            released: true,
            content_at_top: true,
            ..Default::default()
        }
    }

    /// A frame with no pointer activity, advancing animations by `dt`.
    pub fn idle(dt: f32) -> Self {
        Self {
            content_at_top: true,
            dt,
            ..Default::default()
        }
    }

    /// Sets whether the body is scrolled to its top edge.
    pub fn at_top(mut self, content_at_top: bool) -> Self {
        self.content_at_top = content_at_top;
        self
    }

    /// Reads this frame's pointer state for a container occupying `container`.
    ///
    /// Only presses that start inside the container contribute drag movement.
    pub fn from_ui(ui: &egui::Ui, container: Rect, content_at_top: bool) -> Self {
        ui.input(|i| {
            let pressed_inside = i
                .pointer
                .press_origin()
                .is_some_and(|origin| container.contains(origin));
            let pointer_down = pressed_inside && i.pointer.primary_down();

            Self {
                pointer_down,
                drag_delta_y: if pointer_down { i.pointer.delta().y } else { 0.0 },
                released: i.pointer.primary_released(),
                content_at_top,
                dt: i.stable_dt,
            }
        })
    }
}
