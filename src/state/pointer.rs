// Pointer coordinate extraction for mouse and single-touch input
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

use crate::model::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    pub fn of(event: &Event) -> Self {
        if event.type_().starts_with("touch") {
            PointerKind::Touch
        } else {
            PointerKind::Mouse
        }
    }
}

/// Client coordinates of the event: the first active touch for touch events,
/// the pointer itself for mouse events. `None` when there is nothing to read
/// (a touch event with no remaining touches, or an unrelated event type).
pub fn pointer_position(event: &Event) -> Option<Point> {
    match PointerKind::of(event) {
        PointerKind::Touch => {
            let touch = event.dyn_ref::<TouchEvent>()?.touches().item(0)?;
            Some(Point::new(touch.client_x() as f64, touch.client_y() as f64))
        }
        PointerKind::Mouse => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            Some(Point::new(mouse.client_x() as f64, mouse.client_y() as f64))
        }
    }
}
