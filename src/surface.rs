//! The live drawing session: stroke state, canvas and listeners wired
//! together for as long as the surface is mounted.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use tracing::{debug, info, trace, warn};
use web_sys::{Event, EventTarget, HtmlCanvasElement, Window};
use yew::Callback;

use crate::canvas::{Canvas, viewport_size};
use crate::config::SurfaceConfig;
use crate::error::{Result, SurfaceError};
use crate::model::{LabelView, StrokeState, StrokeStyle};
use crate::state::{PointerKind, ScrollLock, pointer_position};

pub struct DrawingSession {
    window: Window,
    canvas: Canvas,
    style: StrokeStyle,
    stroke: Rc<RefCell<StrokeState>>,
    scroll: RefCell<ScrollLock>,
    on_label: Callback<LabelView>,
}

impl DrawingSession {
    /// Sizes `element` to the viewport and prepares a session around it.
    /// `stroke` is shared with the caller so the running distance outlives
    /// remounts.
    pub fn new(
        element: HtmlCanvasElement,
        stroke: Rc<RefCell<StrokeState>>,
        on_label: Callback<LabelView>,
        config: &SurfaceConfig,
    ) -> Result<Rc<Self>> {
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        let canvas = Canvas::new(element)?;
        let (width, height) = viewport_size(&window)?;
        canvas.resize_preserving(width, height)?;
        info!(width, height, "drawing surface mounted");

        Ok(Rc::new(Self {
            window,
            canvas,
            style: config.stroke_style(),
            stroke,
            scroll: RefCell::new(ScrollLock::for_document()?),
            on_label,
        }))
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Starts a stroke if the press landed on the canvas.
    pub fn begin(&self, event: &Event) {
        let canvas_target: &EventTarget = self.canvas.element().as_ref();
        if event.target().as_ref() != Some(canvas_target) {
            trace!(event = %event.type_(), "press outside canvas ignored");
            return;
        }
        let Some(at) = pointer_position(event) else {
            trace!(event = %event.type_(), "press without coordinates ignored");
            return;
        };
        if PointerKind::of(event) == PointerKind::Touch {
            if let Err(error) = self.scroll.borrow_mut().lock() {
                warn!(%error, "could not lock page scroll");
            }
        }
        self.canvas.apply_stroke_style(&self.style);

        let mut stroke = self.stroke.borrow_mut();
        stroke.begin(at);
        debug!(x = at.x, y = at.y, stroke = stroke.strokes(), "stroke started");
        self.on_label.emit(stroke.label_view());
    }

    pub fn extend(&self, event: &Event) {
        let mut stroke = self.stroke.borrow_mut();
        if !stroke.is_drawing() {
            return;
        }
        if event.cancelable() {
            event.prevent_default();
        }
        let Some(to) = pointer_position(event) else {
            return;
        };
        if let Some(segment) = stroke.extend(to) {
            self.canvas.draw_segment(segment);
            self.on_label.emit(stroke.label_view());
        }
    }

    pub fn end(&self, _event: &Event) {
        let mut stroke = self.stroke.borrow_mut();
        let was_drawing = stroke.end();
        if let Err(error) = self.scroll.borrow_mut().release() {
            warn!(%error, "could not restore page scroll");
        }
        if was_drawing {
            debug!(distance = stroke.distance(), "stroke ended");
            self.on_label.emit(stroke.label_view());
        }
    }

    pub fn resize(&self) -> Result<()> {
        let (width, height) = viewport_size(&self.window)?;
        self.canvas.resize_preserving(width, height)?;
        // Resizing resets the context, so an in-flight stroke needs its pen back.
        if self.stroke.borrow().is_drawing() {
            self.canvas.apply_stroke_style(&self.style);
        }
        Ok(())
    }

    /// Registers every input listener. Dropping the returned guards detaches
    /// them all; the session itself is freed with the last one.
    pub fn attach(self: &Rc<Self>) -> Vec<EventListener> {
        let window: &EventTarget = self.window.as_ref();
        let canvas: &EventTarget = self.canvas.element().as_ref();
        vec![
            self.listen(window, "resize", true, |session, _| {
                if let Err(error) = session.resize() {
                    warn!(%error, "resize failed");
                }
            }),
            self.listen(window, "mousedown", false, Self::begin),
            self.listen(window, "mousemove", false, Self::extend),
            self.listen(window, "mouseup", false, Self::end),
            self.listen(canvas, "touchstart", false, Self::begin),
            self.listen(canvas, "touchmove", false, Self::extend),
            self.listen(canvas, "touchend", false, Self::end),
            self.listen(canvas, "touchcancel", false, Self::end),
        ]
    }

    fn listen(
        self: &Rc<Self>,
        target: &EventTarget,
        event_type: &'static str,
        passive: bool,
        handler: fn(&Self, &Event),
    ) -> EventListener {
        let session = Rc::clone(self);
        let options = if passive {
            EventListenerOptions::default()
        } else {
            EventListenerOptions::enable_prevent_default()
        };
        EventListener::new_with_options(target, event_type, options, move |event| {
            handler(&session, event)
        })
    }
}
