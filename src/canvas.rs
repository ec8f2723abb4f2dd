//! Thin wrapper over a `<canvas>` and its 2D context.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::error::{Result, SurfaceError};
use crate::model::{Segment, StrokeStyle};

#[derive(Clone, Debug)]
pub struct Canvas {
    element: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

fn context_2d(element: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    element
        .get_context("2d")?
        .ok_or(SurfaceError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SurfaceError::ContextUnavailable)
}

impl Canvas {
    pub fn new(element: HtmlCanvasElement) -> Result<Self> {
        let context = context_2d(&element)?;
        Ok(Self { element, context })
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        &self.element
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }

    pub fn size(&self) -> (u32, u32) {
        (self.element.width(), self.element.height())
    }

    pub fn apply_stroke_style(&self, style: &StrokeStyle) {
        self.context.set_stroke_style_str(&style.color);
        self.context.set_line_width(style.width);
        self.context.set_line_cap(StrokeStyle::LINE_CAP);
        self.context.set_line_join(StrokeStyle::LINE_JOIN);
    }

    /// Strokes one segment with whatever style the context currently holds.
    /// Existing pixels are left alone.
    pub fn draw_segment(&self, segment: Segment) {
        self.context.begin_path();
        self.context.move_to(segment.from.x, segment.from.y);
        self.context.line_to(segment.to.x, segment.to.y);
        self.context.stroke();
    }

    /// Sets the backing store to `width`×`height`, keeping whatever of the old
    /// pixels fits. Resizing a canvas wipes it, so the content is copied to a
    /// scratch canvas first and drawn back at the origin.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resize_preserving(&self, width: u32, height: u32) -> Result<()> {
        let (old_width, old_height) = self.size();
        if (old_width, old_height) == (width, height) {
            return Ok(());
        }
        if old_width == 0 || old_height == 0 {
            self.element.set_width(width);
            self.element.set_height(height);
            return Ok(());
        }

        let document = self
            .element
            .owner_document()
            .ok_or(SurfaceError::NoDocument)?;
        let scratch = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::Js("scratch element is not a canvas".to_string()))?;
        scratch.set_width(old_width);
        scratch.set_height(old_height);
        context_2d(&scratch)?.draw_image_with_html_canvas_element(&self.element, 0.0, 0.0)?;

        self.element.set_width(width);
        self.element.set_height(height);
        if width > 0 && height > 0 {
            self.context
                .draw_image_with_html_canvas_element(&scratch, 0.0, 0.0)?;
        }
        Ok(())
    }
}

/// Viewport size in CSS pixels (`innerWidth`×`innerHeight`).
pub fn viewport_size(window: &Window) -> Result<(u32, u32)> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width.max(0.0) as u32, height.max(0.0) as u32))
}
