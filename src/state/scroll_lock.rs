use web_sys::HtmlElement;

use crate::error::{Result, SurfaceError};

/// Suppresses page scrolling by toggling `overflow: hidden` on `<body>`
/// while a touch stroke is in progress.
#[derive(Debug)]
pub struct ScrollLock {
    body: HtmlElement,
    held: bool,
}

impl ScrollLock {
    pub fn new(body: HtmlElement) -> Self {
        Self { body, held: false }
    }

    pub fn for_document() -> Result<Self> {
        let body = web_sys::window()
            .ok_or(SurfaceError::NoWindow)?
            .document()
            .ok_or(SurfaceError::NoDocument)?
            .body()
            .ok_or(SurfaceError::NoBody)?;
        Ok(Self::new(body))
    }

    pub fn lock(&mut self) -> Result<()> {
        self.body.style().set_property("overflow", "hidden")?;
        self.held = true;
        Ok(())
    }

    /// Clears the inline overflow style set by `lock`. Does nothing when the
    /// lock is not held, so an `overflow` set by other code is left alone.
    pub fn release(&mut self) -> Result<()> {
        if !self.held {
            return Ok(());
        }
        self.body.style().remove_property("overflow")?;
        self.held = false;
        Ok(())
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let _ = self.release();
    }
}
