//! Geometry and stroke bookkeeping for the drawing surface.
//! Nothing in here touches the DOM, so it is tested natively.

/// A position in viewport (client) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// One straight piece of a stroke, ready to be rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }
}

/// Pen settings applied to the 2D context. Caps and joins are always round.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
}

impl StrokeStyle {
    pub const LINE_CAP: &'static str = "round";
    pub const LINE_JOIN: &'static str = "round";
}

/// Snapshot handed to the label component after each state change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LabelView {
    pub at: Point,
    pub distance: f64,
    pub drawing: bool,
}

impl LabelView {
    /// The label is mounted once anything has been drawn.
    pub fn is_rendered(&self) -> bool {
        self.distance > 0.0
    }

    pub fn opacity(&self) -> f64 {
        if self.drawing { 1.0 } else { 0.0 }
    }
}

/// Drawing state for the whole page session.
///
/// `distance` is the sum of every accepted segment length and is never
/// reset, so it keeps growing across strokes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokeState {
    drawing: bool,
    last: Point,
    distance: f64,
    strokes: u32,
}

impl StrokeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a stroke at `at`. A begin while already drawing restarts the
    /// stroke from the new point without adding distance.
    pub fn begin(&mut self, at: Point) {
        self.drawing = true;
        self.last = at;
        self.strokes += 1;
    }

    /// Moves the pen to `to`. Returns the segment to render, or `None` when no
    /// stroke is active (in which case nothing changes).
    pub fn extend(&mut self, to: Point) -> Option<Segment> {
        if !self.drawing {
            return None;
        }
        let segment = Segment {
            from: self.last,
            to,
        };
        let length = segment.length();
        if length.is_finite() {
            self.distance += length;
        }
        self.last = to;
        Some(segment)
    }

    /// Finishes the current stroke. Returns whether a stroke was active.
    pub fn end(&mut self) -> bool {
        std::mem::replace(&mut self.drawing, false)
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn last(&self) -> Point {
        self.last
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of strokes begun since the surface was created.
    pub fn strokes(&self) -> u32 {
        self.strokes
    }

    pub fn label_view(&self) -> LabelView {
        LabelView {
            at: self.last,
            distance: self.distance,
            drawing: self.drawing,
        }
    }
}
