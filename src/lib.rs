//! Decorative freehand drawing background for a static blog, rendered with
//! Yew. Strokes accumulate on a full-window canvas and a label near the pen
//! shows the total distance drawn this session.

pub mod canvas;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod state;
pub mod surface;
pub mod util;

pub use components::App;
pub use config::SurfaceConfig;
pub use error::SurfaceError;
