pub mod app;
pub mod distance_label;
pub mod drawing_surface;

pub use app::App;
pub use distance_label::DistanceLabel;
pub use drawing_surface::DrawingSurface;
