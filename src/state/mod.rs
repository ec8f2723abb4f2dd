pub mod pointer;
pub mod scroll_lock;

pub use pointer::{pointer_position, PointerKind};
pub use scroll_lock::ScrollLock;
