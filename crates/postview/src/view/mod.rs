//! View components for the application.

mod header;
mod preview_overlay;
mod rhs;
mod single_image;
mod thread;

pub use header::{HeaderState, view_header};
pub use preview_overlay::view_preview_overlay;
pub use rhs::view_rhs;
pub use thread::view_thread;
