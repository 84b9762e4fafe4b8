//! Widget styles for the thread, image embeds and preview overlay.

mod buttons;
mod containers;
pub mod palette;
mod scrollables;
mod shadows;

// Re-export container styles
pub use containers::{
    error_banner_style, header_style, image_container_style, min_preview_style,
    overlay_backdrop_style, overlay_panel_style, post_style, rhs_style, thread_style,
};

// Re-export button styles
pub use buttons::{link_button_style, overlay_button_style, toggle_button_style};

pub use scrollables::scrollable_style;
