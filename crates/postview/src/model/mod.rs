//! Data models for the thread viewer.

mod embed_visibility;
mod post;
mod settings;

pub use embed_visibility::EmbedVisibility;
pub use post::{Post, parse_thread};
pub use settings::{AppSettings, read_settings, settings_path, write_settings};
