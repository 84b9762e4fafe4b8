//! # postview-core
//!
//! Core logic for rendering a single image attachment inside a message thread.
//!
//! This crate provides:
//! - File descriptor model and file-type detection
//! - File URL builder (full and preview resolution)
//! - Mount guard and load tickets for lifetime-scoped async completions
//! - **State Reconciler** - keeps cached dimensions in sync with incoming metadata
//! - **Layout Classifier** - derives presentation tags and sizing hints
//! - Render contract consumed by the hosting UI
//!
//! ## Example
//!
//! ```
//! use postview_core::{FileDescriptor, FileUrls, PostId, SingleImageProps, SingleImageView};
//!
//! let file = FileDescriptor::new("f1", "cat.png", "png", 40, 80);
//! let props = SingleImageProps::new(PostId::new("p1"), Some(file)).with_embed_visible(true);
//! let mut view = SingleImageView::new(props);
//! view.on_load_complete();
//!
//! let urls = FileUrls::new("https://chat.example.com").unwrap();
//! let plan = view.render(&urls).unwrap();
//! let thumbnail = plan.thumbnail.unwrap();
//! assert!(thumbnail.classification.min_preview);
//! assert!(thumbnail.classification.portrait_min_preview);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod classify;
mod error;
pub mod file;
pub mod lifetime;
pub mod render;
pub mod urls;
pub mod view;

pub use classify::{
    Classification, LayoutInput, PREVIEW_IMAGE_MIN_DIMENSION, SVG_FALLBACK_HEIGHT, SizingHint,
    SvgSizing, classify,
};
pub use error::{Error, Result};
pub use file::{FileDescriptor, FileId, FileType, PostId};
pub use lifetime::{LoadTicket, MountGuard};
pub use render::{HeaderPlan, OverlayPlan, RenderPlan, TOGGLE_LABEL, ThumbnailPlan, ToggleIcon};
pub use urls::FileUrls;
pub use view::{
    Dimensions, EmbedActions, PointerEvent, SingleImageProps, SingleImageView, ViewState,
    reconcile_dimensions,
};
