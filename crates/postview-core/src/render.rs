//! Render contract handed to the hosting UI.
//!
//! The view does not paint anything. [`SingleImageView::render`] describes
//! what the host should draw: the collapsible header, the thumbnail when the
//! embed is expanded, and the overlay once the image has loaded.

use crate::classify::{Classification, LayoutInput, SizingHint, classify};
use crate::file::{FileDescriptor, FileType, PostId};
use crate::urls::FileUrls;
use crate::view::{Dimensions, SingleImageView};

/// Accessible label of the embed toggle button.
pub const TOGGLE_LABEL: &str = "Toggle Embed Visibility";

/// Icon shown on the embed toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Embed expanded.
    MenuDown,
    /// Embed collapsed.
    MenuRight,
}

/// Header row above the thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPlan {
    /// Embed is expanded.
    pub expanded: bool,
    /// Toggle icon.
    pub toggle_icon: ToggleIcon,
    /// Accessible toggle label.
    pub toggle_label: &'static str,
    /// File name, shown only while collapsed. Clicking it opens the overlay.
    pub file_name: Option<String>,
    /// File name uses compact styling.
    pub compact: bool,
}

/// Inline thumbnail, present only while the embed is expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailPlan {
    /// URL the rendering surface should load.
    pub source_url: String,
    /// Target dimensions.
    pub dimensions: Dimensions,
    /// Presentation tags.
    pub classification: Classification,
    /// Inline sizing.
    pub sizing: SizingHint,
    /// Image has loaded; fade it in.
    pub fade_in: bool,
    /// SVG wrapper styling.
    pub is_svg: bool,
    /// Surface should show a loading indicator until completion.
    pub show_loader: bool,
    /// Small images are centred in a minimum-size container.
    pub handle_small_image_container: bool,
}

/// Full-size preview overlay, present once the image has loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayPlan {
    /// Overlay is open.
    pub show: bool,
    /// Files to display.
    pub files: Vec<FileDescriptor>,
    /// Post the files belong to.
    pub post_id: PostId,
    /// Full-resolution URL of the first file.
    pub file_url: String,
}

/// Everything the host needs to draw one image attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Header row.
    pub header: HeaderPlan,
    /// Thumbnail, when expanded.
    pub thumbnail: Option<ThumbnailPlan>,
    /// Overlay, once loaded.
    pub overlay: Option<OverlayPlan>,
    /// Right-hand panel hint, passed through from props.
    pub is_rhs_open: bool,
}

impl SingleImageView {
    /// Describes the current output. `None` when no descriptor is present.
    #[must_use]
    pub fn render(&self, urls: &FileUrls) -> Option<RenderPlan> {
        let props = self.props();
        let file = props.file_info.as_ref()?;
        let state = self.state();
        let expanded = props.is_embed_visible;
        let file_type = file.file_type();

        let header = HeaderPlan {
            expanded,
            toggle_icon: if expanded {
                ToggleIcon::MenuDown
            } else {
                ToggleIcon::MenuRight
            },
            toggle_label: TOGGLE_LABEL,
            file_name: (!expanded).then(|| file.name.clone()),
            compact: props.compact_display,
        };

        let layout = LayoutInput {
            width: state.dimensions.width,
            height: state.dimensions.height,
            file_type,
            embed_visible: expanded,
            compact_display: props.compact_display,
        };

        let thumbnail = classify(&layout).map(|classification| ThumbnailPlan {
            source_url: urls.source_url(file),
            dimensions: state.dimensions,
            sizing: classification.sizing_hint(),
            classification,
            fade_in: state.loaded,
            is_svg: file_type == FileType::Svg,
            show_loader: expanded,
            handle_small_image_container: true,
        });

        let overlay = state.loaded.then(|| OverlayPlan {
            show: state.overlay_visible,
            files: vec![file.clone()],
            post_id: props.post_id.clone(),
            file_url: urls.file_url(&file.id),
        });

        Some(RenderPlan {
            header,
            thumbnail,
            overlay,
            is_rhs_open: props.is_rhs_open,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{PointerEvent, SingleImageProps};

    fn urls() -> FileUrls {
        FileUrls::new("https://chat.example.com").unwrap()
    }

    fn view(file: FileDescriptor, expanded: bool) -> SingleImageView {
        SingleImageView::new(
            SingleImageProps::new(PostId::new("post"), Some(file)).with_embed_visible(expanded),
        )
    }

    #[test]
    fn collapsed_shows_name_and_no_thumbnail() {
        let view = view(FileDescriptor::new("f", "cat.png", "png", 400, 300), false);
        let plan = view.render(&urls()).unwrap();
        assert!(!plan.header.expanded);
        assert_eq!(plan.header.toggle_icon, ToggleIcon::MenuRight);
        assert_eq!(plan.header.file_name.as_deref(), Some("cat.png"));
        assert!(plan.thumbnail.is_none());
    }

    #[test]
    fn expanded_hides_name_and_builds_thumbnail() {
        let file = FileDescriptor::new("f", "cat.png", "png", 400, 300).with_preview_image(true);
        let plan = view(file, true).render(&urls()).unwrap();
        assert_eq!(plan.header.toggle_icon, ToggleIcon::MenuDown);
        assert_eq!(plan.header.file_name, None);

        let thumb = plan.thumbnail.unwrap();
        assert_eq!(thumb.source_url, "https://chat.example.com/api/v4/files/f/preview");
        assert_eq!(thumb.dimensions, Dimensions::new(400, 300));
        assert!(!thumb.fade_in);
        assert!(thumb.show_loader);
        assert!(!thumb.is_svg);
    }

    #[test]
    fn overlay_appears_only_after_load() {
        let mut view = view(FileDescriptor::new("f", "cat.png", "png", 400, 300), true);
        view.request_overlay(&mut PointerEvent::new());
        assert!(view.render(&urls()).unwrap().overlay.is_none());

        view.on_load_complete();
        let plan = view.render(&urls()).unwrap();
        let overlay = plan.overlay.unwrap();
        assert!(overlay.show);
        assert_eq!(overlay.files.len(), 1);
        assert_eq!(overlay.file_url, "https://chat.example.com/api/v4/files/f");
        assert!(plan.thumbnail.unwrap().fade_in);
    }

    #[test]
    fn rhs_flag_passes_through() {
        let props = SingleImageProps::new(
            PostId::new("post"),
            Some(FileDescriptor::new("f", "a.png", "png", 100, 100)),
        )
        .with_rhs_open(true);
        let plan = SingleImageView::new(props).render(&urls()).unwrap();
        assert!(plan.is_rhs_open);
    }
}
