//! Layout classification for image thumbnails.
//!
//! Pure derivation of presentation tags from image dimensions, file type and
//! two display flags. Nothing here is stored; the host recomputes it on every
//! render.

use crate::file::FileType;

/// Images narrower or shorter than this (in pixels) get min-preview styling.
pub const PREVIEW_IMAGE_MIN_DIMENSION: i32 = 50;

/// Container height used for SVGs whose intrinsic height is unknown.
pub const SVG_FALLBACK_HEIGHT: f32 = 350.0;

/// Inputs to [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInput {
    /// Cached image width.
    pub width: i32,
    /// Cached image height.
    pub height: i32,
    /// Attachment file type.
    pub file_type: FileType,
    /// Whether the embed is expanded.
    pub embed_visible: bool,
    /// Whether the thread is shown in compact mode.
    pub compact_display: bool,
}

/// How an SVG thumbnail is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgSizing {
    /// Height unknown: force a fixed container height.
    NoHeight,
    /// Height known: fill the container width, intrinsic aspect ratio decides height.
    WithHeight,
}

impl SvgSizing {
    /// Inline sizing hint for this mode.
    #[must_use]
    pub const fn hint(self) -> SizingHint {
        match self {
            Self::NoHeight => SizingHint {
                fill_width: false,
                container_height: Some(SVG_FALLBACK_HEIGHT),
                max_width_fill: true,
            },
            Self::WithHeight => SizingHint {
                fill_width: true,
                container_height: None,
                max_width_fill: false,
            },
        }
    }
}

/// Inline sizing applied to the thumbnail and its container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizingHint {
    /// Image wrapper spans 100% of the container width.
    pub fill_width: bool,
    /// Fixed container height.
    pub container_height: Option<f32>,
    /// Container width is capped at 100% of its parent.
    pub max_width_fill: bool,
}

/// Presentation tags for one thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    /// Either dimension is below [`PREVIEW_IMAGE_MIN_DIMENSION`].
    pub min_preview: bool,
    /// Refines `min_preview` when the image is taller than wide.
    pub portrait_min_preview: bool,
    /// Compact display mode.
    pub compact: bool,
    /// SVG sizing mode, `None` for non-SVG files.
    pub svg: Option<SvgSizing>,
}

impl Classification {
    /// SVG with unknown height.
    #[must_use]
    pub fn svg_no_height(&self) -> bool {
        self.svg == Some(SvgSizing::NoHeight)
    }

    /// SVG with known height.
    #[must_use]
    pub fn svg_with_height(&self) -> bool {
        self.svg == Some(SvgSizing::WithHeight)
    }

    /// Inline sizing hint; default (no constraints) for non-SVG files.
    #[must_use]
    pub fn sizing_hint(&self) -> SizingHint {
        self.svg.map(SvgSizing::hint).unwrap_or_default()
    }

    /// Style class names, in rule order.
    #[must_use]
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(4);
        if self.min_preview {
            names.push("min-preview");
        }
        if self.portrait_min_preview {
            names.push("min-preview--portrait");
        }
        if self.compact {
            names.push("compact-display");
        }
        if self.svg.is_some() {
            names.push("svg");
        }
        names
    }
}

/// Classifies a thumbnail.
///
/// Returns `None` when the embed is collapsed: no thumbnail is materialized,
/// so there is nothing to classify.
///
/// Unknown metadata (`0 x 0`) counts as min-preview.
#[must_use]
pub fn classify(input: &LayoutInput) -> Option<Classification> {
    if !input.embed_visible {
        return None;
    }

    let mut class = Classification::default();

    if input.width < PREVIEW_IMAGE_MIN_DIMENSION || input.height < PREVIEW_IMAGE_MIN_DIMENSION {
        class.min_preview = true;
        class.portrait_min_preview = input.height > input.width;
    }

    class.compact = input.compact_display;

    if input.file_type == FileType::Svg {
        class.svg = Some(if input.height == 0 {
            SvgSizing::NoHeight
        } else {
            SvgSizing::WithHeight
        });
    }

    Some(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(width: i32, height: i32, file_type: FileType) -> LayoutInput {
        LayoutInput {
            width,
            height,
            file_type,
            embed_visible: true,
            compact_display: false,
        }
    }

    #[test]
    fn small_portrait_png() {
        let class = classify(&input(40, 80, FileType::Image)).unwrap();
        assert!(class.min_preview);
        assert!(class.portrait_min_preview);
        assert!(!class.compact);
        assert_eq!(class.svg, None);
        assert_eq!(class.class_names(), vec!["min-preview", "min-preview--portrait"]);
    }

    #[test]
    fn compact_adds_tag() {
        let mut layout = input(40, 80, FileType::Image);
        layout.compact_display = true;
        let class = classify(&layout).unwrap();
        assert_eq!(
            class.class_names(),
            vec!["min-preview", "min-preview--portrait", "compact-display"]
        );
    }

    #[test]
    fn threshold_is_strict() {
        let class = classify(&input(50, 50, FileType::Image)).unwrap();
        assert!(!class.min_preview);
        assert!(!class.portrait_min_preview);
    }

    #[test]
    fn unknown_dimensions_are_min_preview() {
        let class = classify(&input(0, 0, FileType::Image)).unwrap();
        assert!(class.min_preview);
        assert!(!class.portrait_min_preview);
    }

    #[test]
    fn landscape_small_is_not_portrait() {
        let class = classify(&input(300, 20, FileType::Image)).unwrap();
        assert!(class.min_preview);
        assert!(!class.portrait_min_preview);
    }

    #[test]
    fn svg_without_height_gets_fixed_container() {
        let class = classify(&input(0, 0, FileType::Svg)).unwrap();
        assert!(class.svg_no_height());
        assert!(!class.svg_with_height());
        let hint = class.sizing_hint();
        assert_eq!(hint.container_height, Some(SVG_FALLBACK_HEIGHT));
        assert!(hint.max_width_fill);
        assert!(!hint.fill_width);
    }

    #[test]
    fn svg_with_height_fills_width() {
        let class = classify(&input(300, 200, FileType::Svg)).unwrap();
        assert!(class.svg_with_height());
        let hint = class.sizing_hint();
        assert!(hint.fill_width);
        assert_eq!(hint.container_height, None);
    }

    #[test]
    fn non_svg_has_no_sizing_hint() {
        let class = classify(&input(300, 200, FileType::Image)).unwrap();
        assert_eq!(class.sizing_hint(), SizingHint::default());
    }

    #[test]
    fn collapsed_embed_is_not_classified() {
        let mut layout = input(10, 10, FileType::Svg);
        layout.embed_visible = false;
        assert_eq!(classify(&layout), None);
    }

    #[test]
    fn negative_dimensions_are_total() {
        let class = classify(&input(-5, -1, FileType::Image)).unwrap();
        assert!(class.min_preview);
        assert!(class.portrait_min_preview);
    }

    proptest! {
        #[test]
        fn large_images_never_min_preview(w in 50i32..10_000, h in 50i32..10_000) {
            let class = classify(&input(w, h, FileType::Image)).unwrap();
            prop_assert!(!class.min_preview);
            prop_assert!(!class.portrait_min_preview);
        }

        #[test]
        fn small_side_is_min_preview(small in 0i32..50, other in 0i32..10_000, swap: bool) {
            let (w, h) = if swap { (other, small) } else { (small, other) };
            let class = classify(&input(w, h, FileType::Image)).unwrap();
            prop_assert!(class.min_preview);
            prop_assert_eq!(class.portrait_min_preview, h > w);
        }

        #[test]
        fn compact_tag_mirrors_flag(w in 0i32..500, h in 0i32..500, compact: bool) {
            let mut layout = input(w, h, FileType::Image);
            layout.compact_display = compact;
            prop_assert_eq!(classify(&layout).unwrap().compact, compact);
        }
    }
}
