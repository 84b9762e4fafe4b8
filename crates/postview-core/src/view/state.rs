//! View state and dimension reconciliation.

use crate::file::FileDescriptor;

/// Width and height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Dimensions {
    /// Creates a dimension pair.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Natural dimensions of a descriptor.
    #[must_use]
    pub const fn of(file: &FileDescriptor) -> Self {
        Self::new(file.width, file.height)
    }
}

/// Local state of one image view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// The rendering surface reported a successful load for this mount.
    pub loaded: bool,
    /// The full-size overlay is open.
    pub overlay_visible: bool,
    /// Last observed descriptor dimensions, `0 x 0` before any descriptor.
    pub dimensions: Dimensions,
}

impl ViewState {
    /// Initial state for an optional descriptor.
    #[must_use]
    pub fn initial(file: Option<&FileDescriptor>) -> Self {
        Self {
            loaded: false,
            overlay_visible: false,
            dimensions: file.map(Dimensions::of).unwrap_or_default(),
        }
    }
}

/// Computes the dimension patch for a newly observed descriptor.
///
/// Returns the descriptor's pair when it differs from `cached`, `None` when
/// nothing changed.
#[must_use]
pub fn reconcile_dimensions(cached: Dimensions, file: &FileDescriptor) -> Option<Dimensions> {
    let observed = Dimensions::of(file);
    (observed != cached).then_some(observed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_without_descriptor_is_zero() {
        let state = ViewState::initial(None);
        assert_eq!(state.dimensions, Dimensions::new(0, 0));
        assert!(!state.loaded);
        assert!(!state.overlay_visible);
    }

    #[test]
    fn initial_copies_descriptor() {
        let file = FileDescriptor::new("f", "a.png", "png", 640, 480);
        assert_eq!(
            ViewState::initial(Some(&file)).dimensions,
            Dimensions::new(640, 480)
        );
    }

    #[test]
    fn unchanged_descriptor_yields_no_patch() {
        let file = FileDescriptor::new("f", "a.png", "png", 640, 480);
        assert_eq!(reconcile_dimensions(Dimensions::new(640, 480), &file), None);
    }

    #[test]
    fn either_side_changing_yields_patch() {
        let file = FileDescriptor::new("f", "a.png", "png", 640, 481);
        assert_eq!(
            reconcile_dimensions(Dimensions::new(640, 480), &file),
            Some(Dimensions::new(640, 481))
        );

        let file = FileDescriptor::new("f", "a.png", "png", 1, 480);
        assert_eq!(
            reconcile_dimensions(Dimensions::new(640, 480), &file),
            Some(Dimensions::new(1, 480))
        );
    }
}
