//! Input events and upstream delegates.

use crate::file::PostId;

/// A pointer event that triggered a view operation.
///
/// The host performs the event's default action (opening the file
/// externally) only if no handler consumed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerEvent {
    default_prevented: bool,
}

impl PointerEvent {
    /// Creates an unconsumed event.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    /// Suppresses the default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler suppressed the default action.
    #[must_use]
    pub const fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Upstream owner of the per-post embed visibility flag.
pub trait EmbedActions {
    /// Flip embed visibility for `post_id`.
    fn toggle_embed_visibility(&mut self, post_id: &PostId);
}

impl<F> EmbedActions for F
where
    F: FnMut(&PostId),
{
    fn toggle_embed_visibility(&mut self, post_id: &PostId) {
        self(post_id);
    }
}
