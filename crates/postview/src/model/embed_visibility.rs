//! Per-post embed visibility, owned by the app.

use std::collections::HashMap;

use postview_core::{EmbedActions, PostId};
use tracing::debug;

/// Upstream store of which embeds are expanded.
///
/// Embeds are expanded unless the user collapsed them.
#[derive(Debug, Clone, Default)]
pub struct EmbedVisibility {
    overrides: HashMap<PostId, bool>,
}

impl EmbedVisibility {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the embed for `post_id` is expanded.
    #[must_use]
    pub fn is_visible(&self, post_id: &PostId) -> bool {
        self.overrides.get(post_id).copied().unwrap_or(true)
    }

    /// Drops entries for posts not in `keep`.
    pub fn retain(&mut self, keep: impl Fn(&PostId) -> bool) {
        self.overrides.retain(|id, _| keep(id));
    }
}

impl EmbedActions for EmbedVisibility {
    fn toggle_embed_visibility(&mut self, post_id: &PostId) {
        let visible = !self.is_visible(post_id);
        debug!(%post_id, visible, "Toggled embed visibility");
        self.overrides.insert(post_id.clone(), visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_visible() {
        let store = EmbedVisibility::new();
        assert!(store.is_visible(&PostId::new("p1")));
    }

    #[test]
    fn toggle_flips_only_that_post() {
        let mut store = EmbedVisibility::new();
        let p1 = PostId::new("p1");
        let p2 = PostId::new("p2");

        store.toggle_embed_visibility(&p1);
        assert!(!store.is_visible(&p1));
        assert!(store.is_visible(&p2));

        store.toggle_embed_visibility(&p1);
        assert!(store.is_visible(&p1));
    }

    #[test]
    fn retain_forgets_removed_posts() {
        let mut store = EmbedVisibility::new();
        let p1 = PostId::new("p1");
        store.toggle_embed_visibility(&p1);
        store.retain(|_| false);
        assert!(store.is_visible(&p1));
    }
}
