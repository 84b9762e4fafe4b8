//! Single image view: the state reconciler.
//!
//! A [`SingleImageView`] owns the local state of one image attachment in a
//! thread. Props (descriptor, display flags) are supplied by the host on
//! every update; the view keeps its cached dimensions in sync with them and
//! records load completion and overlay visibility. Embed visibility is never
//! stored here: it is read from props and toggled upstream through
//! [`EmbedActions`].

mod input;
mod state;

pub use input::{EmbedActions, PointerEvent};
pub use state::{Dimensions, ViewState, reconcile_dimensions};

use tracing::debug;

use crate::file::{FileDescriptor, PostId};
use crate::lifetime::{LoadTicket, MountGuard};

/// Inputs supplied by the host for one image view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleImageProps {
    /// Post the attachment belongs to.
    pub post_id: PostId,
    /// Attachment metadata, absent until known.
    pub file_info: Option<FileDescriptor>,
    /// Right-hand panel is open. Passed through to the render plan.
    pub is_rhs_open: bool,
    /// Thread uses compact display.
    pub compact_display: bool,
    /// Embed is expanded. Owned upstream.
    pub is_embed_visible: bool,
}

impl SingleImageProps {
    /// Props with all flags off.
    #[must_use]
    pub fn new(post_id: PostId, file_info: Option<FileDescriptor>) -> Self {
        Self {
            post_id,
            file_info,
            is_rhs_open: false,
            compact_display: false,
            is_embed_visible: false,
        }
    }

    /// Sets the embed-visible flag.
    #[must_use]
    pub fn with_embed_visible(mut self, visible: bool) -> Self {
        self.is_embed_visible = visible;
        self
    }

    /// Sets the compact-display flag.
    #[must_use]
    pub fn with_compact_display(mut self, compact: bool) -> Self {
        self.compact_display = compact;
        self
    }

    /// Sets the right-hand-panel flag.
    #[must_use]
    pub fn with_rhs_open(mut self, open: bool) -> Self {
        self.is_rhs_open = open;
        self
    }
}

/// State reconciler for one image attachment.
#[derive(Debug)]
pub struct SingleImageView {
    props: SingleImageProps,
    state: ViewState,
    guard: MountGuard,
}

impl SingleImageView {
    /// Mounts a view for the given props.
    #[must_use]
    pub fn new(props: SingleImageProps) -> Self {
        let state = ViewState::initial(props.file_info.as_ref());
        Self {
            props,
            state,
            guard: MountGuard::new(),
        }
    }

    /// Current props.
    #[must_use]
    pub const fn props(&self) -> &SingleImageProps {
        &self.props
    }

    /// Current local state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Whether the view is still mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.guard.is_mounted()
    }

    /// Replaces the props and reconciles cached dimensions.
    pub fn set_props(&mut self, props: SingleImageProps) {
        self.props = props;
        self.reconcile();
    }

    fn reconcile(&mut self) {
        let Some(file) = self.props.file_info.as_ref() else {
            return;
        };
        if let Some(dimensions) = reconcile_dimensions(self.state.dimensions, file) {
            debug!(
                post_id = %self.props.post_id,
                from = ?self.state.dimensions,
                to = ?dimensions,
                "Reconciled image dimensions"
            );
            self.state.dimensions = dimensions;
        }
    }

    /// Ticket for the rendering surface to report completion with.
    #[must_use]
    pub fn load_ticket(&self) -> LoadTicket {
        self.guard.ticket()
    }

    /// Records that the rendering surface finished loading the image.
    ///
    /// No-op after [`unmount`](Self::unmount) or without a descriptor.
    pub fn on_load_complete(&mut self) {
        if self.props.file_info.is_none() {
            return;
        }
        if !self.guard.is_mounted() {
            debug!(post_id = %self.props.post_id, "Discarding load completion after teardown");
            return;
        }
        self.state.loaded = true;
    }

    /// Whether `ticket` belongs to this mount and the mount is still alive.
    #[must_use]
    pub fn accepts_ticket(&self, ticket: &LoadTicket) -> bool {
        self.guard.accepts(ticket)
    }

    /// Records a completion reported with `ticket`.
    ///
    /// Tickets from a previous mount or another instance are discarded.
    /// Returns whether the view is now loaded.
    pub fn complete_load(&mut self, ticket: &LoadTicket) -> bool {
        if !self.guard.accepts(ticket) {
            debug!(post_id = %self.props.post_id, "Discarding stale load ticket");
            return false;
        }
        self.on_load_complete();
        self.state.loaded
    }

    /// Opens the full-size overlay, consuming the triggering event.
    pub fn request_overlay(&mut self, event: &mut PointerEvent) {
        if self.props.file_info.is_none() {
            return;
        }
        event.prevent_default();
        self.state.overlay_visible = true;
    }

    /// Closes the full-size overlay.
    pub fn dismiss_overlay(&mut self) {
        if self.props.file_info.is_none() {
            return;
        }
        self.state.overlay_visible = false;
    }

    /// Asks the upstream owner to flip embed visibility for this post.
    pub fn request_visibility_toggle(&self, actions: &mut dyn EmbedActions) {
        if self.props.file_info.is_none() {
            return;
        }
        actions.toggle_embed_visibility(&self.props.post_id);
    }

    /// Tears the view down. Later load completions are ignored.
    pub fn unmount(&self) {
        self.guard.unmount();
    }
}
