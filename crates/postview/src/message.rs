//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use postview_core::PostId;

use crate::model::{AppSettings, Post};
use crate::surface::LoadReport;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Thread
    /// Reload the thread from disk.
    ReloadThread,
    /// Thread loaded.
    ThreadLoaded(Result<Vec<Post>, String>),

    // Image view
    /// Toggle embed visibility for a post.
    ToggleEmbed(PostId),
    /// Thumbnail or file name clicked.
    OpenPreview(PostId),
    /// Close the preview overlay for a post.
    DismissPreview(PostId),
    /// Open a file URL in the system browser.
    OpenOriginal(String),
    /// Rendering surface finished a fetch.
    ImageLoaded(LoadReport),

    // Display
    /// Toggle compact display.
    ToggleCompact,
    /// Toggle between light and dark theme.
    ToggleTheme,
    /// Toggle the right-hand panel.
    ToggleRhs,

    // Settings
    /// Settings loaded.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings saved.
    SettingsSaved(Result<(), String>),

    // Keyboard Events
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Event with no effect.
    Noop,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Close any open preview (Escape).
    Dismiss,
    /// Toggle compact display (Ctrl+D).
    ToggleCompact,
    /// Toggle theme (Ctrl+T).
    ToggleTheme,
    /// Reload thread (F5).
    Reload,
    /// Toggle right-hand panel (Ctrl+B).
    ToggleRhs,
}
