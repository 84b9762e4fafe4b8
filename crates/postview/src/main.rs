//! `PostView` - desktop viewer for message threads with inline image attachments.
//!
//! Built with Rust and the iced GUI framework. Image attachment state lives in
//! `postview-core`; this crate owns the window, the thread and the image fetches.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod logging;
mod message;
mod model;
mod style;
mod surface;
mod view;

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, container, row, stack, text};
use iced::{Element, Length, Subscription, Task};
use postview_core::{FileUrls, PointerEvent, PostId, RenderPlan, SingleImageProps, SingleImageView};
use tracing::{debug, info, warn};

use message::{KeyboardAction, Message};
use model::{
    AppSettings, EmbedVisibility, Post, parse_thread, read_settings, settings_path, write_settings,
};
use surface::{SurfaceImage, SurfaceState};
use view::HeaderState;

/// Thread shown when no `thread_path` is configured.
const DEMO_THREAD: &str = include_str!("../assets/demo_thread.json");

fn main() -> iced::Result {
    logging::init();

    info!("Starting PostView");

    iced::application(PostView::new, PostView::update, PostView::view)
        .title("PostView")
        .subscription(PostView::subscription)
        .run()
}

/// Main application state.
struct PostView {
    /// Persisted settings.
    settings: AppSettings,
    /// URL builder for the configured server. `None` if the URL is invalid.
    urls: Option<FileUrls>,
    /// Posts in the current thread.
    posts: Vec<Post>,
    /// One mounted view per single-image post.
    embeds: HashMap<PostId, SingleImageView>,
    /// Fetched pictures, keyed by post.
    surfaces: HashMap<PostId, SurfaceImage>,
    /// Expanded/collapsed state of each embed.
    visibility: EmbedVisibility,
    /// Whether the right-hand panel is open.
    is_rhs_open: bool,
    /// Whether the thread is being (re)loaded.
    is_loading_thread: bool,
    /// Error message to display.
    error_message: Option<String>,
}

impl Default for PostView {
    fn default() -> Self {
        Self {
            settings: AppSettings::default(),
            urls: None,
            posts: Vec::new(),
            embeds: HashMap::new(),
            surfaces: HashMap::new(),
            visibility: EmbedVisibility::new(),
            is_rhs_open: false,
            is_loading_thread: true,
            error_message: None,
        }
    }
}

impl PostView {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        app.apply_theme();
        let settings_task = Task::perform(load_settings(), Message::SettingsLoaded);
        (app, settings_task)
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        style::widgets::palette::set_theme(self.settings.theme_mode);
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SettingsLoaded(result) => {
                match result {
                    Ok(settings) => {
                        info!(
                            "Settings loaded: theme={:?}, server={}",
                            settings.theme_mode, settings.server_url
                        );
                        self.settings = settings;
                    }
                    Err(e) => {
                        info!("Failed to load settings, using defaults: {}", e);
                    }
                }
                self.apply_theme();
                self.urls = match FileUrls::new(&self.settings.server_url) {
                    Ok(urls) => Some(urls),
                    Err(e) => {
                        warn!("Invalid server URL: {}", e);
                        self.error_message = Some(e.to_string());
                        None
                    }
                };
                return self.reload_thread();
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    self.error_message = Some(format!("Failed to save settings: {e}"));
                }
            }
            Message::ReloadThread => return self.reload_thread(),
            Message::ThreadLoaded(result) => {
                self.is_loading_thread = false;
                match result {
                    Ok(posts) => {
                        info!("Loaded thread with {} posts", posts.len());
                        self.posts = posts;
                        return self.sync_embeds();
                    }
                    Err(e) => {
                        warn!("Failed to load thread: {}", e);
                        self.error_message = Some(format!("Failed to load thread: {e}"));
                    }
                }
            }
            Message::ToggleEmbed(post_id) => {
                if let Some(view) = self.embeds.get(&post_id) {
                    view.request_visibility_toggle(&mut self.visibility);
                    return self.sync_embeds();
                }
            }
            Message::OpenPreview(post_id) => {
                if let Some(url) = self.open_preview(&post_id) {
                    return Task::done(Message::OpenOriginal(url));
                }
            }
            Message::DismissPreview(post_id) => {
                if let Some(view) = self.embeds.get_mut(&post_id) {
                    view.dismiss_overlay();
                }
            }
            Message::OpenOriginal(url) => {
                debug!(%url, "Opening original");
                if let Err(e) = opener::open(&url) {
                    warn!("Failed to open {}: {}", url, e);
                    self.error_message = Some(format!("Failed to open {url}: {e}"));
                }
            }
            Message::ImageLoaded(report) => self.finish_load(report),
            Message::ToggleCompact => {
                self.settings.compact_display = !self.settings.compact_display;
                return Task::batch([self.sync_embeds(), self.save_settings()]);
            }
            Message::ToggleTheme => {
                self.settings.theme_mode = self.settings.theme_mode.toggled();
                self.apply_theme();
                return self.save_settings();
            }
            Message::ToggleRhs => {
                self.is_rhs_open = !self.is_rhs_open;
                return self.sync_embeds();
            }
            Message::KeyPressed(action) => return self.handle_keyboard_action(action),
            Message::Noop => {}
        }
        Task::none()
    }

    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::Dismiss => {
                for view in self.embeds.values_mut() {
                    if view.state().overlay_visible {
                        view.dismiss_overlay();
                    }
                }
                Task::none()
            }
            KeyboardAction::ToggleCompact => Task::done(Message::ToggleCompact),
            KeyboardAction::ToggleTheme => Task::done(Message::ToggleTheme),
            KeyboardAction::Reload => Task::done(Message::ReloadThread),
            KeyboardAction::ToggleRhs => Task::done(Message::ToggleRhs),
        }
    }

    fn reload_thread(&mut self) -> Task<Message> {
        self.is_loading_thread = true;
        Task::perform(
            load_thread(self.settings.thread_path.clone()),
            Message::ThreadLoaded,
        )
    }

    fn save_settings(&self) -> Task<Message> {
        Task::perform(save_settings(self.settings.clone()), Message::SettingsSaved)
    }

    fn props_for(&self, post: &Post) -> SingleImageProps {
        SingleImageProps::new(post.id.clone(), post.file_info().cloned())
            .with_embed_visible(self.visibility.is_visible(&post.id))
            .with_compact_display(self.settings.compact_display)
            .with_rhs_open(self.is_rhs_open)
    }

    /// Mounts, updates and tears down views to match the current posts,
    /// then starts any image fetches the new render plans need.
    fn sync_embeds(&mut self) -> Task<Message> {
        let props: Vec<SingleImageProps> = self
            .posts
            .iter()
            .filter(|post| post.has_single_image())
            .map(|post| self.props_for(post))
            .collect();
        let live: HashSet<PostId> = props.iter().map(|p| p.post_id.clone()).collect();

        self.embeds.retain(|post_id, view| {
            let keep = live.contains(post_id);
            if !keep {
                debug!(%post_id, "Unmounting image view");
                view.unmount();
            }
            keep
        });
        self.surfaces.retain(|post_id, _| live.contains(post_id));
        self.visibility.retain(|post_id| live.contains(post_id));

        for props in props {
            match self.embeds.get_mut(&props.post_id) {
                Some(view) => view.set_props(props),
                None => {
                    debug!(post_id = %props.post_id, "Mounting image view");
                    self.embeds.insert(props.post_id.clone(), SingleImageView::new(props));
                }
            }
        }

        self.ensure_loads()
    }

    /// Starts a fetch for every thumbnail whose surface is missing or stale.
    fn ensure_loads(&mut self) -> Task<Message> {
        let Some(urls) = &self.urls else {
            return Task::none();
        };

        let mut tasks = Vec::new();
        for (post_id, view) in &self.embeds {
            let Some(thumbnail) = view.render(urls).and_then(|plan| plan.thumbnail) else {
                continue;
            };
            let current = self
                .surfaces
                .get(post_id)
                .is_some_and(|s| s.url == thumbnail.source_url);
            if current {
                continue;
            }
            self.surfaces.insert(
                post_id.clone(),
                SurfaceImage::loading(thumbnail.source_url.clone()),
            );
            tasks.push(surface::load(
                post_id.clone(),
                thumbnail.source_url,
                thumbnail.is_svg,
                view.load_ticket(),
            ));
        }
        Task::batch(tasks)
    }

    /// Offers a thumbnail click to the view. Returns the URL to open
    /// externally when the view did not consume the event.
    fn open_preview(&mut self, post_id: &PostId) -> Option<String> {
        let mut event = PointerEvent::new();
        if let Some(view) = self.embeds.get_mut(post_id) {
            view.request_overlay(&mut event);
        }
        if event.is_default_prevented() {
            return None;
        }
        self.attachment_url(post_id)
    }

    fn finish_load(&mut self, report: surface::LoadReport) {
        let Some(view) = self.embeds.get_mut(&report.post_id) else {
            debug!(post_id = %report.post_id, "Discarding image for unmounted view");
            return;
        };
        if !view.accepts_ticket(&report.ticket) {
            debug!(post_id = %report.post_id, "Discarding image from a previous mount");
            return;
        }
        let Some(surface) = self
            .surfaces
            .get_mut(&report.post_id)
            .filter(|s| s.url == report.url)
        else {
            debug!(post_id = %report.post_id, url = %report.url, "Discarding superseded image");
            return;
        };

        match report.result {
            Ok(picture) => {
                if view.complete_load(&report.ticket) {
                    surface.state = SurfaceState::Ready(picture);
                }
            }
            Err(e) => {
                warn!("Failed to load {}: {}", report.url, e);
                surface.state = SurfaceState::Failed(e);
            }
        }
    }

    /// Full file URL for a post's single attachment.
    fn attachment_url(&self, post_id: &PostId) -> Option<String> {
        let urls = self.urls.as_ref()?;
        let post = self.posts.iter().find(|p| &p.id == post_id)?;
        post.file_ids.first().map(|id| urls.file_url(id))
    }

    fn render_plans(&self) -> HashMap<PostId, RenderPlan> {
        let Some(urls) = &self.urls else {
            return HashMap::new();
        };
        self.embeds
            .iter()
            .filter_map(|(post_id, view)| view.render(urls).map(|plan| (post_id.clone(), plan)))
            .collect()
    }

    /// Render the view.
    fn view(&self) -> Element<'_, Message> {
        let plans = self.render_plans();

        let header = view::view_header(HeaderState {
            compact_display: self.settings.compact_display,
            is_rhs_open: self.is_rhs_open,
            theme_mode: self.settings.theme_mode,
            is_loading: self.is_loading_thread,
        });

        let mut main_content = row![view::view_thread(
            &self.posts,
            &plans,
            &self.surfaces,
            self.is_loading_thread,
        )];
        if self.is_rhs_open {
            main_content = main_content.push(view::view_rhs(&self.posts, &self.embeds));
        }

        let mut page = column![header];
        if let Some(error) = &self.error_message {
            page = page.push(
                container(text(error.clone()).size(13))
                    .padding([8, 16])
                    .width(Length::Fill)
                    .style(style::widgets::error_banner_style),
            );
        }
        let page: Element<'_, Message> = page
            .push(main_content.height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        let overlay = plans.iter().find_map(|(post_id, plan)| {
            plan.overlay
                .as_ref()
                .filter(|overlay| overlay.show)
                .map(|overlay| view::view_preview_overlay(overlay, self.surfaces.get(post_id)))
        });

        match overlay {
            Some(overlay) => stack![page, overlay].into(),
            None => page,
        }
    }

    /// Subscribe to keyboard events.
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(&key, modifiers).unwrap_or(Message::Noop)
            } else {
                Message::Noop
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: &Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    match key {
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::Dismiss))
        }
        Key::Named(keyboard::key::Named::F5) => Some(Message::KeyPressed(KeyboardAction::Reload)),
        Key::Character(c) if ctrl && c.as_str() == "d" => {
            Some(Message::KeyPressed(KeyboardAction::ToggleCompact))
        }
        Key::Character(c) if ctrl && c.as_str() == "t" => {
            Some(Message::KeyPressed(KeyboardAction::ToggleTheme))
        }
        Key::Character(c) if ctrl && c.as_str() == "b" => {
            Some(Message::KeyPressed(KeyboardAction::ToggleRhs))
        }
        _ => None,
    }
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    read_settings(&settings_path())
        .await
        .map_err(|e| format!("{e:#}"))
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let path = settings_path();
    write_settings(&path, &settings)
        .await
        .map_err(|e| format!("{e:#}"))?;
    info!("Settings saved to {:?}", path);
    Ok(())
}

/// Load the thread from `path`, or the bundled demo thread.
async fn load_thread(path: Option<PathBuf>) -> Result<Vec<Post>, String> {
    let json = match path {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| format!("{}: {e}", path.display()))?,
        None => DEMO_THREAD.to_owned(),
    };
    parse_thread(&json).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key, modifiers: Modifiers) -> Option<KeyboardAction> {
        match handle_key_press(&key, modifiers) {
            Some(Message::KeyPressed(action)) => Some(action),
            _ => None,
        }
    }

    #[test]
    fn shortcuts_map_to_actions() {
        assert_eq!(
            press(Key::Named(keyboard::key::Named::Escape), Modifiers::empty()),
            Some(KeyboardAction::Dismiss)
        );
        assert_eq!(
            press(Key::Named(keyboard::key::Named::F5), Modifiers::empty()),
            Some(KeyboardAction::Reload)
        );
        assert_eq!(
            press(Key::Character("d".into()), Modifiers::COMMAND),
            Some(KeyboardAction::ToggleCompact)
        );
        assert_eq!(press(Key::Character("d".into()), Modifiers::empty()), None);
    }

    #[test]
    fn demo_thread_parses() {
        let posts = parse_thread(DEMO_THREAD).unwrap();
        assert!(posts.iter().any(Post::has_single_image));
        assert!(posts.iter().any(|p| p.has_single_image() && p.file_info().is_none()));
    }

    #[tokio::test]
    async fn loads_thread_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thread.json");
        tokio::fs::write(&path, r#"[{"id":"p1","user":"ana","message":"hi","create_at":0}]"#)
            .await
            .unwrap();

        let posts = load_thread(Some(path)).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, PostId::new("p1"));
    }

    #[tokio::test]
    async fn missing_thread_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_thread(Some(dir.path().join("absent.json")))
            .await
            .unwrap_err();
        assert!(err.contains("absent.json"));
    }

    fn app_with_thread() -> PostView {
        let mut app = PostView {
            urls: FileUrls::new("https://chat.example.com").ok(),
            ..PostView::default()
        };
        app.posts = parse_thread(DEMO_THREAD).unwrap();
        app
    }

    #[test]
    fn sync_mounts_and_unmounts_views() {
        let mut app = app_with_thread();
        let _ = app.sync_embeds();
        let mounted = app.embeds.len();
        assert!(mounted > 0);

        let removed = app
            .posts
            .iter()
            .find(|p| p.has_single_image())
            .map(|p| p.id.clone())
            .unwrap();
        app.posts.retain(|p| p.id != removed);
        let _ = app.sync_embeds();

        assert_eq!(app.embeds.len(), mounted - 1);
        assert!(!app.embeds.contains_key(&removed));
        assert!(!app.surfaces.contains_key(&removed));
    }

    #[test]
    fn inert_view_leaves_click_to_default_action() {
        let mut app = app_with_thread();
        let _ = app.sync_embeds();
        let pending = PostId::new("post-pending");

        assert_eq!(
            app.open_preview(&pending).as_deref(),
            Some("https://chat.example.com/api/v4/files/file-print")
        );
        assert!(!app.embeds[&pending].state().overlay_visible);
    }

    #[test]
    fn described_view_consumes_click() {
        let mut app = app_with_thread();
        let _ = app.sync_embeds();
        let post_id = PostId::new("post-landscape");

        assert_eq!(app.open_preview(&post_id), None);
        assert!(app.embeds[&post_id].state().overlay_visible);
    }

    fn report(
        post_id: &PostId,
        app: &PostView,
        ticket: postview_core::LoadTicket,
        result: Result<surface::Picture, String>,
    ) -> surface::LoadReport {
        surface::LoadReport {
            post_id: post_id.clone(),
            url: app.surfaces[post_id].url.clone(),
            ticket,
            result,
        }
    }

    #[test]
    fn late_failure_from_previous_mount_is_discarded() {
        let mut app = app_with_thread();
        let _ = app.sync_embeds();
        let post_id = PostId::new("post-landscape");
        let stale_ticket = app.embeds[&post_id].load_ticket();

        // Reload without the post, then with it again.
        let posts = app.posts.clone();
        app.posts.retain(|p| p.id != post_id);
        let _ = app.sync_embeds();
        app.posts = posts;
        let _ = app.sync_embeds();

        let fresh_ticket = app.embeds[&post_id].load_ticket();
        let handle = iced::widget::image::Handle::from_bytes(vec![0u8; 4]);
        let picture = surface::Picture::Raster(handle);
        let fresh = report(&post_id, &app, fresh_ticket, Ok(picture));
        app.finish_load(fresh);
        assert!(app.embeds[&post_id].state().loaded);

        let stale = report(&post_id, &app, stale_ticket, Err("connection reset".into()));
        app.finish_load(stale);

        assert!(app.embeds[&post_id].state().loaded);
        assert!(app.surfaces[&post_id].picture().is_some());
    }

    #[test]
    fn toggle_collapses_embed() {
        let mut app = app_with_thread();
        let _ = app.sync_embeds();
        let post_id = app
            .posts
            .iter()
            .find(|p| p.file_info().is_some_and(|f| f.is_image()))
            .map(|p| p.id.clone())
            .unwrap();

        let _ = app.update(Message::ToggleEmbed(post_id.clone()));
        assert!(!app.embeds[&post_id].props().is_embed_visible);
        let plan = app.embeds[&post_id]
            .render(app.urls.as_ref().unwrap())
            .unwrap();
        assert!(plan.thumbnail.is_none());
    }
}
