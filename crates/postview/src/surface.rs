//! Rendering surface: fetches image assets and reports load completion.
//!
//! The surface owns the decoded handles. The image view only learns that a
//! load finished, through the [`LoadTicket`] it issued for the request.

use anyhow::Context;
use iced::Task;
use iced::widget::{image, svg};
use postview_core::{LoadTicket, PostId};
use tracing::debug;

use crate::message::Message;

/// Decoded picture handed to the renderer.
#[derive(Debug, Clone)]
pub enum Picture {
    /// Raster image (PNG, JPEG, GIF, ...).
    Raster(image::Handle),
    /// Vector image.
    Vector(svg::Handle),
}

impl Picture {
    fn from_bytes(bytes: Vec<u8>, is_svg: bool) -> Self {
        if is_svg {
            Self::Vector(svg::Handle::from_memory(bytes))
        } else {
            Self::Raster(image::Handle::from_bytes(bytes))
        }
    }
}

/// Loading state of one surface image.
#[derive(Debug, Clone)]
pub enum SurfaceState {
    /// Request in flight.
    Loading,
    /// Bytes fetched and handed to the renderer.
    Ready(Picture),
    /// Fetch failed.
    Failed(String),
}

/// Surface image for one post.
#[derive(Debug, Clone)]
pub struct SurfaceImage {
    /// Source URL for the image.
    pub url: String,
    /// Current loading state.
    pub state: SurfaceState,
}

impl SurfaceImage {
    /// A request that has just started.
    #[must_use]
    pub const fn loading(url: String) -> Self {
        Self {
            url,
            state: SurfaceState::Loading,
        }
    }

    /// Decoded picture, if ready.
    #[must_use]
    pub const fn picture(&self) -> Option<&Picture> {
        match &self.state {
            SurfaceState::Ready(picture) => Some(picture),
            _ => None,
        }
    }
}

/// Completion report sent back to the app.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Post whose view requested the load.
    pub post_id: PostId,
    /// URL that was fetched.
    pub url: String,
    /// Ticket of the requesting mount.
    pub ticket: LoadTicket,
    /// Decoded picture or error text.
    pub result: Result<Picture, String>,
}

/// Starts loading `url` for the view that issued `ticket`.
pub fn load(post_id: PostId, url: String, is_svg: bool, ticket: LoadTicket) -> Task<Message> {
    debug!(%post_id, %url, is_svg, "Loading image");
    Task::perform(
        async move {
            let result = fetch_image(&url, is_svg)
                .await
                .map_err(|e| format!("{e:#}"));
            LoadReport {
                post_id,
                url,
                ticket,
                result,
            }
        },
        Message::ImageLoaded,
    )
}

async fn fetch_image(url: &str, is_svg: bool) -> anyhow::Result<Picture> {
    let bytes = reqwest::get(url)
        .await
        .with_context(|| format!("request to {url} failed"))?
        .error_for_status()?
        .bytes()
        .await
        .context("failed to read response body")?;
    if bytes.is_empty() {
        anyhow::bail!("empty response body");
    }
    Ok(Picture::from_bytes(bytes.to_vec(), is_svg))
}
