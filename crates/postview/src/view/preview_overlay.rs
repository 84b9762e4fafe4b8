//! Full-size preview overlay.

use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, ContentFit, Element, Length};
use postview_core::OverlayPlan;

use crate::message::Message;
use crate::style::widgets::{
    overlay_backdrop_style, overlay_button_style, overlay_panel_style, palette,
    toggle_button_style,
};
use crate::surface::SurfaceImage;
use crate::view::single_image::view_picture;

/// Renders the preview overlay layer. Clicking the backdrop dismisses it.
pub fn view_preview_overlay(
    overlay: &OverlayPlan,
    surface: Option<&SurfaceImage>,
) -> Element<'static, Message> {
    let dismiss = Message::DismissPreview(overlay.post_id.clone());

    let (title, details) = overlay.files.first().map_or_else(
        || (String::new(), String::new()),
        |file| {
            (
                file.name.clone(),
                format!(
                    "{} \u{00D7} {} \u{00B7} {}",
                    file.width,
                    file.height,
                    format_size(file.size)
                ),
            )
        },
    );

    let heading = column![
        text(title).size(16).font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        }),
        text(details).size(12).style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_muted),
            }
        }),
    ]
    .spacing(2);

    let open_original = button(text("Open original").size(13))
        .padding([6, 12])
        .style(overlay_button_style)
        .on_press(Message::OpenOriginal(overlay.file_url.clone()));

    let close = button(text("\u{2715}").size(14))
        .padding([6, 10])
        .style(toggle_button_style)
        .on_press(dismiss.clone());

    let toolbar = row![
        heading,
        Space::new().width(Length::Fill),
        open_original,
        close
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let body: Element<'static, Message> = match surface.and_then(SurfaceImage::picture) {
        Some(picture) => view_picture(picture, ContentFit::Contain, Length::Fill, Length::Fill),
        None => container(text("Loading\u{2026}").size(13))
            .center(Length::Fill)
            .into(),
    };

    let panel = container(column![toolbar, body].spacing(12))
        .padding(16)
        .max_width(1100.0)
        .max_height(800.0)
        .style(overlay_panel_style);

    let backdrop = container(opaque(panel))
        .center(Length::Fill)
        .padding(40)
        .style(overlay_backdrop_style);

    opaque(mouse_area(backdrop).on_press(dismiss))
}

/// Human-readable file size.
#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}
