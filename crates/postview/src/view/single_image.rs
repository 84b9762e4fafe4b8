//! Single image attachment: collapsible header and inline thumbnail.

use iced::widget::{button, column, container, image, mouse_area, row, svg, text, tooltip};
use iced::{Alignment, ContentFit, Element, Length};
use postview_core::{
    Dimensions, HeaderPlan, PREVIEW_IMAGE_MIN_DIMENSION, PostId, RenderPlan, ThumbnailPlan,
    ToggleIcon,
};

use crate::message::Message;
use crate::style::widgets::{
    image_container_style, link_button_style, min_preview_style, palette, toggle_button_style,
};
use crate::surface::{Picture, SurfaceImage, SurfaceState};

const MAX_THUMBNAIL_WIDTH: f32 = 480.0;
const MAX_THUMBNAIL_HEIGHT: f32 = 350.0;
const COMPACT_MAX_THUMBNAIL_WIDTH: f32 = 320.0;
/// Box used while dimensions are still unknown.
const PLACEHOLDER_SIZE: (f32, f32) = (240.0, 160.0);

/// Renders one image attachment from its render plan.
pub fn view_single_image(
    post_id: &PostId,
    plan: &RenderPlan,
    surface: Option<&SurfaceImage>,
) -> Element<'static, Message> {
    let mut content = column![view_image_header(post_id, &plan.header)].spacing(6);

    if let Some(thumbnail) = &plan.thumbnail {
        content = content.push(view_thumbnail(post_id, thumbnail, surface));
    }

    content.into()
}

fn view_image_header(post_id: &PostId, header: &HeaderPlan) -> Element<'static, Message> {
    let icon = match header.toggle_icon {
        ToggleIcon::MenuDown => "\u{25BE}",
        ToggleIcon::MenuRight => "\u{25B8}",
    };

    let toggle = tooltip(
        button(text(icon).size(14))
            .padding([2, 6])
            .style(toggle_button_style)
            .on_press(Message::ToggleEmbed(post_id.clone())),
        text(header.toggle_label).size(12),
        tooltip::Position::Bottom,
    );

    let mut header_row = row![toggle].spacing(4).align_y(Alignment::Center);

    if let Some(name) = &header.file_name {
        let size: f32 = if header.compact { 12.0 } else { 14.0 };
        header_row = header_row.push(
            button(text(name.clone()).size(size))
                .padding(0)
                .style(link_button_style)
                .on_press(Message::OpenPreview(post_id.clone())),
        );
    }

    header_row.into()
}

fn view_thumbnail(
    post_id: &PostId,
    thumbnail: &ThumbnailPlan,
    surface: Option<&SurfaceImage>,
) -> Element<'static, Message> {
    let class = thumbnail.classification;
    let max_width = if class.compact {
        COMPACT_MAX_THUMBNAIL_WIDTH
    } else {
        MAX_THUMBNAIL_WIDTH
    };

    let body: Element<'static, Message> = match surface.and_then(SurfaceImage::picture) {
        Some(picture) if thumbnail.fade_in => {
            if class.min_preview && thumbnail.handle_small_image_container {
                let (width, height) = min_preview_box(thumbnail.dimensions);
                container(view_picture(
                    picture,
                    ContentFit::ScaleDown,
                    Length::Shrink,
                    Length::Shrink,
                ))
                .center_x(Length::Fixed(width))
                .center_y(Length::Fixed(height))
                .style(min_preview_style)
                .into()
            } else if class.svg_with_height() {
                view_picture(picture, ContentFit::Contain, Length::Fill, Length::Shrink)
            } else if class.svg_no_height() {
                view_picture(picture, ContentFit::Contain, Length::Fill, Length::Fill)
            } else {
                let (width, height) =
                    fit_within(thumbnail.dimensions, max_width, MAX_THUMBNAIL_HEIGHT);
                view_picture(
                    picture,
                    ContentFit::Contain,
                    Length::Fixed(width),
                    Length::Fixed(height),
                )
            }
        }
        _ => view_placeholder(thumbnail, surface, max_width),
    };

    let mut frame = container(mouse_area(body).on_press(Message::OpenPreview(post_id.clone())))
        .padding(4)
        .style(image_container_style);

    let sizing = thumbnail.sizing;
    if let Some(height) = sizing.container_height {
        frame = frame.height(Length::Fixed(height));
    }
    if sizing.max_width_fill || sizing.fill_width {
        frame = frame.width(Length::Fill);
    }

    frame.into()
}

fn view_placeholder(
    thumbnail: &ThumbnailPlan,
    surface: Option<&SurfaceImage>,
    max_width: f32,
) -> Element<'static, Message> {
    let label = match surface.map(|s| &s.state) {
        Some(SurfaceState::Failed(reason)) => format!("Image unavailable: {reason}"),
        _ if thumbnail.show_loader => "Loading\u{2026}".to_owned(),
        _ => String::new(),
    };

    let (width, height) = if thumbnail.dimensions == Dimensions::default() {
        PLACEHOLDER_SIZE
    } else {
        fit_within(thumbnail.dimensions, max_width, MAX_THUMBNAIL_HEIGHT)
    };

    container(text(label).size(12).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_muted),
        }
    }))
    .center_x(Length::Fixed(width.max(1.0)))
    .center_y(Length::Fixed(height.max(1.0)))
    .into()
}

/// Raster or vector picture widget.
pub(super) fn view_picture(
    picture: &Picture,
    fit: ContentFit,
    width: Length,
    height: Length,
) -> Element<'static, Message> {
    match picture {
        Picture::Raster(handle) => image(handle.clone())
            .content_fit(fit)
            .width(width)
            .height(height)
            .into(),
        Picture::Vector(handle) => svg(handle.clone())
            .content_fit(fit)
            .width(width)
            .height(height)
            .into(),
    }
}

/// Scales `dimensions` down to fit `max_width` x `max_height`, never up.
#[allow(clippy::cast_precision_loss)] // Pixel sizes are far below f32 precision limits
fn fit_within(dimensions: Dimensions, max_width: f32, max_height: f32) -> (f32, f32) {
    let width = dimensions.width.max(1) as f32;
    let height = dimensions.height.max(1) as f32;
    let scale = (max_width / width).min(max_height / height).min(1.0);
    (width * scale, height * scale)
}

/// Box that keeps a small image at least the minimum preview size.
#[allow(clippy::cast_precision_loss)]
fn min_preview_box(dimensions: Dimensions) -> (f32, f32) {
    let min = PREVIEW_IMAGE_MIN_DIMENSION as f32;
    let width = (dimensions.width.max(0) as f32).clamp(min, MAX_THUMBNAIL_WIDTH);
    let height = (dimensions.height.max(0) as f32).clamp(min, MAX_THUMBNAIL_HEIGHT);
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_images_scale_down() {
        let (w, h) = fit_within(Dimensions::new(1920, 1080), 480.0, 350.0);
        assert!((w - 480.0).abs() < f32::EPSILON);
        assert!((h - 270.0).abs() < 0.01);
    }

    #[test]
    fn tall_images_bound_by_height() {
        let (w, h) = fit_within(Dimensions::new(700, 1400), 480.0, 350.0);
        assert!((h - 350.0).abs() < 0.01);
        assert!((w - 175.0).abs() < 0.01);
    }

    #[test]
    fn small_images_never_scale_up() {
        assert_eq!(fit_within(Dimensions::new(120, 90), 480.0, 350.0), (120.0, 90.0));
    }

    #[test]
    fn min_preview_box_is_at_least_threshold() {
        assert_eq!(min_preview_box(Dimensions::new(10, 80)), (50.0, 80.0));
        assert_eq!(min_preview_box(Dimensions::new(0, 0)), (50.0, 50.0));
    }
}
