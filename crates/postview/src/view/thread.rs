//! Thread view: posts in order, with image embeds where available.

use std::collections::HashMap;

use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};
use postview_core::{PostId, RenderPlan};

use crate::message::Message;
use crate::model::Post;
use crate::style::widgets::{link_button_style, palette, post_style, scrollable_style, thread_style};
use crate::surface::SurfaceImage;
use crate::view::single_image::view_single_image;

/// Renders the thread panel.
pub fn view_thread(
    posts: &[Post],
    plans: &HashMap<PostId, RenderPlan>,
    surfaces: &HashMap<PostId, SurfaceImage>,
    is_loading: bool,
) -> Element<'static, Message> {
    if is_loading && posts.is_empty() {
        return container(muted("Loading thread\u{2026}".to_owned(), 14.0))
            .center(Length::Fill)
            .style(thread_style)
            .into();
    }

    if posts.is_empty() {
        return container(muted("No posts".to_owned(), 14.0))
            .center(Length::Fill)
            .style(thread_style)
            .into();
    }

    let mut list = Column::new().spacing(10).padding(16);
    for post in posts {
        list = list.push(view_post(post, plans.get(&post.id), surfaces.get(&post.id)));
    }

    container(
        scrollable(list)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(scrollable_style),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(thread_style)
    .into()
}

fn view_post(
    post: &Post,
    plan: Option<&RenderPlan>,
    surface: Option<&SurfaceImage>,
) -> Element<'static, Message> {
    let author = text(post.user.clone()).size(14).font(iced::Font {
        weight: iced::font::Weight::Semibold,
        ..Default::default()
    });

    let mut content = column![
        row![author, muted(post.display_time(), 12.0)]
            .spacing(8)
            .align_y(Alignment::Center),
    ]
    .spacing(6);

    if !post.message.is_empty() {
        content = content.push(text(post.message.clone()).size(14));
    }

    match plan {
        Some(plan) => content = content.push(view_single_image(&post.id, plan, surface)),
        // Metadata not delivered yet: the view renders nothing, but the
        // attachment can still be opened directly.
        None if post.has_single_image() => {
            content = content.push(
                button(text("Attachment").size(13))
                    .padding(0)
                    .style(link_button_style)
                    .on_press(Message::OpenPreview(post.id.clone())),
            );
        }
        None => {}
    }

    container(content)
        .padding(12)
        .width(Length::Fill)
        .style(post_style)
        .into()
}

fn muted(label: String, size: f32) -> Element<'static, Message> {
    text(label)
        .size(size)
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_muted),
            }
        })
        .into()
}
