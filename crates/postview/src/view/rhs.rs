//! Right-hand panel listing image attachments and their current sizes.

use std::collections::HashMap;

use iced::widget::{Column, column, container, scrollable, text};
use iced::{Element, Length};
use postview_core::{PostId, SingleImageView};

use crate::message::Message;
use crate::model::Post;
use crate::style::widgets::{palette, rhs_style, scrollable_style};

const RHS_WIDTH: f32 = 260.0;

/// Renders the attachments panel.
pub fn view_rhs(
    posts: &[Post],
    embeds: &HashMap<PostId, SingleImageView>,
) -> Element<'static, Message> {
    let mut list = Column::new().spacing(8).padding(12);
    list = list.push(
        text("Attachments").size(14).font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        }),
    );

    let mut any = false;
    for post in posts {
        let Some(view) = embeds.get(&post.id) else {
            continue;
        };
        let Some(file) = view.props().file_info.as_ref() else {
            continue;
        };
        any = true;

        let state = view.state();
        let status = if state.loaded { "loaded" } else { "pending" };
        list = list.push(
            column![
                text(file.name.clone()).size(13),
                text(format!(
                    "{} \u{00D7} {} \u{00B7} {status}",
                    state.dimensions.width, state.dimensions.height
                ))
                .size(11)
                .style(|_theme| {
                    let p = palette::current();
                    text::Style {
                        color: Some(p.text_muted),
                    }
                }),
            ]
            .spacing(2),
        );
    }

    if !any {
        list = list.push(text("No image attachments").size(12));
    }

    container(scrollable(list).style(scrollable_style))
        .width(Length::Fixed(RHS_WIDTH))
        .height(Length::Fill)
        .style(rhs_style)
        .into()
}
