//! Header/toolbar view component.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::style::widgets::palette::ThemeMode;
use crate::style::widgets::{header_style, palette, toggle_button_style};

/// Display toggles reflected in the toolbar.
#[derive(Debug, Clone, Copy)]
#[allow(clippy::struct_excessive_bools)]
pub struct HeaderState {
    /// Compact display enabled.
    pub compact_display: bool,
    /// Right-hand panel open.
    pub is_rhs_open: bool,
    /// Active theme.
    pub theme_mode: ThemeMode,
    /// Thread load in flight.
    pub is_loading: bool,
}

/// Renders the toolbar with the title and display toggles.
pub fn view_header(state: HeaderState) -> Element<'static, Message> {
    let title = text("PostView")
        .size(20)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.primary),
            }
        });

    let compact_label = if state.compact_display {
        "Comfortable"
    } else {
        "Compact"
    };
    let theme_icon = match state.theme_mode {
        ThemeMode::Dark => "\u{2600}",
        ThemeMode::Light => "\u{263E}",
    };
    let rhs_label = if state.is_rhs_open {
        "Hide panel"
    } else {
        "Show panel"
    };

    let mut reload = button(text("\u{21BB}").size(16))
        .padding([6, 10])
        .style(toggle_button_style);
    if !state.is_loading {
        reload = reload.on_press(Message::ReloadThread);
    }

    let toolbar = row![
        title,
        Space::new().width(Length::Fill),
        toolbar_button(compact_label, Message::ToggleCompact),
        toolbar_button(rhs_label, Message::ToggleRhs),
        toolbar_button(theme_icon, Message::ToggleTheme),
        reload,
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(toolbar)
        .padding([10, 16])
        .width(Length::Fill)
        .style(header_style)
        .into()
}

fn toolbar_button(label: &'static str, message: Message) -> Element<'static, Message> {
    button(text(label).size(13))
        .padding([6, 10])
        .style(toggle_button_style)
        .on_press(message)
        .into()
}
