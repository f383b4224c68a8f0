//! Title row with the selection count and global actions.

use iced::widget::{button, column, container, row, space, text};
use iced::{Alignment, Border, Element, Theme};
use iced_fonts::lucide;

use crate::message::{Message, TableMessage};
use crate::state::AppState;
use crate::theme::{GalleryColors, SPACING_SM, SPACING_XS, button_ghost, button_secondary};

pub fn view_header(state: &AppState) -> Element<'_, Message> {
    let selected = state.table.selection().selected_count();

    let title = column![
        text("Artworks").size(22),
        text("Art Institute of Chicago collection")
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.gallery().text_muted),
            }),
    ]
    .spacing(SPACING_XS);

    let badge = container(text(format!("{selected} selected")).size(12))
        .padding([SPACING_XS, SPACING_SM])
        .style(move |theme: &Theme| {
            let gallery = theme.gallery();
            container::Style {
                background: Some(if selected > 0 {
                    gallery.row_selected.into()
                } else {
                    gallery.background_secondary.into()
                }),
                text_color: Some(gallery.text_secondary),
                border: Border {
                    radius: 999.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

    let clear = button(text("Clear selection").size(13))
        .on_press_maybe((selected > 0).then_some(Message::Table(TableMessage::ClearSelection)))
        .padding([6.0, 12.0])
        .style(button_secondary);

    let theme_icon = if state.theme_mode().is_dark() {
        lucide::sun()
    } else {
        lucide::moon()
    };
    let theme_toggle = button(theme_icon.size(16))
        .on_press(Message::ToggleTheme)
        .padding([6.0, 8.0])
        .style(button_ghost);

    row![title, space::horizontal(), badge, clear, theme_toggle]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into()
}
