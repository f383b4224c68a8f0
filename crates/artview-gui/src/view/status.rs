//! Fetch error banner and the bottom status bar.

use iced::widget::{button, container, row, space, text};
use iced::{Alignment, Element, Theme};
use iced_fonts::lucide;

use crate::error::GuiError;
use crate::message::{Message, TableMessage};
use crate::state::AppState;
use crate::theme::{
    GalleryColors, SPACING_MD, SPACING_SM, button_ghost, button_secondary, container_banner_error,
};

/// Dismissible banner for a failed page fetch, with Retry.
pub fn view_fetch_error(message: &str) -> Element<'_, Message> {
    let icon = container(lucide::circle_alert().size(16)).style(|theme: &Theme| container::Style {
        text_color: Some(theme.extended_palette().danger.base.color),
        ..Default::default()
    });

    let retry = button(
        row![lucide::refresh_cw().size(12), text("Retry").size(13)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Table(TableMessage::Retry))
    .padding([4.0, 10.0])
    .style(button_secondary);

    let dismiss = button(lucide::x().size(14))
        .on_press(Message::Table(TableMessage::DismissError))
        .padding([4.0, 6.0])
        .style(button_ghost);

    container(
        row![icon, text(message).size(13), space::horizontal(), retry, dismiss]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_MD])
    .style(container_banner_error)
    .into()
}

/// Bulk-select result or app error, if either is set.
pub fn view_status_bar(state: &AppState) -> Option<Element<'_, Message>> {
    let line: Element<'_, Message> = if let Some(error) = &state.error {
        text(error_line(error))
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            })
            .into()
    } else if let Some(status) = &state.status {
        text(status.as_str())
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.gallery().text_secondary),
            })
            .into()
    } else {
        return None;
    };

    let dismiss = button(lucide::x().size(12))
        .on_press(Message::DismissStatus)
        .padding([2.0, 6.0])
        .style(button_ghost);

    Some(
        row![line, space::horizontal(), dismiss]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center)
            .into(),
    )
}

/// "Category: error. Suggestion" text for the status bar.
pub fn error_line(error: &GuiError) -> String {
    let line = format!("{}: {error}", error.category().label());
    match error.suggestion() {
        Some(suggestion) => format!("{line}. {suggestion}"),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_line_with_suggestion() {
        let error = GuiError::settings_save("read-only file system");
        assert_eq!(
            error_line(&error),
            "Settings: Failed to save settings: read-only file system. \
             Check file permissions for the application config directory."
        );
    }

    #[test]
    fn test_error_line_without_suggestion() {
        assert_eq!(
            error_line(&GuiError::InvalidBulkCount),
            "Input: Enter a whole number of at least 1"
        );
    }
}
