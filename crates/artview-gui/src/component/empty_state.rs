//! Empty, loading, and error state components.
//!
//! Shown in place of table rows when there is nothing to list, a page is
//! on its way, or the app cannot reach the data at all.
//!
//! ```rust,ignore
//! EmptyState::new(lucide::table().size(40), "No artworks on this page")
//!     .description("Try an earlier page")
//!     .action("First page", Message::Table(TableMessage::FirstPage))
//!     .view()
//!
//! LoadingState::new("Loading artworks").view()
//!
//! ErrorState::new("Cannot reach the artwork service")
//!     .message(error.to_string())
//!     .view()
//! ```

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_SM, GalleryColors, SPACING_LG, SPACING_MD, SPACING_SM, button_primary,
};

/// Fill the available space and center `content` in it.
fn centered<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

// =============================================================================
// EMPTY STATE
// =============================================================================

/// Empty state with icon, title, description, and optional action.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
    action: Option<(String, M)>,
}

impl<'a, M: Clone + 'a> EmptyState<'a, M> {
    /// Create a new empty state with icon and title.
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
            action: None,
        }
    }

    /// Add a description below the title.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Add an action button.
    pub fn action(mut self, label: impl Into<String>, message: M) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let title_text = text(self.title)
            .size(16)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.gallery().text_muted),
            });

        let mut content = column![self.icon, Space::new().height(SPACING_MD), title_text]
            .align_x(Alignment::Center);

        if let Some(desc) = self.description {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(text(desc).size(13).style(|theme: &Theme| text::Style {
                    color: Some(theme.gallery().text_muted),
                }));
        }

        if let Some((label, message)) = self.action {
            content = content.push(Space::new().height(SPACING_LG)).push(
                button(text(label).size(14))
                    .on_press(message)
                    .padding([10.0, 24.0])
                    .style(button_primary),
            );
        }

        centered(content)
    }
}

// =============================================================================
// LOADING STATE
// =============================================================================

/// Loading state with spinner icon and message.
pub struct LoadingState {
    title: String,
}

impl LoadingState {
    /// Create a new loading state with title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Build the element.
    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        // Lucide icons take their color from the enclosing container
        let icon = container(lucide::loader().size(32)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.extended_palette().primary.base.color),
            ..Default::default()
        });

        let title_text = text(self.title)
            .size(16)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.gallery().text_muted),
            });

        centered(column![icon, Space::new().height(SPACING_MD), title_text].align_x(Alignment::Center))
    }
}

// =============================================================================
// ERROR STATE
// =============================================================================

/// Error state with icon, title and message.
pub struct ErrorState {
    title: String,
    message: Option<String>,
}

impl ErrorState {
    /// Create a new error state with title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
        }
    }

    /// Set the error message (shown in a container).
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message = Some(msg.into());
        self
    }

    /// Build the element.
    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let error_icon =
            container(lucide::circle_alert().size(40)).style(|theme: &Theme| container::Style {
                text_color: Some(theme.extended_palette().danger.base.color),
                ..Default::default()
            });

        let title_text = text(self.title)
            .size(18)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.base.text),
            });

        let mut content = column![error_icon, Space::new().height(SPACING_LG), title_text]
            .align_x(Alignment::Center)
            .max_width(420.0);

        if let Some(msg) = self.message {
            let msg_text = text(msg).size(12).style(|theme: &Theme| text::Style {
                color: Some(theme.gallery().text_muted),
            });
            content = content.push(Space::new().height(SPACING_SM)).push(
                container(msg_text)
                    .padding(SPACING_MD)
                    .style(|theme: &Theme| container::Style {
                        background: Some(theme.gallery().background_secondary.into()),
                        border: Border {
                            radius: BORDER_RADIUS_SM.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }),
            );
        }

        centered(content)
    }
}
