//! First/previous/next/last controls, numbered page links and
//! "start-end of total".

use iced::widget::{Row, button, container, row, space, text};
use iced::{Alignment, Element, Theme};
use iced_fonts::lucide;

use artview_core::PaginationState;
use artview_model::PageIndex;

use crate::message::{Message, TableMessage};
use crate::theme::{GalleryColors, SPACING_SM, SPACING_XS, button_ghost, button_primary};

/// Numbered links shown around the current page.
const PAGE_LINKS: usize = 5;

pub fn view_pagination(pagination: &PaginationState) -> Element<'_, Message> {
    let has_previous = pagination.has_previous();
    let has_next = pagination.has_next();

    let nav = |icon: iced::widget::Text<'static>, enabled: bool, msg: TableMessage| {
        button(icon.size(14))
            .on_press_maybe(enabled.then_some(Message::Table(msg)))
            .padding([4.0, 10.0])
            .style(button_ghost)
    };

    let page_info = text(format!(
        "Page {} of {}",
        pagination.current_page().api_page(),
        pagination.page_count()
    ))
    .size(12)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.gallery().text_secondary),
    });

    let range = text(range_label(pagination))
        .size(12)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.gallery().text_muted),
        });

    container(
        row![
            nav(lucide::chevrons_left(), has_previous, TableMessage::FirstPage),
            nav(lucide::chevron_left(), has_previous, TableMessage::PreviousPage),
            page_links(pagination),
            nav(lucide::chevron_right(), has_next, TableMessage::NextPage),
            nav(lucide::chevrons_right(), has_next, TableMessage::LastPage),
            page_info,
            space::horizontal(),
            range,
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .padding(SPACING_SM)
    .into()
}

fn page_links(pagination: &PaginationState) -> Element<'_, Message> {
    let current = pagination.current_page();
    let loading = pagination.is_loading();

    page_window(current, pagination.page_count(), PAGE_LINKS)
        .into_iter()
        .fold(Row::new().spacing(SPACING_XS), |links, page| {
            let is_current = page == current;
            let on_press = (!is_current && !loading)
                .then_some(Message::Table(TableMessage::GoToPage(page)));
            let link = button(text(page.api_page().to_string()).size(12))
                .on_press_maybe(on_press)
                .padding([4.0, 8.0])
                .style(if is_current { button_primary } else { button_ghost });
            links.push(link)
        })
        .align_y(Alignment::Center)
        .into()
}

/// Up to `width` consecutive pages, centred on `current` where possible.
pub fn page_window(current: PageIndex, page_count: usize, width: usize) -> Vec<PageIndex> {
    let page_count = page_count.max(1);
    let width = width.clamp(1, page_count);
    let current = current.get().min(page_count - 1);
    let first = current
        .saturating_sub(width / 2)
        .min(page_count - width);
    (first..first + width).map(PageIndex::new).collect()
}

/// "13-24 of 120", or a loading/empty note.
pub fn range_label(pagination: &PaginationState) -> String {
    if pagination.is_loading() {
        return "Loading...".to_string();
    }
    match pagination.row_range() {
        Some((start, end)) => format!("{start}-{end} of {}", pagination.total_count()),
        None => "No rows".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artview_model::{ArtworkId, ArtworkRecord, FetchedPage, PageIndex};

    fn record(id: u64) -> ArtworkRecord {
        ArtworkRecord {
            id: ArtworkId(id),
            title: format!("Artwork {id}"),
            artist_display: "Unknown".to_string(),
            place_of_origin: "Chicago".to_string(),
            inscriptions: None,
            date_start: 1900,
            date_end: 1901,
        }
    }

    fn window(current: usize, page_count: usize) -> Vec<usize> {
        page_window(PageIndex::new(current), page_count, PAGE_LINKS)
            .into_iter()
            .map(PageIndex::get)
            .collect()
    }

    #[test]
    fn test_page_window_is_centred() {
        assert_eq!(window(10, 50), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_page_window_at_edges() {
        assert_eq!(window(0, 50), vec![0, 1, 2, 3, 4]);
        assert_eq!(window(49, 50), vec![45, 46, 47, 48, 49]);
        assert_eq!(window(0, 3), vec![0, 1, 2]);
        assert_eq!(window(0, 0), vec![0]);
    }

    #[test]
    fn test_range_label() {
        let mut pagination = PaginationState::new();
        let ticket = pagination.request(PageIndex::new(1));
        assert_eq!(range_label(&pagination), "Loading...");

        let records = (13..=24).map(record).collect();
        pagination.complete(ticket, FetchedPage::new(records, 120));
        assert_eq!(range_label(&pagination), "13-24 of 120");

        let ticket = pagination.request(PageIndex::new(20));
        pagination.complete(ticket, FetchedPage::empty());
        assert_eq!(range_label(&pagination), "No rows");
    }
}
