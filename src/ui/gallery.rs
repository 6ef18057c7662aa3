use iced::widget::{button, column, container, scrollable, stack, text, Image};
use iced::{Alignment, Color, ContentFit, Element, Length, Pixels};
use iced_aw::Wrap;

use crate::app::Message;
use crate::feed::cache::{ImageCache, ImageState};
use crate::state::data::{format_long_date, DateRange, Entry};

const CARD_WIDTH: f32 = 260.0;
const THUMBNAIL_HEIGHT: f32 = 180.0;
const ERROR_COLOR: Color = Color {
    r: 0.95,
    g: 0.35,
    b: 0.35,
    a: 1.0,
};

/// What the results area is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryState {
    /// Nothing requested yet
    Idle,
    Loading,
    /// The range matched no entries (not an error)
    Empty,
    Error(String),
    /// Cards for the current selection
    Ready(usize),
}

impl GalleryState {
    pub fn for_count(count: usize) -> Self {
        if count == 0 {
            GalleryState::Empty
        } else {
            GalleryState::Ready(count)
        }
    }
}

/// Build the results area
///
/// Cards carry only their position in `entries`; the session maps it
/// back to the entry when a card is pressed.
pub fn view<'a>(
    state: &'a GalleryState,
    entries: &'a [Entry],
    range: Option<DateRange>,
    thumbnails: &'a ImageCache,
) -> Element<'a, Message> {
    match state {
        GalleryState::Idle => message_view(
            text("Pick a date range and press \"Get Space Images\".").size(18).into(),
            None,
        ),
        GalleryState::Loading => message_view(text("Loading space photos...").size(18).into(), None),
        GalleryState::Empty => message_view(
            text("No space images found for the selected date range.").size(18).into(),
            Some("Try selecting a different date range."),
        ),
        GalleryState::Error(message) => {
            message_view(text(message).size(18).color(ERROR_COLOR).into(), None)
        }
        GalleryState::Ready(count) => {
            let cards = entries
                .iter()
                .enumerate()
                .map(|(position, entry)| card(position, entry, thumbnails))
                .collect();

            let grid = Wrap::with_elements(cards)
                .spacing(Pixels(16.0))
                .line_spacing(Pixels(16.0));

            column![
                text(summary(*count, range)).size(14),
                scrollable(grid).height(Length::Fill),
            ]
            .spacing(10)
            .into()
        }
    }
}

fn summary(count: usize, range: Option<DateRange>) -> String {
    let noun = if count == 1 { "image" } else { "images" };
    match range {
        Some(range) => format!(
            "Showing {count} {noun} from {} to {}",
            format_long_date(range.start()),
            format_long_date(range.end())
        ),
        None => format!("Showing {count} {noun}"),
    }
}

fn card<'a>(position: usize, entry: &'a Entry, thumbnails: &'a ImageCache) -> Element<'a, Message> {
    let picture = thumbnail(thumbnails.get(entry.gallery_image_url()));

    let picture: Element<'a, Message> = if entry.is_video() {
        let badge = container(text("VIDEO").size(12))
            .padding([2, 6])
            .style(container::rounded_box);
        stack![picture, container(badge).padding(8)].into()
    } else {
        picture
    };

    let info = column![
        text(&entry.title).size(16),
        text(entry.display_date()).size(13),
    ]
    .spacing(4);

    button(column![picture, info].spacing(8))
        .on_press(Message::OpenDetail(position))
        .padding(10)
        .width(Length::Fixed(CARD_WIDTH))
        .style(button::secondary)
        .into()
}

fn thumbnail<'a>(state: Option<&ImageState>) -> Element<'a, Message> {
    match state {
        Some(ImageState::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(THUMBNAIL_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageState::Failed) => placeholder("No preview"),
        Some(ImageState::Loading) | None => placeholder("Loading..."),
    }
}

fn placeholder<'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(14))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(THUMBNAIL_HEIGHT))
        .style(container::bordered_box)
        .into()
}

fn message_view<'a>(headline: Element<'a, Message>, hint: Option<&'a str>) -> Element<'a, Message> {
    let mut content = column![headline].spacing(8).align_x(Alignment::Center);
    if let Some(hint) = hint {
        content = content.push(text(hint).size(14));
    }

    container(content).padding(40).center_x(Length::Fill).into()
}
