//! Detail overlay for a single entry
//!
//! `present` decides what to show and is free of any widget code;
//! `view` turns that decision into widgets.

use iced::widget::{
    button, center, column, container, horizontal_space, row, scrollable, stack, text, Image,
};
use iced::{ContentFit, Element, Length};

use crate::app::Message;
use crate::feed::cache::{ImageCache, ImageState};
use crate::feed::video::{extract_youtube_id, VideoId};
use crate::state::data::{Entry, MediaType};

/// Label of the generic video placeholder
pub const VIDEO_PLACEHOLDER: &str = "Video Content";

const MEDIA_HEIGHT: f32 = 460.0;

/// How the media area of the overlay is filled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMedia {
    /// Still image, from `hdurl` when available
    Image { url: String },
    /// Video with a published preview frame; pressing it opens `link`
    VideoPreview { preview_url: String, link: String },
    /// Player for a recognized video host
    EmbeddedPlayer { video: VideoId },
    /// Unrecognized video link without a preview frame
    Placeholder { link: String },
}

impl DetailMedia {
    /// Remote image to download for this media, if any
    pub fn image_url(&self) -> Option<String> {
        match self {
            DetailMedia::Image { url } => Some(url.clone()),
            DetailMedia::VideoPreview { preview_url, .. } => Some(preview_url.clone()),
            DetailMedia::EmbeddedPlayer { video } => Some(video.still_url()),
            DetailMedia::Placeholder { .. } => None,
        }
    }

    /// Where pressing the media area leads, if anywhere
    pub fn link(&self) -> Option<String> {
        match self {
            DetailMedia::Image { .. } => None,
            DetailMedia::VideoPreview { link, .. } | DetailMedia::Placeholder { link } => {
                Some(link.clone())
            }
            DetailMedia::EmbeddedPlayer { video } => Some(video.embed_url()),
        }
    }
}

/// Everything the overlay shows for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub date: String,
    pub explanation: String,
    pub copyright: Option<String>,
    pub media: DetailMedia,
}

pub fn present(entry: &Entry) -> DetailView {
    let media = match entry.media_type {
        MediaType::Image => DetailMedia::Image {
            url: entry.full_image_url().to_string(),
        },
        MediaType::Video => present_video(entry),
    };

    DetailView {
        title: entry.title.clone(),
        date: entry.display_date(),
        explanation: entry.explanation_text().to_string(),
        copyright: entry
            .copyright
            .as_deref()
            .map(str::trim)
            .filter(|credit| !credit.is_empty())
            .map(str::to_string),
        media,
    }
}

fn present_video(entry: &Entry) -> DetailMedia {
    if let Some(preview_url) = &entry.thumbnail_url {
        return DetailMedia::VideoPreview {
            preview_url: preview_url.clone(),
            link: entry.url.clone(),
        };
    }

    match extract_youtube_id(&entry.url) {
        Some(video) => DetailMedia::EmbeddedPlayer { video },
        None => DetailMedia::Placeholder {
            link: entry.url.clone(),
        },
    }
}

pub fn view<'a>(detail: &'a DetailView, previews: &'a ImageCache) -> Element<'a, Message> {
    let close = button(text("Close").size(14))
        .on_press(Message::CloseDetail)
        .style(button::text);

    let mut info = column![
        text(&detail.title).size(26),
        text(&detail.date).size(15),
    ]
    .spacing(6);

    if let Some(credit) = &detail.copyright {
        info = info.push(text(format!("© {credit}")).size(13));
    }
    info = info.push(text(&detail.explanation).size(15));

    let panel = column![
        row![horizontal_space(), close],
        media(&detail.media, previews),
        scrollable(info).height(Length::Fixed(220.0)),
    ]
    .spacing(12);

    container(panel)
        .padding(20)
        .width(Length::Fixed(900.0))
        .style(container::rounded_box)
        .into()
}

fn media<'a>(media: &'a DetailMedia, previews: &'a ImageCache) -> Element<'a, Message> {
    match media {
        DetailMedia::Image { url } => picture(previews.get(url)),
        DetailMedia::VideoPreview { preview_url, .. } => linked(
            picture(previews.get(preview_url)),
            media,
            "Click to watch the video",
        ),
        DetailMedia::EmbeddedPlayer { video } => {
            let play = container(text("Play").size(20))
                .padding([8, 24])
                .style(container::rounded_box);
            let player = stack![
                picture(previews.get(&video.still_url())),
                center(play).height(Length::Fixed(MEDIA_HEIGHT)),
            ];
            linked(player.into(), media, "YouTube player")
        }
        DetailMedia::Placeholder { .. } => {
            let placeholder = container(text(VIDEO_PLACEHOLDER).size(18))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(MEDIA_HEIGHT))
                .style(container::bordered_box);
            linked(placeholder.into(), media, "Video content - click to view")
        }
    }
}

/// Make the media area open the entry's link in the browser
fn linked<'a>(
    content: Element<'a, Message>,
    media: &DetailMedia,
    caption: &'a str,
) -> Element<'a, Message> {
    let mut area = button(content).padding(0).style(button::text);
    if let Some(link) = media.link() {
        area = area.on_press(Message::OpenLink(link));
    }

    column![area, text(caption).size(12)].spacing(4).into()
}

fn picture<'a>(state: Option<&ImageState>) -> Element<'a, Message> {
    match state {
        Some(ImageState::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(MEDIA_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        Some(ImageState::Failed) => status("Image unavailable"),
        Some(ImageState::Loading) | None => status("Loading image..."),
    }
}

fn status<'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(16))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(MEDIA_HEIGHT))
        .into()
}
