use chrono::{Local, NaiveDate};
use iced::widget::image::Handle;
use iced::widget::{column, container, text};
use iced::{keyboard, Element, Length, Subscription, Task, Theme};
use iced_aw::date_picker::Date;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{FetchError, ImageError};
use crate::feed::cache::{DownloadQueue, ImageCache};
use crate::feed::loader::FeedClient;
use crate::feed::{preview, thumbnail};
use crate::state::data::{DateRange, Dataset};
use crate::state::session::Session;
use crate::ui::controls::{self, DateField, DateInputs};
use crate::ui::detail::{self, DetailView};
use crate::ui::gallery::{self, GalleryState};
use crate::ui::{fact, modal};

/// Shown in place of the gallery when the feed can't be loaded
pub const LOAD_FAILED: &str = "Failed to load space images. Please try again.";

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    StartDateChanged(String),
    EndDateChanged(String),
    OpenDatePicker(DateField),
    CancelDatePicker,
    DatePicked(DateField, Date),
    /// User pressed "Get Space Images"
    GetImages,
    /// Feed request finished; carries the range that was active when it was issued
    DatasetLoaded(DateRange, Result<Arc<Dataset>, FetchError>),
    ThumbnailLoaded(String, Result<Handle, ImageError>),
    PreviewLoaded(String, Result<Handle, ImageError>),
    /// A gallery card was pressed
    OpenDetail(usize),
    CloseDetail,
    /// Open a video link in the system browser
    OpenLink(String),
    DismissNotice,
    EscapePressed,
}

/// Main application state
pub struct App {
    config: Config,
    feed: FeedClient,
    /// Cached feed and current selection
    session: Session,
    inputs: DateInputs,
    gallery: GalleryState,
    thumbnails: ImageCache,
    /// Thumbnail downloads waiting for a slot
    downloads: DownloadQueue,
    /// Working preview of the open overlay only
    previews: ImageCache,
    /// Open detail overlay
    detail: Option<DetailView>,
    /// Blocking validation notice
    notice: Option<String>,
    fact: &'static str,
}

impl App {
    /// Create a new instance of the application
    pub fn new(config: Config, feed: FeedClient) -> (Self, Task<Message>) {
        let today = Local::now().date_naive();
        let app = Self::with_today(config, feed, today, fact::random_fact());

        tracing::info!(
            "🎨 APOD Gallery ready, default range {} to {}",
            app.inputs.start,
            app.inputs.end
        );

        (app, Task::none())
    }

    fn with_today(config: Config, feed: FeedClient, today: NaiveDate, fact: &'static str) -> Self {
        let inputs = DateInputs::from_range(DateRange::ending_on(today, config.default_range_days));
        let downloads = DownloadQueue::new(config.max_downloads);

        Self {
            config,
            feed,
            session: Session::new(),
            inputs,
            gallery: GalleryState::Idle,
            thumbnails: ImageCache::new(),
            downloads,
            previews: ImageCache::new(),
            detail: None,
            notice: None,
            fact,
        }
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StartDateChanged(value) => {
                self.inputs.start = value;
                Task::none()
            }
            Message::EndDateChanged(value) => {
                self.inputs.end = value;
                Task::none()
            }
            Message::OpenDatePicker(field) => {
                self.inputs.picking = Some(field);
                Task::none()
            }
            Message::CancelDatePicker => {
                self.inputs.picking = None;
                Task::none()
            }
            Message::DatePicked(field, date) => {
                match controls::from_picker_date(date) {
                    Some(date) => self.inputs.pick(field, date),
                    None => {
                        tracing::warn!("Ignoring invalid calendar date {date:?}");
                        self.inputs.picking = None;
                    }
                }
                Task::none()
            }
            Message::GetImages => self.get_images(),
            Message::DatasetLoaded(range, Ok(dataset)) => {
                self.session.store_dataset(dataset);
                self.show_range(range)
            }
            Message::DatasetLoaded(_, Err(e)) => {
                tracing::error!("Error fetching images: {e}");
                self.gallery = GalleryState::Error(LOAD_FAILED.to_string());
                Task::none()
            }
            Message::ThumbnailLoaded(url, result) => {
                self.thumbnails.finish(url, result);
                self.downloads.complete();
                self.start_downloads()
            }
            Message::PreviewLoaded(url, result) => {
                self.previews.finish(url, result);
                Task::none()
            }
            Message::OpenDetail(position) => self.open_detail(position),
            Message::CloseDetail => {
                self.close_detail();
                Task::none()
            }
            Message::OpenLink(url) => {
                tracing::info!("Opening {url} in the browser");
                if let Err(e) = webbrowser::open(&url) {
                    tracing::warn!("⚠️  Could not open {url}: {e}");
                }
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::EscapePressed => {
                // Innermost layer first: notice, calendar, then detail
                if self.notice.take().is_none() && self.inputs.picking.take().is_none() {
                    self.close_detail();
                }
                Task::none()
            }
        }
    }

    /// Validate the inputs, then filter the cached feed or fetch it first
    fn get_images(&mut self) -> Task<Message> {
        let range = match self.inputs.validate() {
            Ok(range) => range,
            Err(e) => {
                tracing::warn!("Rejected date range: {e}");
                self.notice = Some(e.to_string());
                return Task::none();
            }
        };

        if self.session.is_loaded() {
            return self.show_range(range);
        }

        // A second press while this is pending issues another fetch;
        // whichever response arrives last fills the cache.
        self.gallery = GalleryState::Loading;
        let feed = self.feed.clone();
        Task::perform(async move { feed.fetch().await }, move |result| {
            Message::DatasetLoaded(range, result)
        })
    }

    fn show_range(&mut self, range: DateRange) -> Task<Message> {
        let Some(count) = self.session.apply_range(range) else {
            return Task::none();
        };

        tracing::info!(
            "Showing {count} entries from {} to {}",
            range.start(),
            range.end()
        );
        self.gallery = GalleryState::for_count(count);
        self.request_thumbnails()
    }

    /// Queue every card thumbnail not seen before
    ///
    /// Thumbnails still waiting from the previous selection are dropped.
    fn request_thumbnails(&mut self) -> Task<Message> {
        for url in self.downloads.clear_pending() {
            self.thumbnails.forget(&url);
        }

        for entry in self.session.selection() {
            let url = entry.gallery_image_url();
            if self.thumbnails.begin(url) {
                self.downloads.push(url.to_string());
            }
        }

        let task = self.start_downloads();
        tracing::debug!(
            "Thumbnails: {} downloading, {} queued, {} known",
            self.downloads.in_flight(),
            self.downloads.pending(),
            self.thumbnails.len()
        );
        task
    }

    /// Start queued thumbnail downloads up to the concurrency limit
    fn start_downloads(&mut self) -> Task<Message> {
        let size = self.config.thumbnail_size;

        let tasks = self.downloads.start_next().into_iter().map(|url| {
            let http = self.feed.http().clone();
            Task::perform(
                thumbnail::load_thumbnail(http, url.clone(), size),
                move |result| Message::ThumbnailLoaded(url.clone(), result),
            )
        });

        Task::batch(tasks)
    }

    fn open_detail(&mut self, position: usize) -> Task<Message> {
        let Some(entry) = self.session.entry_at(position) else {
            tracing::warn!("No entry at gallery position {position}");
            return Task::none();
        };

        let detail = detail::present(entry);
        // Only the open overlay keeps its working preview
        self.previews.clear();
        let task = match detail.media.image_url() {
            Some(url) if self.previews.begin(&url) => {
                let http = self.feed.http().clone();
                Task::perform(
                    preview::load_preview(http, url.clone(), self.config.preview_size),
                    move |result| Message::PreviewLoaded(url.clone(), result),
                )
            }
            _ => Task::none(),
        };

        self.detail = Some(detail);
        task
    }

    fn close_detail(&mut self) {
        self.detail = None;
        self.previews.clear();
    }

    /// Build the user interface
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            text("Space Explorer").size(36),
            fact::view(self.fact),
            controls::view(&self.inputs),
            gallery::view(
                &self.gallery,
                self.session.selection(),
                self.session.active_range(),
                &self.thumbnails,
            ),
        ]
        .spacing(20)
        .padding(30);

        let base = container(content)
            .width(Length::Fill)
            .height(Length::Fill);

        if let Some(notice) = &self.notice {
            modal::modal(base, modal::notice(notice), None)
        } else if let Some(detail) = &self.detail {
            modal::modal(
                base,
                detail::view(detail, &self.previews),
                Some(Message::CloseDetail),
            )
        } else {
            base.into()
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::EscapePressed),
            _ => None,
        })
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
