mod app;
mod config;
mod error;
mod feed;
mod logging;
mod state;
mod ui;

use app::App;
use config::Config;
use error::StartupError;
use feed::loader::FeedClient;

fn main() -> Result<(), StartupError> {
    logging::initialize_logging()?;

    let config = Config::load();
    let feed = FeedClient::new(&config)?;
    tracing::info!(
        "APOD Gallery v{} (feed: {})",
        env!("CARGO_PKG_VERSION"),
        feed.url()
    );

    iced::application("APOD Gallery", App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size((1200.0, 860.0))
        .centered()
        .run_with(move || App::new(config, feed))?;

    Ok(())
}
