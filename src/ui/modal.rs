use iced::widget::{button, center, column, container, mouse_area, opaque, stack, text};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::app::Message;

/// Show `content` above `base` on a dimmed backdrop
///
/// The overlay swallows all input, so the page underneath can't be
/// scrolled or clicked while it is open. With `on_blur` set, a click
/// on the backdrop (outside the content) dismisses the overlay.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Option<Message>,
) -> Element<'a, Message> {
    let backdrop = center(opaque(content)).style(|_theme: &Theme| container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });

    let overlay: Element<'a, Message> = match on_blur {
        Some(message) => opaque(mouse_area(backdrop).on_press(message)),
        None => opaque(backdrop),
    };

    stack![base.into(), overlay].into()
}

/// Blocking notice with a single acknowledge button
pub fn notice(message: &str) -> Element<'_, Message> {
    let content = column![
        text(message).size(16),
        button("OK").on_press(Message::DismissNotice).padding([6, 24]),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(content)
        .padding(24)
        .width(Length::Fixed(420.0))
        .style(container::rounded_box)
        .into()
}
