use iced::widget::{column, container, text};
use iced::{Element, Length};
use rand::seq::SliceRandom;

use crate::app::Message;

/// Facts for the "Did You Know?" panel
pub const SPACE_FACTS: [&str; 10] = [
    "A day on Venus is longer than its year! Venus takes 243 Earth days to rotate once but only 225 Earth days to orbit the Sun.",
    "Jupiter has at least 79 known moons, including four large moons discovered by Galileo in 1610.",
    "The Great Red Spot on Jupiter is a storm that has been raging for over 300 years and is larger than Earth.",
    "Saturn would float in water if there was a bathtub big enough to hold it, as it's less dense than water.",
    "One teaspoon of neutron star material would weigh about 6 billion tons on Earth.",
    "The Milky Way galaxy is on a collision course with the Andromeda galaxy, but won't collide for about 4.5 billion years.",
    "There are more stars in the observable universe than grains of sand on all Earth's beaches combined.",
    "Mars has the largest volcano in the solar system - Olympus Mons is about 13.6 miles (22 km) high.",
    "The temperature on the Moon can range from 250°F (121°C) in sunlight to -250°F (-157°C) in shadow.",
    "Light from the Sun takes about 8 minutes and 20 seconds to reach Earth.",
];

pub fn random_fact() -> &'static str {
    SPACE_FACTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(SPACE_FACTS[0])
}

pub fn view(fact: &str) -> Element<'_, Message> {
    container(column![text("Did You Know?").size(18), text(fact).size(14)].spacing(6))
        .padding(15)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
