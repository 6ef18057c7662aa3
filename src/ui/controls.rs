use chrono::{Datelike, NaiveDate};
use iced::widget::{button, column, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_aw::date_picker::Date;
use iced_aw::DatePicker;

use crate::app::Message;
use crate::error::ValidationError;
use crate::state::data::{DateRange, DATE_FORMAT};

/// Which end of the range a control edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

/// Raw text of the two date inputs, plus the open calendar (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateInputs {
    pub start: String,
    pub end: String,
    pub picking: Option<DateField>,
}

impl DateInputs {
    pub fn from_range(range: DateRange) -> Self {
        Self {
            start: range.start().format(DATE_FORMAT).to_string(),
            end: range.end().format(DATE_FORMAT).to_string(),
            picking: None,
        }
    }

    pub fn validate(&self) -> Result<DateRange, ValidationError> {
        DateRange::parse(&self.start, &self.end)
    }

    pub fn text(&self, field: DateField) -> &str {
        match field {
            DateField::Start => &self.start,
            DateField::End => &self.end,
        }
    }

    /// Date currently typed in `field`, if it parses
    pub fn parsed(&self, field: DateField) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.text(field).trim(), DATE_FORMAT).ok()
    }

    /// Fill `field` from the calendar and close it
    pub fn pick(&mut self, field: DateField, date: NaiveDate) {
        let value = date.format(DATE_FORMAT).to_string();
        match field {
            DateField::Start => self.start = value,
            DateField::End => self.end = value,
        }
        self.picking = None;
    }
}

pub fn to_picker_date(date: NaiveDate) -> Date {
    Date::from_ymd(date.year(), date.month(), date.day())
}

pub fn from_picker_date(date: Date) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year, date.month, date.day)
}

pub fn view(inputs: &DateInputs) -> Element<'_, Message> {
    row![
        date_field(inputs, DateField::Start),
        date_field(inputs, DateField::End),
        button("Get Space Images")
            .on_press(Message::GetImages)
            .padding(10),
    ]
    .spacing(20)
    .align_y(Alignment::End)
    .into()
}

fn date_field(inputs: &DateInputs, field: DateField) -> Element<'_, Message> {
    let (label, on_input): (&str, fn(String) -> Message) = match field {
        DateField::Start => ("Start Date", Message::StartDateChanged),
        DateField::End => ("End Date", Message::EndDateChanged),
    };

    let input = text_input("YYYY-MM-DD", inputs.text(field))
        .on_input(on_input)
        .on_submit(Message::GetImages)
        .padding(8)
        .width(Length::Fixed(150.0));

    let current = inputs
        .parsed(field)
        .map(to_picker_date)
        .unwrap_or_else(Date::today);

    let picker = DatePicker::new(
        inputs.picking == Some(field),
        current,
        button(text("Pick").size(14))
            .padding(8)
            .on_press(Message::OpenDatePicker(field)),
        Message::CancelDatePicker,
        move |date| Message::DatePicked(field, date),
    );

    column![text(label).size(14), row![input, picker].spacing(6)]
        .spacing(4)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::date;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_range_formats_iso_dates() {
        let range = DateRange::ending_on(date("2024-03-02"), 7);

        let inputs = DateInputs::from_range(range);

        assert_eq!(inputs.start, "2024-02-24");
        assert_eq!(inputs.end, "2024-03-02");
        assert_eq!(inputs.validate(), Ok(range));
    }

    #[test]
    fn test_validate_rejects_empty_input() {
        let inputs = DateInputs {
            start: String::new(),
            end: "2024-03-02".to_string(),
            picking: None,
        };
        assert_eq!(inputs.validate(), Err(ValidationError::MissingDate));
    }

    #[test]
    fn test_pick_fills_field_and_closes_calendar() {
        let mut inputs = DateInputs::from_range(DateRange::ending_on(date("2024-04-10"), 7));
        inputs.picking = Some(DateField::End);

        inputs.pick(DateField::End, date("2024-04-20"));

        assert_eq!(inputs.end, "2024-04-20");
        assert_eq!(inputs.start, "2024-04-03");
        assert_eq!(inputs.picking, None);
    }

    #[test]
    fn test_parsed_ignores_unfinished_text() {
        let inputs = DateInputs {
            start: "2024-04-0".to_string(),
            end: " 2024-04-05 ".to_string(),
            picking: None,
        };

        assert_eq!(inputs.parsed(DateField::Start), None);
        assert_eq!(inputs.parsed(DateField::End), Some(date("2024-04-05")));
    }

    #[test]
    fn test_picker_date_conversion() {
        let picked = to_picker_date(date("2024-02-29"));
        assert_eq!((picked.year, picked.month, picked.day), (2024, 2, 29));
        assert_eq!(from_picker_date(picked), Some(date("2024-02-29")));

        assert_eq!(from_picker_date(Date::from_ymd(2023, 2, 30)), None);
    }
}
