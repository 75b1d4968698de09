use crate::{
    country, display_date::DisplayDate, error::Result, hemisphere::Hemisphere, season::Season,
};
use csv::{ReaderBuilder, Trim};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// One country's independence or national day.
///
/// The display date is kept as scraped so unparseable values can still be
/// reported; parsing happens on demand.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Event {
    pub country: String,
    pub display_date: String,
    /// Numeric ISO 3166-1 code, absent when missing or non-numeric in the source
    pub iso_code: Option<u16>,
}

/// Row shape of the ingested CSV. Columns beyond these are ignored.
#[derive(Debug, Deserialize)]
struct EventRecord {
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Display Date")]
    display_date: String,
    #[serde(rename = "ISO Code", default)]
    iso_code: Option<String>,
}

impl From<EventRecord> for Event {
    fn from(record: EventRecord) -> Self {
        let iso_code = record.iso_code.as_deref().and_then(parse_iso_code);
        if iso_code.is_none() {
            debug!("No usable ISO code for {}", record.country);
        }
        Event {
            country: record.country,
            display_date: record.display_date,
            iso_code,
        }
    }
}

/// Coerce an ISO code cell to a number. Accepts `840` and float-formatted
/// `840.0`; anything else is treated as missing.
fn parse_iso_code(raw: &str) -> Option<u16> {
    let raw = raw.trim();
    if let Ok(code) = raw.parse::<u16>() {
        return Some(code);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&value) {
        Some(value as u16)
    } else {
        None
    }
}

impl Event {
    pub fn new(country: &str, display_date: &str, iso_code: Option<u16>) -> Event {
        Event {
            country: country.to_string(),
            display_date: display_date.to_string(),
            iso_code,
        }
    }

    /// Parsed display date, or None when the string is not `DD.Mon`.
    pub fn date(&self) -> Option<DisplayDate> {
        DisplayDate::parse(&self.display_date).ok()
    }

    pub fn season(&self) -> Season {
        Season::classify(&self.display_date)
    }

    /// Calendar month (1-12) of the display date.
    pub fn month(&self) -> Option<u32> {
        self.date().map(|date| date.month())
    }

    pub fn alpha3(&self) -> Option<&'static str> {
        self.iso_code.and_then(country::alpha3_for_numeric)
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.alpha3()
            .map(Hemisphere::for_alpha3)
            .unwrap_or(Hemisphere::Unknown)
    }

    /// Parse a CSV string of events into a vector of Events.
    ///
    /// Expected CSV headers include `Country` and `Display Date`; `ISO Code`
    /// is optional and any other columns are ignored.
    pub fn parse_event_csv(csv_object: &str) -> Result<Vec<Event>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());
        let mut events: Vec<Event> = Vec::new();
        for row in rdr.deserialize::<EventRecord>() {
            events.push(row?.into());
        }
        info!("Loaded {} events", events.len());
        Ok(events)
    }
}
