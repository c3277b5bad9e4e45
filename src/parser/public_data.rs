use anyhow::{Context, Result};
use encoding_rs::Encoding;
use serde::Deserialize;
use std::path::Path;

use super::normalize::{extract_city, extract_region};
use crate::schema::{parse_coordinate, Region};

/// Status label of facilities that are currently open
pub const OPERATING_STATUS: &str = "영업중";

/// Raw row of the government golf facility export
#[derive(Debug, Deserialize)]
pub struct FacilityRow {
    #[serde(rename = "사업장명")]
    pub name: String,
    #[serde(rename = "영업상태명", default)]
    pub status: String,
    #[serde(rename = "소재지도로명주소", default)]
    pub road_address: String,
    #[serde(rename = "소재지지번주소", default)]
    pub lot_address: String,
    #[serde(rename = "WGS84위도", default)]
    pub latitude: String,
    #[serde(rename = "WGS84경도", default)]
    pub longitude: String,
}

/// An operating facility from the authoritative export
#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub name: String,
    pub region: Option<Region>,
    pub city: Option<String>,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Facility {
    /// `name (region city)`, leaving out whichever could not be resolved
    pub fn preview(&self) -> String {
        let place: Vec<&str> = self
            .region
            .map(|region| region.label())
            .into_iter()
            .chain(self.city.as_deref())
            .collect();
        format!("{} ({})", self.name, place.join(" "))
    }
}

impl FacilityRow {
    pub fn is_operating(&self) -> bool {
        self.status.trim() == OPERATING_STATUS
    }

    /// Road-name address, or the lot address when the former is blank
    pub fn address(&self) -> &str {
        let road = self.road_address.trim();
        if road.is_empty() {
            self.lot_address.trim()
        } else {
            road
        }
    }

    pub fn into_facility(self) -> Facility {
        let address = self.address().to_string();
        Facility {
            name: self.name.trim().to_string(),
            region: extract_region(&address),
            city: extract_city(&address).map(str::to_string),
            latitude: parse_coordinate(&self.latitude),
            longitude: parse_coordinate(&self.longitude),
            address,
        }
    }
}

/// Decode raw bytes with a WHATWG encoding label (`euc-kr`, `utf-8`, ...).
/// A leading BOM takes precedence over the label.
pub fn decode_text(bytes: &[u8], label: &str) -> Result<String> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .with_context(|| format!("Unknown text encoding: {}", label))?;

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(
            encoding = used.name(),
            "input contained malformed sequences, replaced with U+FFFD"
        );
    }
    Ok(text.into_owned())
}

/// Parse decoded CSV text, keeping operating facilities only
pub fn parse_facilities(text: &str) -> Result<Vec<Facility>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut facilities = Vec::new();
    for (line, result) in reader.deserialize::<FacilityRow>().enumerate() {
        let row = result.with_context(|| format!("Failed to parse CSV row {}", line + 2))?;
        if row.is_operating() {
            facilities.push(row.into_facility());
        }
    }

    Ok(facilities)
}

/// Read and decode the export file, keeping operating facilities only
pub fn read_facilities(path: &Path, encoding: &str) -> Result<Vec<Facility>> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read: {:?}", path))?;
    let text = decode_text(&bytes, encoding)?;
    parse_facilities(&text).with_context(|| format!("Failed to parse: {:?}", path))
}
