//! Screen description parsing
//!
//! Extracts resolution and panel-type flags from strings like
//! "IPS Panel Retina Display 2560x1600".

use regex::Regex;
use std::sync::LazyLock;

static RESOLUTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)x(\d+)").unwrap());

/// Display features extracted from a free-text screen description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayFeatures {
    pub resolution_x: Option<u32>,
    pub resolution_y: Option<u32>,
    pub is_ips: bool,
    pub is_retina: bool,
}

/// Parse a free-text screen description.
///
/// The first `<digits>x<digits>` occurrence (lowercase separator) supplies
/// the resolution; without one both axes stay absent. IPS and Retina flags
/// are substring checks on the uppercased text.
pub fn parse_display(text: Option<&str>) -> DisplayFeatures {
    let Some(text) = text else {
        return DisplayFeatures::default();
    };

    let (resolution_x, resolution_y) = match RESOLUTION_RE.captures(text) {
        Some(caps) => (caps[1].parse::<u32>().ok(), caps[2].parse::<u32>().ok()),
        None => (None, None),
    };

    let upper = text.to_uppercase();

    DisplayFeatures {
        resolution_x,
        resolution_y,
        is_ips: upper.contains("IPS"),
        is_retina: upper.contains("RETINA"),
    }
}
