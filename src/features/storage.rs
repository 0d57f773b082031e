//! Storage description parsing
//!
//! Turns free-text memory strings like "128GB SSD + 1TB HDD" into typed
//! per-kind capacity totals in gigabytes.

use regex::Regex;
use std::sync::LazyLock;

static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(GB|TB)").unwrap());

/// Storage capacity totals extracted from a memory description.
///
/// All quantities are gigabytes. A segment that cannot be parsed contributes
/// nothing; the parser never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorageBreakdown {
    pub ssd: u32,
    pub hdd: u32,
    pub hybrid: u32,
    pub flash: u32,
}

impl StorageBreakdown {
    /// Combined capacity across all storage kinds.
    pub fn total(&self) -> u32 {
        self.ssd
            .saturating_add(self.hdd)
            .saturating_add(self.hybrid)
            .saturating_add(self.flash)
    }
}

/// Parse a free-text storage description into per-kind capacity totals.
///
/// The input is split on `+` into segments. Each segment contributes its
/// first `<digits> GB|TB` quantity (TB converted to GB) to exactly one
/// bucket, chosen by keyword priority: SSD (unless the segment also says
/// HYBRID), then HDD, then HYBRID, then FLASH/EMMC. Segments without a
/// recognizable quantity or keyword are skipped silently.
pub fn parse_storage(text: Option<&str>) -> StorageBreakdown {
    let mut out = StorageBreakdown::default();

    let Some(text) = text else {
        return out;
    };

    for segment in text.split('+') {
        let segment = segment.trim();

        let Some(caps) = SIZE_RE.captures(segment) else {
            continue;
        };

        // The digit group can overflow u32 on garbage input; treat that the
        // same as no match.
        let Ok(size) = caps[1].parse::<u32>() else {
            continue;
        };
        // Saturating arithmetic: absurd quantities degrade instead of
        // overflowing, the parser never panics.
        let size = if caps[2].eq_ignore_ascii_case("TB") {
            size.saturating_mul(1024)
        } else {
            size
        };

        let upper = segment.to_uppercase();
        if upper.contains("SSD") && !upper.contains("HYBRID") {
            out.ssd = out.ssd.saturating_add(size);
        } else if upper.contains("HDD") {
            out.hdd = out.hdd.saturating_add(size);
        } else if upper.contains("HYBRID") {
            out.hybrid = out.hybrid.saturating_add(size);
        } else if upper.contains("FLASH") || upper.contains("EMMC") {
            out.flash = out.flash.saturating_add(size);
        }
    }

    out
}
