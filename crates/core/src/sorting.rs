//! Sort modes for the work listing endpoint.
//!
//! The mode only selects which ordering the storage query applies; the
//! returned rows are aggregated unchanged, so the ordering carries through.

use crate::error::CoreError;

/// Flag value selecting [`SortMode::TitleAsc`].
pub const SORT_BY_TITLE: i64 = 1;
/// Flag value selecting [`SortMode::ReleaseDateDesc`].
pub const SORT_BY_RELEASE_DATE: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Title ascending, in the storage collation's order.
    TitleAsc,
    /// Most recent release first.
    ReleaseDateDesc,
    /// Highest rating first; ties keep storage row order.
    RatingDesc,
}

impl SortMode {
    /// Map a numeric flag to a mode. Every value other than `1` and `2`,
    /// including zero and negatives, selects [`SortMode::RatingDesc`].
    pub fn from_flag(flag: i64) -> Self {
        match flag {
            SORT_BY_TITLE => SortMode::TitleAsc,
            SORT_BY_RELEASE_DATE => SortMode::ReleaseDateDesc,
            _ => SortMode::RatingDesc,
        }
    }

    /// Parse the raw `sort` query value. Unparseable input, including the
    /// empty string, is an error; out-of-range numbers select
    /// [`SortMode::RatingDesc`].
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        raw.trim()
            .parse::<i64>()
            .map(Self::from_flag)
            .map_err(|_| CoreError::Validation(format!("Invalid sort flag: '{raw}'")))
    }
}
