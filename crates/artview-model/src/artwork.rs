//! Artwork record type.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown in place of missing inscriptions.
pub const NO_INSCRIPTIONS: &str = "No inscriptions";

/// Source-assigned artwork identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub u64);

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ArtworkId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A single artwork as listed by the museum API.
///
/// Records are immutable once fetched and identified by [`ArtworkRecord::id`].
/// The API returns `null` for many text and date fields; those deserialize to
/// empty strings and `0` respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    /// Unique identifier assigned by the source.
    pub id: ArtworkId,

    /// Artwork title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Artist name with dates and nationality, as one display string.
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist_display: String,

    /// Place the artwork was made.
    #[serde(default, deserialize_with = "null_as_default")]
    pub place_of_origin: String,

    /// Inscriptions, if any were recorded.
    #[serde(default)]
    pub inscriptions: Option<String>,

    /// Earliest year of creation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_start: i32,

    /// Latest year of creation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_end: i32,
}

impl ArtworkRecord {
    /// Inscriptions text, or [`NO_INSCRIPTIONS`] when absent or blank.
    #[must_use]
    pub fn inscriptions_or_default(&self) -> &str {
        match self.inscriptions.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => NO_INSCRIPTIONS,
        }
    }

    /// Cell values in table column order.
    ///
    /// Columns: title, artist, origin, start date, end date, inscriptions.
    #[must_use]
    pub fn table_cells(&self) -> [String; 6] {
        [
            self.title.clone(),
            self.artist_display.clone(),
            self.place_of_origin.clone(),
            self.date_start.to_string(),
            self.date_end.to_string(),
            self.inscriptions_or_default().to_string(),
        ]
    }
}

/// Table column headers matching [`ArtworkRecord::table_cells`].
pub const TABLE_HEADERS: [&str; 6] = [
    "Title",
    "Artist",
    "Origin",
    "Start Date",
    "End Date",
    "Inscriptions",
];

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
