//! Crop identifiers and display records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DemeterError;

/// The 22 crops the recommender knows about.
///
/// Discriminants are the 1-based class ids the remote model emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Crop {
    Rice = 1,
    Maize = 2,
    Jute = 3,
    Cotton = 4,
    Coconut = 5,
    Papaya = 6,
    Orange = 7,
    Apple = 8,
    Muskmelon = 9,
    Watermelon = 10,
    Grapes = 11,
    Mango = 12,
    Banana = 13,
    Pomegranate = 14,
    Lentil = 15,
    Blackgram = 16,
    Mungbean = 17,
    Mothbeans = 18,
    Pigeonpeas = 19,
    Kidneybeans = 20,
    Chickpea = 21,
    Coffee = 22,
}

impl Crop {
    /// Every crop, in class-id order.
    pub const ALL: [Crop; 22] = [
        Crop::Rice,
        Crop::Maize,
        Crop::Jute,
        Crop::Cotton,
        Crop::Coconut,
        Crop::Papaya,
        Crop::Orange,
        Crop::Apple,
        Crop::Muskmelon,
        Crop::Watermelon,
        Crop::Grapes,
        Crop::Mango,
        Crop::Banana,
        Crop::Pomegranate,
        Crop::Lentil,
        Crop::Blackgram,
        Crop::Mungbean,
        Crop::Mothbeans,
        Crop::Pigeonpeas,
        Crop::Kidneybeans,
        Crop::Chickpea,
        Crop::Coffee,
    ];

    /// Display name, also the lookup key in the catalog.
    pub fn name(&self) -> &'static str {
        self.record().name
    }

    /// The remote model's 1-based class id.
    pub fn class_id(&self) -> u8 {
        *self as u8
    }

    /// Map a remote model class id back to a crop.
    pub fn from_class_id(id: u8) -> Option<Crop> {
        let index = usize::from(id).checked_sub(1)?;
        Crop::ALL.get(index).copied()
    }

    /// The static display record for this crop.
    pub fn record(&self) -> &'static CropRecord {
        crate::catalog::get(*self)
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Crop {
    type Err = DemeterError;

    /// Case-insensitive lookup by display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::catalog::lookup(s)
            .map(|record| record.crop)
            .ok_or_else(|| DemeterError::UnknownCrop(s.to_string()))
    }
}

/// Display record for a crop: its name and a static image URL.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CropRecord {
    #[serde(skip)]
    pub crop: Crop,
    pub name: &'static str,
    pub image: &'static str,
}
