//! Property portfolio models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy state of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Occupied => "occupied",
            PropertyStatus::Maintenance => "maintenance",
        };
        write!(f, "{}", s)
    }
}

/// A managed property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: u32,
    pub name: String,
    pub address: String,
    /// Property type ("Villa", "Condo").
    #[serde(rename = "type")]
    pub kind: String,
    pub bedrooms: u8,
    /// Maximum number of guests.
    pub capacity: u8,
    pub status: PropertyStatus,
    /// Remote photo. The terminal never fetches it and shows a placeholder instead.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
