use serde::{Deserialize, Serialize};

// entry
//  ├── id
//  ├── title
//  ├── description
//  ├── location
//  ├── price / rating / superhost
//  ├── capacity
//  │    ├── bedrooms
//  │    └── people
//  └── image

/// One rental listing as delivered by the catalog. The catalog is external
/// data, so every field tolerates absence; a missing field never fails the
/// whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub location: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub superhost: bool,
    pub capacity: Option<Capacity>,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    pub bedrooms: Option<i64>,
    pub people: Option<i64>,
}

impl Listing {
    /// Bedroom count as observed. No display defaulting happens here; an
    /// unknown count stays unknown for faceting and filtering.
    pub fn bedrooms(&self) -> Option<i64> {
        self.capacity.as_ref().and_then(|c| c.bedrooms)
    }

    pub fn people(&self) -> Option<i64> {
        self.capacity.as_ref().and_then(|c| c.people)
    }
}
