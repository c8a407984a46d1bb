#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// One rentable car as returned by the listings endpoint.
///
/// Wire format is camelCase JSON; the field set mirrors the server's car
/// record. Immutable once fetched.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarListing {
    pub name: String,
    pub mileage: String,
    pub thumbnail_url: String,
    pub daily_price: f64,
    pub monthly_price: f64,
    pub gear_type: GearType,
    pub fuel_type: String,
}

/// Gearbox type of a listed car.
///
/// `Other` absorbs wire values this client does not know, so a new
/// server-side variant never breaks deserialization of the whole batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GearType {
    #[default]
    Auto,
    Manual,
    Other,
}

impl GearType {
    /// Human-readable label for card rendering.
    pub fn label(self) -> &'static str {
        match self {
            GearType::Auto => "Auto",
            GearType::Manual => "Manual",
            GearType::Other => "Other",
        }
    }
}

impl From<String> for GearType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Auto" => GearType::Auto,
            "Manual" => GearType::Manual,
            _ => GearType::Other,
        }
    }
}

impl From<GearType> for String {
    fn from(value: GearType) -> Self {
        value.label().to_owned()
    }
}
