//! Latitude/longitude value object embedded in a park record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair embedded by value in a park record.
///
/// Both coordinates are arbitrary-precision decimals. On the wire they are
/// JSON numbers read and written digit for digit (decimal strings are also
/// accepted), and they are persisted as decimal text.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geolocation {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub latitude: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub longitude: Decimal,
}

impl Geolocation {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
