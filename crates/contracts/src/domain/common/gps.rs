use serde::{Deserialize, Serialize};

/// Координаты, зафиксированные при создании документа (только отображение)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GpsCoordinates {
    /// Широта
    pub lat: f64,
    /// Долгота
    pub lon: f64,
}

impl GpsCoordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Формат "lat, lon" с шестью знаками
    pub fn display(&self) -> String {
        format!("{:.6}, {:.6}", self.lat, self.lon)
    }
}
