use crate::domain::common::GpsCoordinates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Строка счёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    /// ID строки; на него ссылается `invoiceItemId` строки возврата
    pub id: String,
    pub product_name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub size: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total: f64,
}

/// Счёт (агрегат a002)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    #[serde(default)]
    pub invoice_number: Option<String>,
    /// Заказ, из которого выставлен счёт
    #[serde(default)]
    pub sales_order_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub subtotal: f64,
    #[serde(default)]
    pub discount_amount: f64,
    pub total: f64,
    pub gps_coordinates: GpsCoordinates,
    pub items: Vec<InvoiceLine>,
}

impl Invoice {
    /// Номер для заголовка: invoiceNumber, если есть, иначе ID
    pub fn display_number(&self) -> &str {
        self.invoice_number.as_deref().unwrap_or(&self.id)
    }

    pub fn find_line(&self, line_id: &str) -> Option<&InvoiceLine> {
        self.items.iter().find(|l| l.id == line_id)
    }
}
