use crate::domain::common::{money_eq, DocumentStatus, GpsCoordinates};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Статус возврата
///
/// pending → approved | rejected → (approved) processed.
/// rejected и processed — терминальные.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnStatus {
    Pending,
    Approved,
    Processed,
    Rejected,
}

impl DocumentStatus for ReturnStatus {
    const KIND: &'static str = "return";

    fn all() -> &'static [Self] {
        &[
            ReturnStatus::Pending,
            ReturnStatus::Approved,
            ReturnStatus::Processed,
            ReturnStatus::Rejected,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ReturnStatus::Pending => "pending",
            ReturnStatus::Approved => "approved",
            ReturnStatus::Processed => "processed",
            ReturnStatus::Rejected => "rejected",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReturnStatus::Pending => "Pending",
            ReturnStatus::Approved => "Approved",
            ReturnStatus::Processed => "Processed",
            ReturnStatus::Rejected => "Rejected",
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, ReturnStatus::Processed | ReturnStatus::Rejected)
    }
}

/// Строка возврата
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnLine {
    pub id: String,
    /// Строка исходного счёта
    pub invoice_item_id: String,
    pub product_name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub size: String,
    pub unit_price: f64,
    /// Возвращаемое количество
    pub quantity_returned: u32,
    /// Количество в исходном счёте
    pub original_quantity: u32,
    /// Причина по строке
    #[serde(default)]
    pub reason: Option<String>,
    pub total: f64,
}

impl ReturnLine {
    /// Возвращено больше, чем было в счёте (сервер это не проверяет)
    pub fn exceeds_original(&self) -> bool {
        self.quantity_returned > self.original_quantity
    }
}

/// Возврат товара покупателем (агрегат a003)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Return {
    pub id: String,
    /// Исходный счёт
    pub invoice_id: String,
    pub customer_name: String,
    pub agency_id: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub processed_by: Option<String>,
    pub status: ReturnStatus,
    /// Общая причина возврата
    pub reason: String,
    pub gps_coordinates: GpsCoordinates,
    pub items: Vec<ReturnLine>,
    pub total: f64,
}

impl Return {
    /// Возвращённое количество по строке счёта, если она есть в возврате
    pub fn returned_quantity_for(&self, invoice_item_id: &str) -> Option<u32> {
        let mut matches = self
            .items
            .iter()
            .filter(|l| l.invoice_item_id == invoice_item_id)
            .peekable();
        matches.peek()?;
        Some(matches.map(|l| l.quantity_returned).sum())
    }

    pub fn items_total(&self) -> f64 {
        self.items.iter().map(|l| l.total).sum()
    }

    /// total совпадает с суммой строк
    pub fn totals_reconcile(&self) -> bool {
        money_eq(self.items_total(), self.total)
    }

    /// Есть расхождения, о которых стоит предупредить (не блокирует действия)
    pub fn has_inconsistencies(&self) -> bool {
        !self.totals_reconcile() || self.items.iter().any(ReturnLine::exceeds_original)
    }

    pub fn total_units(&self) -> u32 {
        self.items.iter().map(|l| l.quantity_returned).sum()
    }
}
