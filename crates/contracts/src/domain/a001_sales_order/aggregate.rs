use crate::domain::common::{DocumentStatus, GpsCoordinates, MONEY_EPSILON};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Статус заказа покупателя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesOrderStatus {
    Pending,
    Approved,
    PartiallyInvoiced,
    Invoiced,
    Cancelled,
    Closed,
}

impl DocumentStatus for SalesOrderStatus {
    const KIND: &'static str = "sales order";

    fn all() -> &'static [Self] {
        &[
            SalesOrderStatus::Pending,
            SalesOrderStatus::Approved,
            SalesOrderStatus::PartiallyInvoiced,
            SalesOrderStatus::Invoiced,
            SalesOrderStatus::Cancelled,
            SalesOrderStatus::Closed,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            SalesOrderStatus::Pending => "pending",
            SalesOrderStatus::Approved => "approved",
            SalesOrderStatus::PartiallyInvoiced => "partially_invoiced",
            SalesOrderStatus::Invoiced => "invoiced",
            SalesOrderStatus::Cancelled => "cancelled",
            SalesOrderStatus::Closed => "closed",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SalesOrderStatus::Pending => "Pending",
            SalesOrderStatus::Approved => "Approved",
            SalesOrderStatus::PartiallyInvoiced => "Partially Invoiced",
            SalesOrderStatus::Invoiced => "Invoiced",
            SalesOrderStatus::Cancelled => "Cancelled",
            SalesOrderStatus::Closed => "Closed",
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(
            self,
            SalesOrderStatus::Invoiced | SalesOrderStatus::Cancelled | SalesOrderStatus::Closed
        )
    }
}

/// Строка заказа (товар)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderLine {
    pub id: String,
    /// Наименование товара
    pub product_name: String,
    pub color: String,
    pub size: String,
    /// Заказанное количество
    pub quantity: u32,
    /// Цена за единицу
    pub unit_price: f64,
    /// Сумма строки
    pub total: f64,
}

/// Заказ покупателя (агрегат a001)
///
/// Предварительное обязательство, которое частично или полностью
/// превращается в один или несколько счетов.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: String,
    /// Номер заказа (например, "SO-2024-0012")
    pub order_number: String,
    pub customer_name: String,
    pub agency_id: String,
    pub status: SalesOrderStatus,
    /// Заказ требует согласования перед выставлением счёта
    #[serde(default)]
    pub requires_approval: bool,
    pub subtotal: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub discount_amount: f64,
    pub total: f64,
    /// Накопленная сумма выставленных счетов
    #[serde(default)]
    pub total_invoiced: f64,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    pub gps_coordinates: GpsCoordinates,
    #[serde(default)]
    pub notes: Option<String>,
    /// Строки заказа
    pub items: Vec<SalesOrderLine>,
}

impl SalesOrder {
    /// Остаток к выставлению: total − totalInvoiced
    pub fn remaining_amount(&self) -> f64 {
        self.total - self.total_invoiced
    }

    /// Из заказа можно выставлять счета (согласован или частично выставлен)
    pub fn is_convertible(&self) -> bool {
        matches!(
            self.status,
            SalesOrderStatus::Approved | SalesOrderStatus::PartiallyInvoiced
        )
    }

    /// Кнопка «Convert to Invoice» видна
    pub fn can_convert_to_invoice(&self) -> bool {
        self.is_convertible() && self.remaining_amount() > MONEY_EPSILON
    }

    /// Редактирование доступно только для несогласуемого заказа в статусе pending
    /// и только если вызывающий передал обработчик редактирования
    pub fn can_edit(&self, has_edit_handler: bool) -> bool {
        self.status == SalesOrderStatus::Pending && has_edit_handler && !self.requires_approval
    }

    /// Заказ ждёт согласования
    pub fn is_awaiting_approval(&self) -> bool {
        self.requires_approval && self.status == SalesOrderStatus::Pending
    }

    /// Заказ выставлен полностью
    pub fn is_fully_invoiced(&self) -> bool {
        self.status == SalesOrderStatus::Invoiced
            && self.total_invoiced >= self.total - MONEY_EPSILON
    }

    /// Суммарное количество единиц по строкам
    pub fn total_units(&self) -> u32 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Учесть выставленный счёт: накопить сумму и перевести статус
    /// в partially_invoiced / invoiced. Для неконвертируемого заказа ничего не меняет.
    pub fn record_invoice(&mut self, amount: f64) {
        if !self.is_convertible() {
            return;
        }
        self.total_invoiced += amount;
        self.status = if self.remaining_amount() > MONEY_EPSILON {
            SalesOrderStatus::PartiallyInvoiced
        } else {
            SalesOrderStatus::Invoiced
        };
    }
}
