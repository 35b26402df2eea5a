use serde::{Deserialize, Serialize};

/// Способ оплаты услуги
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Pix,
    Debit,
    Credit,
    Installment,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Pix => "pix",
            PaymentMethod::Debit => "debit",
            PaymentMethod::Credit => "credit",
            PaymentMethod::Installment => "installment",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cash" => Some(PaymentMethod::Cash),
            "pix" => Some(PaymentMethod::Pix),
            "debit" => Some(PaymentMethod::Debit),
            "credit" => Some(PaymentMethod::Credit),
            "installment" => Some(PaymentMethod::Installment),
            _ => None,
        }
    }
}

/// Статус оплаты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
    Refunded,
}

impl PaymentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Cancelled => "cancelled",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(PaymentStatus::Pending),
            "paid" => Some(PaymentStatus::Paid),
            "cancelled" => Some(PaymentStatus::Cancelled),
            "refunded" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }
}
