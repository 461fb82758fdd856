//! Status enums for orders and payments.
//!
//! Statuses arrive from the backend as free-form strings. The known set maps
//! to enum variants (case-insensitively); anything else is preserved verbatim
//! in `Other` so new backend states display unchanged instead of breaking
//! deserialization.

use serde::{Deserialize, Serialize};

/// Order lifecycle status as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Completed,
    Failed,
    /// Unrecognized status, passed through unchanged.
    Other(String),
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Other(s),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => "pending".to_owned(),
            OrderStatus::Completed => "completed".to_owned(),
            OrderStatus::Failed => "failed".to_owned(),
            OrderStatus::Other(s) => s,
        }
    }
}

impl OrderStatus {
    /// Display label with a status icon. Unknown statuses pass through
    /// without decoration.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Pending => "⏳ Pending".to_owned(),
            Self::Completed => "✅ Completed".to_owned(),
            Self::Failed => "❌ Failed".to_owned(),
            Self::Other(s) => s.clone(),
        }
    }

    /// CSS class suffix used by the order card styling.
    #[must_use]
    pub fn css_class(&self) -> String {
        let suffix = match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Other(s) => return format!("status-{}", s.to_lowercase()),
        };
        format!("status-{suffix}")
    }
}

/// Payment processing status as reported by the payment service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    /// Unrecognized status, passed through unchanged.
    Other(String),
}

impl From<String> for PaymentStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Other(s),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Pending => "pending".to_owned(),
            PaymentStatus::Completed => "completed".to_owned(),
            PaymentStatus::Failed => "failed".to_owned(),
            PaymentStatus::Other(s) => s,
        }
    }
}

impl PaymentStatus {
    /// Status icon: completed payments get a check, failed a cross,
    /// everything else an hourglass.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Completed => "✅",
            Self::Failed => "❌",
            Self::Pending | Self::Other(_) => "⏳",
        }
    }

    /// The raw status string for display next to the icon.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Other(s) => s,
        }
    }
}
