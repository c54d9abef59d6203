//! Reservation Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Seated,
    Completed,
    Cancelled,
    NoShow,
}

/// Restaurant-scoped booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub restaurant_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub party_size: u32,
    /// Booked slot (Unix millis)
    pub date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
