//! Store actions
//!
//! The closed vocabulary of state transitions. On the wire an action is
//! `{"type": "ADD_ORDER", "payload": {...}}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::models::{
    DiningTable, Kot, MenuItem, Order, Reservation, Restaurant, Staff, User,
};
use tracing::warn;

use super::InitialData;
use crate::utils::{AppError, AppResult};

/// A named state transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    // ========== Bulk ==========
    LoadInitialData(Box<InitialData>),

    // ========== Session pointers ==========
    SetUser(Option<User>),
    SetCurrentRestaurant(Option<Restaurant>),
    SelectTable(Option<DiningTable>),

    // ========== Restaurants ==========
    AddRestaurant(Restaurant),
    UpdateRestaurant(Restaurant),
    DeleteRestaurant(String),

    // ========== Users ==========
    AddUser(User),
    UpdateUser(User),
    DeleteUser(String),

    // ========== Staff ==========
    AddStaff(Staff),
    UpdateStaff(Staff),
    DeleteStaff(String),

    // ========== Tables ==========
    AddTable(DiningTable),
    UpdateTable(DiningTable),
    DeleteTable(String),

    // ========== Menu ==========
    AddMenuItem(MenuItem),
    UpdateMenuItem(MenuItem),
    DeleteMenuItem(String),

    // ========== Reservations ==========
    AddReservation(Reservation),
    UpdateReservation(Reservation),
    DeleteReservation(String),

    // ========== Orders ==========
    AddOrder(Order),
    UpdateOrder(Order),
    DeleteOrder(String),

    // ========== Kitchen ==========
    AddKot(Kot),
    UpdateKot(Kot),
    DeleteKot(String),
}

impl Action {
    /// Every tag this store understands
    pub const TAGS: [&'static str; 28] = [
        "LOAD_INITIAL_DATA",
        "SET_USER",
        "SET_CURRENT_RESTAURANT",
        "SELECT_TABLE",
        "ADD_RESTAURANT",
        "UPDATE_RESTAURANT",
        "DELETE_RESTAURANT",
        "ADD_USER",
        "UPDATE_USER",
        "DELETE_USER",
        "ADD_STAFF",
        "UPDATE_STAFF",
        "DELETE_STAFF",
        "ADD_TABLE",
        "UPDATE_TABLE",
        "DELETE_TABLE",
        "ADD_MENU_ITEM",
        "UPDATE_MENU_ITEM",
        "DELETE_MENU_ITEM",
        "ADD_RESERVATION",
        "UPDATE_RESERVATION",
        "DELETE_RESERVATION",
        "ADD_ORDER",
        "UPDATE_ORDER",
        "DELETE_ORDER",
        "ADD_KOT",
        "UPDATE_KOT",
        "DELETE_KOT",
    ];

    /// Wire tag of this action
    pub fn tag(&self) -> &'static str {
        match self {
            Self::LoadInitialData(_) => "LOAD_INITIAL_DATA",
            Self::SetUser(_) => "SET_USER",
            Self::SetCurrentRestaurant(_) => "SET_CURRENT_RESTAURANT",
            Self::SelectTable(_) => "SELECT_TABLE",
            Self::AddRestaurant(_) => "ADD_RESTAURANT",
            Self::UpdateRestaurant(_) => "UPDATE_RESTAURANT",
            Self::DeleteRestaurant(_) => "DELETE_RESTAURANT",
            Self::AddUser(_) => "ADD_USER",
            Self::UpdateUser(_) => "UPDATE_USER",
            Self::DeleteUser(_) => "DELETE_USER",
            Self::AddStaff(_) => "ADD_STAFF",
            Self::UpdateStaff(_) => "UPDATE_STAFF",
            Self::DeleteStaff(_) => "DELETE_STAFF",
            Self::AddTable(_) => "ADD_TABLE",
            Self::UpdateTable(_) => "UPDATE_TABLE",
            Self::DeleteTable(_) => "DELETE_TABLE",
            Self::AddMenuItem(_) => "ADD_MENU_ITEM",
            Self::UpdateMenuItem(_) => "UPDATE_MENU_ITEM",
            Self::DeleteMenuItem(_) => "DELETE_MENU_ITEM",
            Self::AddReservation(_) => "ADD_RESERVATION",
            Self::UpdateReservation(_) => "UPDATE_RESERVATION",
            Self::DeleteReservation(_) => "DELETE_RESERVATION",
            Self::AddOrder(_) => "ADD_ORDER",
            Self::UpdateOrder(_) => "UPDATE_ORDER",
            Self::DeleteOrder(_) => "DELETE_ORDER",
            Self::AddKot(_) => "ADD_KOT",
            Self::UpdateKot(_) => "UPDATE_KOT",
            Self::DeleteKot(_) => "DELETE_KOT",
        }
    }

    /// Decode a raw JSON action
    ///
    /// - known tag, valid payload: `Ok(Some(action))`
    /// - unknown or missing tag: `Ok(None)`, the caller treats it as a no-op
    /// - known tag, malformed payload: `Err(InvalidAction)`
    pub fn decode(value: Value) -> AppResult<Option<Action>> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_owned);

        match serde_json::from_value::<Action>(value) {
            Ok(action) => Ok(Some(action)),
            Err(e) => match tag {
                Some(tag) if Self::TAGS.contains(&tag.as_str()) => {
                    Err(AppError::invalid_action(tag, e.to_string()))
                }
                Some(tag) => {
                    warn!(tag = %tag, "[Store] Ignoring unknown action");
                    Ok(None)
                }
                None => {
                    warn!("[Store] Ignoring action without a type tag");
                    Ok(None)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::error::ErrorCode;

    #[test]
    fn test_tags_match_serde_names() {
        let action = Action::DeleteMenuItem("m1".to_string());
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], action.tag());
        assert_eq!(value["payload"], "m1");
        assert!(Action::TAGS.contains(&action.tag()));

        let value = serde_json::to_value(Action::SetCurrentRestaurant(None)).unwrap();
        assert_eq!(value["type"], "SET_CURRENT_RESTAURANT");
        assert!(value["payload"].is_null());
    }

    #[test]
    fn test_decode_known_action() {
        let action = Action::decode(json!({ "type": "DELETE_KOT", "payload": "k9" })).unwrap();
        assert_eq!(action, Some(Action::DeleteKot("k9".to_string())));

        let action = Action::decode(json!({ "type": "SET_USER", "payload": null })).unwrap();
        assert_eq!(action, Some(Action::SetUser(None)));
    }

    #[test]
    fn test_decode_unknown_tag_is_noop() {
        let action = Action::decode(json!({ "type": "ARCHIVE_ORDER", "payload": "o1" })).unwrap();
        assert!(action.is_none());

        let action = Action::decode(json!({ "payload": "o1" })).unwrap();
        assert!(action.is_none());
    }

    #[test]
    fn test_decode_malformed_payload_is_error() {
        let err = Action::decode(json!({ "type": "ADD_ORDER", "payload": { "id": 7 } }))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAction);
    }
}
