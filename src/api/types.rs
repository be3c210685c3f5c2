use crate::models::{RoomType, TenantType};
use serde::{Deserialize, Serialize};

/// Sort order for the room list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Backend default, newest listings first
    #[default]
    Newest,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortOrder {
    /// Value of the `ordering` query parameter, `None` for the backend default
    pub fn param(&self) -> Option<&'static str> {
        match self {
            SortOrder::Newest => None,
            SortOrder::PriceLowToHigh => Some("price"),
            SortOrder::PriceHighToLow => Some("-price"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest Added",
            SortOrder::PriceLowToHigh => "Price: Low to High",
            SortOrder::PriceHighToLow => "Price: High to Low",
        }
    }
}

/// Filter controls of the listing view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FilterState {
    /// Free text matched by the backend against title, description, colony and address
    pub search: String,
    /// Exact colony name, empty for all colonies
    pub colony_name: String,
    pub room_type: Option<RoomType>,
    /// `None` means anyone
    pub tenant_type: Option<TenantType>,
    pub ordering: SortOrder,
    pub available_only: bool,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }

    /// Query parameters for `GET /api/rooms/`; empty fields are omitted
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        if !self.colony_name.is_empty() {
            params.push(("colony_name", self.colony_name.clone()));
        }
        if let Some(room_type) = &self.room_type {
            params.push(("room_type", room_type.code().to_string()));
        }
        if let Some(tenant_type) = self.tenant_type {
            params.push(("tenant_type", tenant_type.code().to_string()));
        }
        if let Some(ordering) = self.ordering.param() {
            params.push(("ordering", ordering.to_string()));
        }
        if self.available_only {
            params.push(("is_available", "true".to_string()));
        }

        params
    }
}
