//! Inventory Board
//!
//! Search text, column sort and the latest item page. Every change of
//! search or sort is a new query; responses to superseded queries are
//! discarded so the table always reflects the newest parameters.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::ApiResult;
use crate::models::InventoryItem;

pub const EMPTY_PLACEHOLDER: &str = "No items found.";

// ========================
// Sorting
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Batch,
    ExpiryDate,
    Status,
    Location,
}

impl SortField {
    /// Table columns, in display order
    pub const ALL: [SortField; 5] = [
        SortField::Name,
        SortField::Batch,
        SortField::ExpiryDate,
        SortField::Status,
        SortField::Location,
    ];

    /// Query token understood by the backend
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Batch => "batch",
            SortField::ExpiryDate => "expiry_date",
            SortField::Status => "status",
            SortField::Location => "location",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Batch => "Batch",
            SortField::ExpiryDate => "Expiry",
            SortField::Status => "Status",
            SortField::Location => "Location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortState {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Name,
            order: SortOrder::Asc,
        }
    }
}

impl SortState {
    /// Same column flips direction; a new column starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.order = self.order.flipped();
        } else {
            self.field = field;
            self.order = SortOrder::Asc;
        }
    }

    /// Arrow shown next to `field`'s header, if it is the active column
    pub fn indicator(&self, field: SortField) -> Option<&'static str> {
        (self.field == field).then(|| self.order.arrow())
    }
}

// ========================
// Query
// ========================

/// Parameters of one `GET /api/items/` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    pub q: String,
    pub sort: SortState,
    pub limit: u32,
    pub offset: u32,
}

impl ItemQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.q.clone()),
            ("sort", self.sort.field.as_str().to_string()),
            ("order", self.sort.order.as_str().to_string()),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}

// ========================
// Request sequencing
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Hands out increasing tickets; only the newest one is current.
#[derive(Debug, Clone, Default)]
pub struct RequestGate {
    latest: u64,
}

impl RequestGate {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

// ========================
// Board
// ========================

/// Table body to render
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InventoryBody<'a> {
    /// Single row spanning `colspan` columns
    Placeholder { text: &'static str, colspan: usize },
    Rows(&'a [InventoryItem]),
}

#[derive(Debug, Clone)]
pub struct InventoryBoard {
    search: String,
    sort: SortState,
    page_size: u32,
    gate: RequestGate,
    items: Vec<InventoryItem>,
    loaded: bool,
}

impl Default for InventoryBoard {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl InventoryBoard {
    pub fn new(page_size: u32) -> Self {
        Self {
            search: String::new(),
            sort: SortState::default(),
            page_size,
            gate: RequestGate::default(),
            items: Vec::new(),
            loaded: false,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, q: impl Into<String>) {
        self.search = q.into();
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
    }

    /// Parameters for the current search and sort, first page only
    pub fn query(&self) -> ItemQuery {
        ItemQuery {
            q: self.search.clone(),
            sort: self.sort,
            limit: self.page_size,
            offset: 0,
        }
    }

    /// Start a request; earlier tickets become stale.
    pub fn begin_load(&mut self) -> (RequestTicket, ItemQuery) {
        (self.gate.issue(), self.query())
    }

    /// Apply a response. Returns false when the ticket was superseded.
    pub fn apply_load(&mut self, ticket: RequestTicket, result: ApiResult<Vec<InventoryItem>>) -> bool {
        if !self.gate.is_current(ticket) {
            log::debug!("[INVENTORY] Discarding stale response {:?}", ticket);
            return false;
        }
        match result {
            Ok(items) => {
                log::debug!("[INVENTORY] Loaded {} items", items.len());
                self.items = items;
            }
            Err(e) => log::error!("[INVENTORY] Failed to fetch items: {}", e),
        }
        self.loaded = true;
        true
    }

    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    #[cfg(test)]
    pub(crate) fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn body(&self) -> InventoryBody<'_> {
        if self.items.is_empty() {
            InventoryBody::Placeholder {
                text: EMPTY_PLACEHOLDER,
                colspan: SortField::ALL.len(),
            }
        } else {
            InventoryBody::Rows(&self.items)
        }
    }
}
