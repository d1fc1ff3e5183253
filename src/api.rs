//! Remote Inventory Service Client
//!
//! [`InventoryApi`] is the boundary trait for the service; [`HttpInventoryApi`]
//! is the real client talking JSON over HTTP (fetch-backed on wasm32). The
//! client performs no retries and never touches local state; the state manager
//! owns all reconciliation.

use async_trait::async_trait;
use serde::Serialize;

use crate::draft::DraftFields;
use crate::error::InventoryError;
use crate::models::{Category, Item, ItemId};

/// Operations the remote inventory service offers
#[async_trait(?Send)]
pub trait InventoryApi {
    /// All active items
    async fn list_active(&self) -> Result<Vec<Item>, InventoryError>;

    /// All soft-deleted, still recoverable items (each with `deletedAt`)
    async fn list_deleted(&self) -> Result<Vec<Item>, InventoryError>;

    /// Create an item; the server assigns the id
    async fn create(&self, fields: &DraftFields) -> Result<Item, InventoryError>;

    /// Update an active item; returns the authoritative stored record
    async fn update(&self, id: ItemId, fields: &DraftFields) -> Result<Item, InventoryError>;

    /// Move an active item to the deleted list
    async fn soft_delete(&self, id: ItemId) -> Result<(), InventoryError>;

    /// Move a deleted item back to the active list
    async fn restore(&self, id: ItemId) -> Result<(), InventoryError>;

    /// Remove a deleted item permanently
    async fn purge(&self, id: ItemId) -> Result<(), InventoryError>;
}

// ========================
// Request Body Structs
// ========================

#[derive(Serialize)]
struct IdBody {
    id: ItemId,
}

#[derive(Serialize)]
struct UpdateItemBody<'a> {
    id: ItemId,
    name: &'a str,
    quantity: u32,
    source: Category,
}

/// HTTP client for the inventory service
#[derive(Clone)]
pub struct HttpInventoryApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpInventoryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn transport(err: reqwest::Error) -> InventoryError {
    InventoryError::Transport(err.to_string())
}

fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, InventoryError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(InventoryError::Rejected {
            status: resp.status().as_u16(),
        })
    }
}

#[async_trait(?Send)]
impl InventoryApi for HttpInventoryApi {
    async fn list_active(&self) -> Result<Vec<Item>, InventoryError> {
        let resp = self
            .http
            .get(self.url("/api/items"))
            .send()
            .await
            .map_err(transport)?;
        check_status(resp)?.json().await.map_err(transport)
    }

    async fn list_deleted(&self) -> Result<Vec<Item>, InventoryError> {
        let resp = self
            .http
            .get(self.url("/api/items/deleted"))
            .send()
            .await
            .map_err(transport)?;
        check_status(resp)?.json().await.map_err(transport)
    }

    async fn create(&self, fields: &DraftFields) -> Result<Item, InventoryError> {
        let resp = self
            .http
            .post(self.url("/api/items/add"))
            .json(fields)
            .send()
            .await
            .map_err(transport)?;
        check_status(resp)?.json().await.map_err(transport)
    }

    async fn update(&self, id: ItemId, fields: &DraftFields) -> Result<Item, InventoryError> {
        let body = UpdateItemBody {
            id,
            name: &fields.name,
            quantity: fields.quantity,
            source: fields.category,
        };
        let resp = self
            .http
            .put(self.url("/api/items/update"))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        check_status(resp)?.json().await.map_err(transport)
    }

    async fn soft_delete(&self, id: ItemId) -> Result<(), InventoryError> {
        let resp = self
            .http
            .post(self.url("/api/items/delete"))
            .json(&IdBody { id })
            .send()
            .await
            .map_err(transport)?;
        check_status(resp)?;
        Ok(())
    }

    async fn restore(&self, id: ItemId) -> Result<(), InventoryError> {
        let resp = self
            .http
            .post(self.url("/api/items/restore"))
            .json(&IdBody { id })
            .send()
            .await
            .map_err(transport)?;
        check_status(resp)?;
        Ok(())
    }

    async fn purge(&self, id: ItemId) -> Result<(), InventoryError> {
        let resp = self
            .http
            .post(self.url("/api/items/hard-delete"))
            .json(&IdBody { id })
            .send()
            .await
            .map_err(transport)?;
        check_status(resp)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = HttpInventoryApi::new("http://localhost:4000/");
        assert_eq!(api.url("/api/items"), "http://localhost:4000/api/items");
    }
}
