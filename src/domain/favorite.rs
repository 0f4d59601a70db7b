// src/domain/favorite.rs

use crate::domain::selection::PropertySelection;
use crate::errors::ServerError;
use chrono::NaiveDateTime;

/// A saved house. Stored under the owning account and keyed by provider ID,
/// so saving the same property twice overwrites the earlier record.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteHouse {
    pub provider_id: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub url: Option<String>,
}

/// A favorite as read back from the store.
#[derive(Debug, Clone)]
pub struct SavedFavorite {
    pub house: FavoriteHouse,
    pub saved_at: NaiveDateTime,
}

impl FavoriteHouse {
    /// The provider ID is the record key, so a selection without one cannot
    /// be saved.
    pub fn from_selection(selection: &PropertySelection) -> Result<Self, ServerError> {
        let provider_id = selection
            .provider_id
            .clone()
            .ok_or_else(|| ServerError::BadRequest("property has no provider ID".into()))?;

        Ok(Self {
            provider_id,
            address: selection.address.clone(),
            city: selection.city.clone(),
            zipcode: selection.zipcode.clone(),
            url: selection.url.clone(),
        })
    }
}
