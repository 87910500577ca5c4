// src/models/product.rs
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

use super::lenient;

/// A catalog entry in the `products` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub available_quantity: i64,
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

/// Rows in the `exports` collection carry exactly the product document shape,
/// and share their `_id` with the mirrored product row.
pub type ExportRecord = Product;

/// Field-merge applied to a product and its export row.
///
/// Only `Some` fields are written; everything else is left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub origin_country: Option<String>,
    pub category: Option<String>,
    pub available_quantity: Option<i64>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.to_set_document().is_empty()
    }

    /// Body of a `$set` update, keyed by the stored (camelCase) field names.
    pub fn to_set_document(&self) -> Document {
        let mut set = doc! {};
        if let Some(name) = &self.name {
            set.insert("name", name.as_str());
        }
        if let Some(image) = &self.image {
            set.insert("image", image.as_str());
        }
        if let Some(price) = self.price {
            set.insert("price", price);
        }
        if let Some(rating) = self.rating {
            set.insert("rating", rating);
        }
        if let Some(origin_country) = &self.origin_country {
            set.insert("originCountry", origin_country.as_str());
        }
        if let Some(category) = &self.category {
            set.insert("category", category.as_str());
        }
        if let Some(quantity) = self.available_quantity {
            set.insert("availableQuantity", quantity);
        }
        set
    }

    /// Applies the merge in place. Returns `false` when every provided value
    /// already matched, mirroring a zero `modifiedCount` from the store.
    pub fn apply(&self, product: &mut Product) -> bool {
        let mut changed = false;

        if let Some(name) = &self.name {
            changed |= replace(&mut product.name, name.clone());
        }
        if let Some(image) = &self.image {
            changed |= replace(&mut product.image, image.clone());
        }
        if let Some(price) = self.price {
            changed |= replace(&mut product.price, Some(price));
        }
        if let Some(rating) = self.rating {
            changed |= replace(&mut product.rating, Some(rating));
        }
        if let Some(origin_country) = &self.origin_country {
            changed |= replace(&mut product.origin_country, Some(origin_country.clone()));
        }
        if let Some(category) = &self.category {
            changed |= replace(&mut product.category, Some(category.clone()));
        }
        if let Some(quantity) = self.available_quantity {
            changed |= replace(&mut product.available_quantity, quantity);
        }

        changed
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
