//! Product entity and request payloads.

use serde::{Deserialize, Serialize};

/// A catalog product. The sole entity the service manages.
///
/// `id` is assigned by the store at creation and never changes afterwards.
/// `category` is always stored lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

/// Creation payload.
///
/// Every field is optional at the serde level so that presence checks can
/// produce the catalog's own 400 response instead of a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    #[serde(rename = "inStock")]
    pub in_stock: Option<bool>,
}

impl CreateProduct {
    /// Whether `name`, `price`, and `category` are all present and truthy
    /// (non-empty string, non-zero number).
    pub fn has_required_fields(&self) -> bool {
        truthy_str(&self.name) && truthy_num(&self.price) && truthy_str(&self.category)
    }
}

/// Partial-update payload. Fields keep Express-style overwrite semantics:
/// `name`/`description`/`price`/`category` apply only when truthy, while
/// `in_stock` applies whenever present, including `false`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    #[serde(rename = "inStock")]
    pub in_stock: Option<bool>,
}

impl UpdateProduct {
    /// Apply this update to an existing product in place.
    pub fn apply_to(&self, product: &mut Product) {
        if truthy_str(&self.name) {
            product.name = self.name.clone().unwrap_or_default();
        }
        if truthy_str(&self.description) {
            product.description = self.description.clone();
        }
        if truthy_num(&self.price) {
            product.price = self.price.unwrap_or_default();
        }
        if truthy_str(&self.category) {
            product.category = self.category.clone().unwrap_or_default().to_lowercase();
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
    }
}

fn truthy_str(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

fn truthy_num(value: &Option<f64>) -> bool {
    value.is_some_and(|n| n != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Laptop".to_string(),
            description: Some("High-performance laptop".to_string()),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(sample_product()).unwrap();
        assert_eq!(json["inStock"], true);
        assert_eq!(json["category"], "electronics");
        assert!(json.get("in_stock").is_none());
    }

    #[test]
    fn test_required_fields_present() {
        let create = CreateProduct {
            name: Some("Pen".to_string()),
            price: Some(1.0),
            category: Some("Office".to_string()),
            ..Default::default()
        };
        assert!(create.has_required_fields());
    }

    #[test]
    fn test_required_fields_reject_missing_and_empty() {
        assert!(!CreateProduct::default().has_required_fields());

        let empty_name = CreateProduct {
            name: Some(String::new()),
            price: Some(1.0),
            category: Some("office".to_string()),
            ..Default::default()
        };
        assert!(!empty_name.has_required_fields());

        let zero_price = CreateProduct {
            name: Some("Pen".to_string()),
            price: Some(0.0),
            category: Some("office".to_string()),
            ..Default::default()
        };
        assert!(!zero_price.has_required_fields());
    }

    #[test]
    fn test_update_skips_untruthy_fields() {
        let mut product = sample_product();
        let update = UpdateProduct {
            name: Some(String::new()),
            price: Some(0.0),
            ..Default::default()
        };
        update.apply_to(&mut product);
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.price, 1200.0);
    }

    #[test]
    fn test_update_applies_explicit_false_in_stock() {
        let mut product = sample_product();
        let update = UpdateProduct {
            in_stock: Some(false),
            ..Default::default()
        };
        update.apply_to(&mut product);
        assert!(!product.in_stock);
        assert_eq!(product.name, "Laptop");
    }

    #[test]
    fn test_update_lowercases_category() {
        let mut product = sample_product();
        let update = UpdateProduct {
            category: Some("Fashion".to_string()),
            ..Default::default()
        };
        update.apply_to(&mut product);
        assert_eq!(product.category, "fashion");
    }
}
