//! # Product Store
//!
//! Owns the in-memory product collection and implements every CRUD
//! operation. Handlers never touch storage directly.
//!
//! The collection is a `Vec` behind an `RwLock`: insertion order is the only
//! ordering the catalog has, and each operation is internally consistent but
//! no atomicity is promised across a read-modify-write pair of requests.

use std::sync::RwLock;

use uuid::Uuid;

use super::errors::{CatalogError, CatalogResult};
use super::product::{CreateProduct, Product, UpdateProduct};
use super::query::ListQuery;

/// The in-memory product store
pub struct ProductStore {
    products: RwLock<Vec<Product>>,
}

impl ProductStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
        }
    }

    /// Create a store seeded with the three sample products
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        store.seed();
        store
    }

    fn seed(&self) {
        let samples = [
            ("Laptop", "High-performance laptop", 1200.0, "electronics"),
            ("Shoes", "Running shoes", 80.0, "fashion"),
            ("Book", "Inspirational novel", 20.0, "books"),
        ];
        let mut products = self.products.write().unwrap_or_else(|e| e.into_inner());
        for (name, description, price, category) in samples {
            products.push(Product {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                description: Some(description.to_string()),
                price,
                category: category.to_string(),
                in_stock: true,
            });
        }
    }

    /// List products in insertion order, filtered and paginated
    pub fn list(&self, query: &ListQuery) -> CatalogResult<Vec<Product>> {
        let products = self
            .products
            .read()
            .map_err(|_| CatalogError::Internal("lock poisoned".to_string()))?;

        let search = query.search.as_deref().map(str::to_lowercase);
        let category = query.category.as_deref().map(str::to_lowercase);

        let result = products
            .iter()
            .filter(|p| match &search {
                Some(needle) => p.name.to_lowercase().contains(needle),
                None => true,
            })
            .filter(|p| match &category {
                Some(wanted) => p.category == *wanted,
                None => true,
            })
            .skip(query.offset())
            .take(query.limit)
            .cloned()
            .collect();

        Ok(result)
    }

    /// Get a single product by id
    pub fn get(&self, id: &str) -> CatalogResult<Product> {
        let products = self
            .products
            .read()
            .map_err(|_| CatalogError::Internal("lock poisoned".to_string()))?;

        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    /// Create a product, assigning a fresh id
    pub fn create(&self, request: CreateProduct) -> CatalogResult<Product> {
        if !request.has_required_fields() {
            return Err(CatalogError::MissingFields);
        }

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: request.name.unwrap_or_default(),
            description: request.description,
            price: request.price.unwrap_or_default(),
            category: request.category.unwrap_or_default().to_lowercase(),
            in_stock: request.in_stock.unwrap_or(true),
        };

        let mut products = self
            .products
            .write()
            .map_err(|_| CatalogError::Internal("lock poisoned".to_string()))?;
        products.push(product.clone());

        Ok(product)
    }

    /// Apply a partial update to a product in place
    pub fn update(&self, id: &str, request: UpdateProduct) -> CatalogResult<Product> {
        let mut products = self
            .products
            .write()
            .map_err(|_| CatalogError::Internal("lock poisoned".to_string()))?;

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound)?;

        request.apply_to(product);
        Ok(product.clone())
    }

    /// Remove a product, returning it wrapped in a one-element vec
    pub fn delete(&self, id: &str) -> CatalogResult<Vec<Product>> {
        let mut products = self
            .products
            .write()
            .map_err(|_| CatalogError::Internal("lock poisoned".to_string()))?;

        let idx = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound)?;

        Ok(vec![products.remove(idx)])
    }

    /// Number of products currently held
    pub fn len(&self) -> usize {
        self.products
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Whether the store holds no products
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
