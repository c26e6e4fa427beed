//! In-memory stand-ins for the database and the media host.

use crate::{
    abstract_trait::{MediaHostTrait, ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
    domain::{
        requests::{FieldValue, NewProduct, ProductChanges, ProductField, UploadFile},
        responses::UploadResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::{InventoryStats, Product},
};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicBool, Ordering},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Products table kept in a vector; reads come back ordered by name.
#[derive(Clone, Default)]
pub struct MemoryProducts {
    rows: Arc<Mutex<Vec<Product>>>,
}

impl MemoryProducts {
    pub fn snapshot(&self) -> Vec<Product> {
        let mut rows = lock(&self.rows).clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryProducts {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.snapshot())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, RepositoryError> {
        Ok(self.snapshot().into_iter().find(|p| p.slug == slug))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self.snapshot().into_iter().find(|p| p.id == id))
    }

    async fn find_low_stock(&self, threshold: i32) -> Result<Vec<Product>, RepositoryError> {
        let mut low: Vec<_> = self
            .snapshot()
            .into_iter()
            .filter(|p| p.inventory < threshold)
            .collect();
        low.sort_by_key(|p| p.inventory);
        Ok(low)
    }

    async fn inventory_stats(&self, threshold: i32) -> Result<InventoryStats, RepositoryError> {
        let rows = self.snapshot();
        let total_price: Decimal = rows.iter().map(|p| p.price).sum();

        Ok(InventoryStats {
            total_products: rows.len() as i64,
            total_inventory: rows.iter().map(|p| i64::from(p.inventory)).sum(),
            low_stock_count: rows.iter().filter(|p| p.inventory < threshold).count() as i64,
            avg_price: (!rows.is_empty()).then(|| total_price / Decimal::from(rows.len())),
        })
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryProducts {
    async fn create_product(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut rows = lock(&self.rows);
        if rows.iter().any(|p| p.slug == product.slug) {
            return Err(RepositoryError::Conflict(
                "Product with this slug already exists".into(),
            ));
        }

        let created = Product {
            id: rows.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            name: product.name.clone(),
            slug: product.slug.clone(),
            description: product.description.clone(),
            price: product.price,
            category: product.category.clone(),
            inventory: product.inventory,
            last_updated: Utc::now(),
            image_urls: product.image_urls.clone(),
            image_public_ids: product.image_public_ids.clone(),
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update_product(
        &self,
        id: i32,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut rows = lock(&self.rows);
        let Some(row) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        let mut updated = row.clone();
        for (field, value) in changes.iter() {
            match (field, value) {
                (ProductField::Name, FieldValue::Text(v)) => updated.name = v.clone(),
                (ProductField::Description, FieldValue::Text(v)) => {
                    updated.description = v.clone()
                }
                (ProductField::Category, FieldValue::Text(v)) => updated.category = v.clone(),
                (ProductField::Price, FieldValue::Decimal(v)) => updated.price = *v,
                (ProductField::Inventory, FieldValue::Integer(v)) => updated.inventory = *v,
                (ProductField::ImageUrls, FieldValue::TextArray(v)) => {
                    updated.image_urls = Some(v.clone())
                }
                (ProductField::ImagePublicIds, FieldValue::TextArray(v)) => {
                    updated.image_public_ids = Some(v.clone())
                }
                (field, value) => {
                    return Err(RepositoryError::Custom(format!(
                        "cannot assign {value:?} to {}",
                        field.column()
                    )));
                }
            }
        }
        updated.last_updated = Utc::now();
        *row = updated.clone();

        Ok(Some(updated))
    }
}

/// Media host double that records every call in order.
#[derive(Default)]
pub struct FakeMediaHost {
    calls: Mutex<Vec<String>>,
    fail_upload: AtomicBool,
    fail_destroy: AtomicBool,
}

impl FakeMediaHost {
    pub fn failing_upload() -> Self {
        let host = Self::default();
        host.fail_upload.store(true, Ordering::SeqCst);
        host
    }

    pub fn failing_destroy() -> Self {
        let host = Self::default();
        host.fail_destroy.store(true, Ordering::SeqCst);
        host
    }

    /// `upload:<file name>` and `destroy:<public id>` entries.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl MediaHostTrait for FakeMediaHost {
    async fn upload(&self, file: &UploadFile) -> Result<UploadResponse, ServiceError> {
        lock(&self.calls).push(format!("upload:{}", file.file_name));
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(ServiceError::Media("upload rejected".into()));
        }

        Ok(UploadResponse {
            url: format!("https://cdn.example/products/{}", file.file_name),
            public_id: format!("products/{}", file.file_name),
            previous_deleted: None,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), ServiceError> {
        lock(&self.calls).push(format!("destroy:{public_id}"));
        if self.fail_destroy.load(Ordering::SeqCst) {
            return Err(ServiceError::Media("destroy rejected".into()));
        }
        Ok(())
    }
}
