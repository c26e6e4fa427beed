mod command;
mod query;

pub use self::command::{ProductCommandRepository, build_update_query};
pub use self::query::ProductQueryRepository;

use crate::{
    abstract_trait::{DynProductCommandRepository, DynProductQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductRepository {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
}

impl ProductRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query =
            Arc::new(ProductQueryRepository::new(pool.clone())) as DynProductQueryRepository;

        let command =
            Arc::new(ProductCommandRepository::new(pool.clone())) as DynProductCommandRepository;

        Self { query, command }
    }
}

#[cfg(test)]
mod tests {
    // Run with: DATABASE_URL=postgres://... cargo test -p shared -- --ignored
    use super::*;
    use crate::{
        config::MIGRATOR,
        domain::requests::{FieldValue, NewProduct, ProductChanges, ProductField},
        errors::RepositoryError,
    };
    use rust_decimal_macros::dec;

    fn new_product(slug: &str, inventory: i32) -> NewProduct {
        NewProduct {
            name: slug.to_uppercase(),
            slug: slug.to_string(),
            description: format!("{slug} description"),
            price: dec!(10.00),
            category: "Test".into(),
            inventory,
            image_urls: Some(vec![format!("https://img.example/{slug}.jpg")]),
            image_public_ids: Some(vec![format!("products/{slug}")]),
        }
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn create_then_get_by_slug_round_trips(pool: ConnectionPool) {
        let repo = ProductRepository::new(pool);
        let input = new_product("mug", 12);

        let created = repo.command.create_product(&input).await.unwrap();
        let fetched = repo.query.find_by_slug("mug").await.unwrap().unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.name, input.name);
        assert_eq!(fetched.description, input.description);
        assert_eq!(fetched.price, input.price);
        assert_eq!(fetched.category, input.category);
        assert_eq!(fetched.inventory, input.inventory);
        assert_eq!(fetched.image_urls, input.image_urls);
        assert_eq!(fetched.image_public_ids, input.image_public_ids);
        assert!(repo.query.find_by_id(created.id).await.unwrap().is_some());
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn price_is_stored_without_rounding(pool: ConnectionPool) {
        let repo = ProductRepository::new(pool);

        for (slug, price) in [("precise", dec!(12.345)), ("pricey", dec!(123456789.00))] {
            let input = NewProduct {
                price,
                ..new_product(slug, 1)
            };

            repo.command.create_product(&input).await.unwrap();
            let fetched = repo.query.find_by_slug(slug).await.unwrap().unwrap();

            assert_eq!(fetched.price, price, "{slug}");
        }
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn duplicate_slug_is_a_conflict(pool: ConnectionPool) {
        let repo = ProductRepository::new(pool);
        let first = repo
            .command
            .create_product(&new_product("mug", 12))
            .await
            .unwrap();

        let mut duplicate = new_product("mug", 99);
        duplicate.name = "Other".into();
        let err = repo.command.create_product(&duplicate).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Conflict(_)));
        let still = repo.query.find_by_slug("mug").await.unwrap().unwrap();
        assert_eq!(still, first);
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn partial_update_touches_only_given_fields(pool: ConnectionPool) {
        let repo = ProductRepository::new(pool);
        let before = repo
            .command
            .create_product(&new_product("mug", 12))
            .await
            .unwrap();

        let mut changes = ProductChanges::new();
        changes.set(ProductField::Inventory, FieldValue::Integer(5));
        let after = repo
            .command
            .update_product(before.id, &changes)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(after.inventory, 5);
        assert!(after.last_updated >= before.last_updated);
        assert_eq!(after.name, before.name);
        assert_eq!(after.slug, before.slug);
        assert_eq!(after.price, before.price);
        assert_eq!(after.image_urls, before.image_urls);
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn update_of_missing_id_is_none(pool: ConnectionPool) {
        let repo = ProductRepository::new(pool);
        let existing = repo
            .command
            .create_product(&new_product("mug", 12))
            .await
            .unwrap();

        let mut changes = ProductChanges::new();
        changes.set(ProductField::Inventory, FieldValue::Integer(1));
        let result = repo
            .command
            .update_product(existing.id + 1000, &changes)
            .await
            .unwrap();

        assert!(result.is_none());
        let unchanged = repo.query.find_by_id(existing.id).await.unwrap().unwrap();
        assert_eq!(unchanged, existing);
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn low_stock_and_stats_follow_the_threshold(pool: ConnectionPool) {
        let repo = ProductRepository::new(pool);
        for (slug, inventory) in [("a", 5), ("b", 50), ("c", 30), ("d", 29)] {
            repo.command
                .create_product(&new_product(slug, inventory))
                .await
                .unwrap();
        }

        let low = repo.query.find_low_stock(30).await.unwrap();
        let slugs: Vec<_> = low.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "d"]);

        let stats = repo.query.inventory_stats(30).await.unwrap();
        assert_eq!(stats.total_products, 4);
        assert_eq!(stats.total_inventory, 114);
        assert_eq!(stats.low_stock_count, 2);
        assert_eq!(stats.avg_price, Some(dec!(10.0000)));
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn list_all_is_ordered_by_name(pool: ConnectionPool) {
        let repo = ProductRepository::new(pool);
        for slug in ["pear", "apple", "mango"] {
            repo.command
                .create_product(&new_product(slug, 1))
                .await
                .unwrap();
        }

        let names: Vec<_> = repo
            .query
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["APPLE", "MANGO", "PEAR"]);
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn stats_on_empty_catalog(pool: ConnectionPool) {
        let repo = ProductRepository::new(pool);

        let stats = repo.query.inventory_stats(30).await.unwrap();

        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.total_inventory, 0);
        assert_eq!(stats.low_stock_count, 0);
        assert_eq!(stats.avg_price, None);
    }
}
