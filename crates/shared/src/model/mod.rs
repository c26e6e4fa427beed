mod product;

pub use self::product::{InventoryStats, Product};
