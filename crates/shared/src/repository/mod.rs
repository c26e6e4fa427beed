mod product;

pub use self::product::{
    ProductCommandRepository, ProductQueryRepository, ProductRepository, build_update_query,
};
