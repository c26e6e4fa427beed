mod changes;
mod product;
mod session;
mod upload;

pub use self::changes::{FieldValue, ProductChanges, ProductField};
pub use self::product::{
    CreateProductRequest, FindAllProducts, LowStockQuery, NewProduct, UpdateProductRequest,
};
pub use self::session::LoginRequest;
pub use self::upload::UploadFile;
