mod inventory;
mod product;
mod session;
mod upload;

pub use self::inventory::{DashboardResponse, InventoryStatsResponse};
pub use self::product::ProductResponse;
pub use self::session::{SessionResponse, SessionStatusResponse};
pub use self::upload::UploadResponse;
