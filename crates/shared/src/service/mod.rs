mod media;
mod product;
mod session;

pub use self::media::MediaService;
pub use self::product::{ProductCommandService, ProductQueryService, ProductService};
pub use self::session::SessionService;
