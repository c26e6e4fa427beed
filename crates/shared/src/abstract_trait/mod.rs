mod media;
mod product;
mod session;

pub use self::media::{DynMediaHost, DynMediaService, MediaHostTrait, MediaServiceTrait};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::session::{
    DynSessionService, DynSessionToken, SessionServiceTrait, SessionTokenTrait,
};
