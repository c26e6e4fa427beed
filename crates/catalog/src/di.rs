use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{
        DynMediaHost, DynMediaService, DynProductCommandRepository, DynProductCommandService,
        DynProductQueryRepository, DynProductQueryService, DynSessionService, DynSessionToken,
    },
    service::{MediaService, ProductCommandService, ProductQueryService, SessionService},
};
use std::sync::Arc;

/// Everything the services are built from. Production wires the Postgres
/// repositories and the Cloudinary client; tests wire in-memory doubles.
#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub product_query_repo: DynProductQueryRepository,
    pub product_command_repo: DynProductCommandRepository,
    pub media_host: DynMediaHost,
    pub session_tokens: DynSessionToken,
    pub admin_password: String,
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub media: DynMediaService,
    pub session: DynSessionService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"DynProductQueryService")
            .field("product_command", &"DynProductCommandService")
            .field("media", &"DynMediaService")
            .field("session", &"DynSessionService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            product_query_repo,
            product_command_repo,
            media_host,
            session_tokens,
            admin_password,
        } = deps;

        let product_query: DynProductQueryService = Arc::new(ProductQueryService::new(
            product_query_repo.clone(),
            registry,
        ));

        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            product_query_repo,
            product_command_repo,
            registry,
        ));

        let media: DynMediaService = Arc::new(MediaService::new(media_host, registry));

        let session: DynSessionService =
            Arc::new(SessionService::new(admin_password, session_tokens));

        Self {
            product_query,
            product_command,
            media,
            session,
        }
    }
}
