use crate::{
    domain::common::{LunchboxConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{http::ReqwestPageFetcher, store::Store},
};

pub type LunchboxService = Service<Store, Store, Store, ReqwestPageFetcher, Store>;

pub async fn create_service(config: LunchboxConfig) -> Result<LunchboxService, CoreError> {
    let store = Store::connect(&config.storage).await?;
    let page_fetcher = ReqwestPageFetcher::new(config.menu.fetch_timeout)?;

    tracing::info!(
        backend = config.storage.backend_name(),
        source = %config.menu.source_url,
        "lunchbox service ready"
    );

    Ok(Service::new(
        store.clone(),
        store.clone(),
        store.clone(),
        page_fetcher,
        store,
        config.menu,
    ))
}
