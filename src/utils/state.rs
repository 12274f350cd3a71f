use crate::utils::config::Config;
use crate::utils::store::NewsStore;

#[derive(Clone)]
pub struct AppState {
    pub store: NewsStore,
    pub config: Config,
}
