use std::sync::Arc;

use crate::database::Storage;

pub struct AppState {
    pub db: Arc<dyn Storage>,
}
