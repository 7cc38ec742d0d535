use crate::store::{Catalog, StoreConfig};
use std::rc::Rc;
use yew::prelude::*;

/// Catalog and settings bundled with the page.
#[derive(Debug, Clone, PartialEq)]
pub struct BootData {
    pub catalog: Catalog,
    pub config: StoreConfig,
}

impl BootData {
    #[must_use]
    pub fn load() -> Self {
        let catalog = crate::store::load_catalog();
        let config = crate::store::load_config();
        log::debug!("loaded {} products", catalog.len());
        Self { catalog, config }
    }
}

#[hook]
pub fn use_boot_data() -> Rc<BootData> {
    use_memo((), |()| BootData::load())
}
