use crate::config::Config;
use invoice_layout::{render_invoice, AssetSet, Branding, InvoiceRecord};
use std::sync::Arc;

/// Shared across requests; assets are decoded once at startup
#[derive(Clone)]
pub struct AppState {
    pub branding: Arc<Branding>,
    pub assets: Arc<AssetSet>,
}

impl AppState {
    pub fn new(branding: Branding, assets: AssetSet) -> Self {
        Self {
            branding: Arc::new(branding),
            assets: Arc::new(assets),
        }
    }

    /// Load the configured asset directory
    pub fn from_config(config: &Config) -> Self {
        let assets = AssetSet::load_dir(config.assets_dir());
        Self::new(config.branding.clone(), assets)
    }

    /// Render one invoice; blocking, call from a worker thread
    pub fn render(&self, record: &InvoiceRecord) -> invoice_layout::Result<Vec<u8>> {
        render_invoice(record, &self.branding, self.assets.as_ref())
    }
}
