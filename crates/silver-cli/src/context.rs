use anyhow::Context;
use silver_config::SilverConfig;
use silver_core::Session;
use silver_store::Ledger;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub ledger: Ledger,
    pub session: Session,
}

impl AppContext {
    /// Open both tables at the configured (or overridden) location.
    pub fn init(
        config: SilverConfig,
        session: Session,
        data_dir_override: Option<&str>,
    ) -> anyhow::Result<Self> {
        let mut storage = config.storage;
        if let Some(data_dir) = data_dir_override {
            storage.data_dir = data_dir.to_string();
        }

        let records_path = storage.records_path();
        let log_path = storage.log_path();
        let ledger = Ledger::open(&records_path, &log_path).with_context(|| {
            format!(
                "failed to open ledger tables in {}",
                storage.data_dir
            )
        })?;

        Ok(Self { ledger, session })
    }
}
