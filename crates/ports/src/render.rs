// crates/ports/src/render.rs
use multab_domain::Table;
use multab_shared_kernel::Result;

/// Sink for a freshly built table. Each call replaces whatever was rendered before.
pub trait TableRenderer: Send + Sync {
    fn render(&self, table: &Table) -> Result<()>;
}
