// crates/usecase/src/orchestrator.rs
use multab_domain::RawRangeInput;
use multab_ports::TableRenderer;
use multab_shared_kernel::Result;

use crate::{dto::Outcome, session::TableSession};

/// Submits input to a session and forwards a successful table to the renderer.
pub struct GenerateTable<'a> {
    renderer: &'a dyn TableRenderer,
}

impl<'a> GenerateTable<'a> {
    pub fn new(renderer: &'a dyn TableRenderer) -> Self {
        Self { renderer }
    }

    /// Validation failures come back as [`Outcome::Failed`]; only rendering errors are `Err`.
    pub fn run<'s>(&self, session: &'s mut TableSession, raw: &RawRangeInput) -> Result<&'s Outcome> {
        let outcome = session.submit(raw);
        match outcome {
            Outcome::Rendered(table) => {
                log::info!(
                    "rendering {}x{} table (rows {}..={}, columns {}..={})",
                    table.row_count(),
                    table.column_count(),
                    table.range().row_start(),
                    table.range().row_end(),
                    table.range().column_start(),
                    table.range().column_end(),
                );
                self.renderer.render(table)?;
            }
            Outcome::Failed(err) => {
                log::debug!("validation failed on {:?}: {}", err.field, err.message);
            }
        }
        Ok(outcome)
    }
}
