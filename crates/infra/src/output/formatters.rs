// crates/infra/src/output/formatters.rs
pub mod delimited;
pub mod grid;
pub mod html;
pub mod markdown;
pub mod structured;

pub use delimited::output_delimited;
pub use grid::output_grid;
pub use html::output_html;
pub use markdown::output_markdown;
pub use structured::output_json;
#[cfg(feature = "yaml")]
pub use structured::output_yaml;
