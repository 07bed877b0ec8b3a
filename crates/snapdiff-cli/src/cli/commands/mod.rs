//! CLI command handlers, one file per command.

mod compare;
mod fetch;
mod fetch_raw;
mod highlight;
mod report;

pub use compare::run_compare;
pub use fetch::{run_fetch, FetchArgs};
pub use fetch_raw::run_fetch_raw;
pub use highlight::run_highlight;
pub use report::run_report;
