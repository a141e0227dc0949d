//! CLI command handlers.

mod fetch;
mod list;
mod status;

pub use fetch::run_fetch;
pub use list::run_list;
pub use status::run_status;

#[cfg(test)]
pub(crate) use fetch::{exit_code, finished_line};
