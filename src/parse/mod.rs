mod error;
mod remove_excess_whitespace;
pub mod sites;
mod static_selector;
mod submenu;
mod text_from_selection;

pub use error::Error;
pub use remove_excess_whitespace::{remove_excess_whitespace, squeeze_newlines};
