//! One module per website. Each turns a downloaded page into today's
//! [`MenuEntry`](crate::menu::MenuEntry) and fails with a parse error when
//! the markup it expects is missing.
pub mod kaarti;
pub mod kuukuu;
pub mod lounaat;
pub mod savel;
pub mod sogno;
