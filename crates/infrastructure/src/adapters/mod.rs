//! Adapters - implement application ports using integration crates

mod sheets_adapter;

pub use sheets_adapter::SheetsBookingSink;
