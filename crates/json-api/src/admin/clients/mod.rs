//! Client oversight

pub(crate) mod index;
pub(crate) mod toggle_status;
