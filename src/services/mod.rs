// Service module exports

pub mod binning;
pub mod cursor;
pub mod engine;
pub mod layout;
pub mod settings;
pub mod source;
