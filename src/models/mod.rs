// Module exports for models

pub mod layout;
pub mod occurrence;
pub mod settings;
pub mod view;
