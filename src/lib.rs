// School Calendar Library
// Calendar scheduling engine: date navigation, event binning and time-grid layout

pub mod cli;
pub mod models;
pub mod services;
pub mod ui;
pub mod utils;
