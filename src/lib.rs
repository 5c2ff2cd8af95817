pub mod config;
pub mod logger;
pub mod server;
mod content;
mod feed;
mod reading_time;
mod source;
mod templates;
mod test_data;
mod text_utils;
mod view;
