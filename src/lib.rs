pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use config::{keystore::KeyStore, CliConfig};
pub use core::{engine::FortuneEngine, fetch::GeminiClient, normalize::normalize_reply};
pub use domain::{
    model::{HoroscopeReading, Period},
    zodiac::Sign,
};
pub use utils::error::{FortuneError, Result};
