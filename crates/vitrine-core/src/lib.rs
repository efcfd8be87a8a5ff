pub mod carousel;
pub mod config;
pub mod error;
pub mod page;
pub mod reveal;

pub use config::{AppConfig, CarouselConfig, EasingKind, RevealConfig, ScrollConfig, UiConfig};
pub use error::{Error, Result};
pub use page::Page;
