mod loader;
mod models;

pub use loader::SAMPLE_PAGE;
pub use models::{
    CallToAction, Card, FaqEntry, NavLink, Page, PageMeta, Section, SectionBody,
};
