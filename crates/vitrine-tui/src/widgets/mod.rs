mod body;
mod faq;
mod gallery;
mod header;
mod help;
mod menu;
mod status_bar;

pub use body::BodyWidget;
pub use faq::faq_lines;
pub use gallery::gallery_lines;
pub use header::HeaderWidget;
pub use help::HelpWidget;
pub use menu::MenuWidget;
pub use status_bar::StatusBarWidget;
