//! App pages

mod landing;
mod terminal;

pub use landing::Landing;
pub use terminal::Terminal;
