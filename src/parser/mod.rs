//! Page markup parsing.

mod hocr;

pub use hocr::HocrParser;
