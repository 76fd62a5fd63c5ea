//! Section boundary detection and text stitching.
//!
//! The pipeline: [`HeadingPattern`] classifies single lines, [`locate`]
//! walks a corpus to the first accepted heading, and [`stitch`] rebuilds
//! the text between two located boundaries, filtering each visited page
//! through [`filter_text`].

mod filter;
mod heading;
mod locate;
mod stitch;

pub use filter::filter_text;
pub use heading::{HeadingClass, HeadingMatch, HeadingPattern};
pub use locate::{locate, locate_from};
pub use stitch::stitch;
