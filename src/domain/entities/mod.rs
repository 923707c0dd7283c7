//! Domain entity definitions.

mod image;
mod movie;

pub use self::image::{CachedImage, ImageKey};
pub use movie::{Movie, NO_POSTER, SearchPage};
