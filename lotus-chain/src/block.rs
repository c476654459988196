//! Block-related structures.

mod height;

pub use height::Height;
