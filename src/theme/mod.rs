//! Theme palettes and global styles for Daily Goals.

mod styles;

pub use styles::GLOBAL_STYLES;
