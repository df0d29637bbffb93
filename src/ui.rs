//! UI module for the three-dots indicator
//!
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Theme** (`theme`): Palette and styles for the demo host

pub mod primitives;
pub mod theme;
