//! Primitive UI elements - atomic building blocks
//!
//! Primitives implement iced's `Widget` trait directly, use generic Message
//! types and do not depend on application-specific types.
//!
//! # Contents
//!
//! - [`ThreeDots`] - Three-dots loading indicator

pub mod three_dots;

pub use three_dots::ThreeDots;
