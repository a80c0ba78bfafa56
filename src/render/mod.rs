//! Rendering layer: HTML fragments and the page surface they land on
//!
//! # Modules
//!
//! - [`html`]: Builds banner and footer fragments from a selection
//! - [`surface`]: `PageSurface` trait the fragments are applied through

pub mod html;
pub mod surface;
