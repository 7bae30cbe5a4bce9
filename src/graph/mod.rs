//! Lazily-evaluated expression graphs.
//!
//! An [`Expression`] describes a sequence of samples without computing it.
//! Leaves ([`linspace`], [`input`], [`constant`]) feed operator nodes and
//! [`Wave`] nodes; [`render`] or [`collect`] evaluate the finished graph in
//! SIMD-width chunks. The `extensions` module adds fluent helpers so graphs
//! read as a chain of calls.

/// Fluent combinators (`.scale()`, `.sqr()`, `.wave()`, etc.).
pub mod extensions;
/// Core trait and the evaluation driver.
pub mod node;
/// Elementwise operator nodes.
pub mod ops;
/// Ramps, slices and constants.
pub mod source;
/// Deferred waveform application.
pub mod wave;

pub use extensions::ExprExt;
pub use node::{collect, render, render_lanes, Expression};
pub use ops::{Offset, Product, Scale, Sin, Sqr};
pub use source::{constant, input, linspace, Constant, Input, Linspace};
pub use wave::Wave;
