//! Growth-curve model.
//!
//! Shapes are implemented as a total `match` over `Curve`, so the fitter can
//! iterate the family without opaque callables.

pub mod curve;
