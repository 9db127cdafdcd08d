//! Engine sub-modules: the open palette workspace and swatch grid geometry.

pub mod grid;
pub mod workspace;
