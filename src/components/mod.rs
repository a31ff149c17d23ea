//! Terminal presentation of grid views.

mod grid;
mod pathbar;

pub use grid::render_grid;
