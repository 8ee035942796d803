pub mod grid;
pub mod spiral_point;

pub use grid::{GridFile, GridHeader, RowLayout, VALUES_PER_LINE};
pub use spiral_point::{parse_points, Delimiter, PointFormat, SpiralPoint};
