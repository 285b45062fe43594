//! # Charts
//!
//! Pie charts of a ranking, one tab per embedding source, drawn in the terminal.

pub mod pie;
pub mod tabs;

pub use pie::{explode_offsets, PieChart, Slice};
pub use tabs::ChartTabs;
