//! # Bouncy levels
//!
//! Tooling for the JSON level files of the bouncy game.
//!
//! A level file is a JSON array of levels. Each level has an `id`, a `name`
//! and a shape at `body.shape` made of polylines ("lines"). This library
//! provides:
//! - Loading, selecting and re-serializing levels without losing unknown fields
//! - Cutting a gap of a given width into one segment of a line
//! - Rendering a level as an annotated SVG plot
//!
//! ## Example
//!
//! ```rust,ignore
//! use bouncy_levels::{LevelSet, LevelSelector};
//!
//! let mut levels = LevelSet::from_file("data/default_levels.json")?;
//! let level = levels.select_mut(&LevelSelector::Name("Square".into()))?;
//! level.shape_mut().cut_line(0, 1, 0.2)?;
//! println!("{}", level.shape().lines_to_json()?);
//! ```

pub mod config;
pub mod cut;
pub mod geometry;
pub mod level;
pub mod plot;

pub use config::PlotConfig;
pub use cut::{cut_segment, Cut};
pub use geometry::{BoundingBox, Point, Polyline, Segment};
pub use level::{Level, LevelBody, LevelFilter, LevelSelector, LevelSet, Shape};
pub use plot::{render_level, save_level_plot, PlotRenderer};

/// Floating-point coordinate type used for all level geometry.
pub type Coord = f64;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for level operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Level not found: {0}")]
    LevelNotFound(String),

    #[error("Either a level name or a level id must be provided")]
    MissingSelector,

    #[error("Segment is too short to cut: length {length} is less than width {width}")]
    SegmentTooShort { length: Coord, width: Coord },

    #[error("Segment from {from} to {to} has no finite length")]
    NonFiniteSegment { from: Point, to: Point },

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("Invalid cut width {0}: must be a positive finite number")]
    InvalidWidth(Coord),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Plot error: {0}")]
    Plot(String),
}
