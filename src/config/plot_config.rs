//! Plot configuration types.
//!
//! This module provides the settings that control how a level is drawn into
//! an SVG document: canvas size, stroke and label sizes, which decorations are
//! shown and the line colour palette.

use crate::{Coord, Error, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The ten "tab10" category colours, cycled through by line index.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Settings for rendering a level plot.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    // === Canvas ===
    /// Canvas width (px).
    pub width: Coord,
    /// Canvas height (px).
    pub height: Coord,
    /// Space kept free around the plot area (px). Title and legend live here.
    pub margin: Coord,

    // === Drawing ===
    /// Distance of a point label from its point (px).
    pub label_offset: Coord,
    /// Line stroke width (px).
    pub stroke_width: Coord,
    /// Radius of the vertex markers (px).
    pub point_radius: Coord,
    /// Font size of point labels (px). Title and legend scale from this.
    pub font_size: Coord,

    // === Decorations ===
    pub show_grid: bool,
    pub show_legend: bool,
    pub show_points: bool,

    /// Line colours, cycled by line index.
    pub palette: Vec<String>,
}

impl PlotConfig {
    /// Create a new PlotConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: PlotConfig = serde_json::from_str(&content)?;
        config.validate().map_err(Error::Config)?;
        info!("Loaded plot config from {}", path.display());
        Ok(config)
    }

    /// Builder method: set canvas size.
    pub fn size(mut self, width: Coord, height: Coord) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder method: set margin.
    pub fn margin(mut self, margin: Coord) -> Self {
        self.margin = margin;
        self
    }

    /// Builder method: set point label offset.
    pub fn label_offset(mut self, offset: Coord) -> Self {
        self.label_offset = offset;
        self
    }

    /// Builder method: show or hide the grid.
    pub fn grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    /// Builder method: show or hide the legend.
    pub fn legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    /// Builder method: show or hide vertex markers.
    pub fn points(mut self, show: bool) -> Self {
        self.show_points = show;
        self
    }

    /// Colour for the line with the given index.
    pub fn line_color(&self, line_idx: usize) -> &str {
        if self.palette.is_empty() {
            return "black";
        }
        &self.palette[line_idx % self.palette.len()]
    }

    /// Width and height of the area inside the margins.
    pub fn plot_area(&self) -> (Coord, Coord) {
        (
            self.width - 2.0 * self.margin,
            self.height - 2.0 * self.margin,
        )
    }

    /// Validate the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err("Canvas width and height must be positive".into());
        }
        if !(self.margin >= 0.0) {
            return Err("Margin must not be negative".into());
        }
        let (w, h) = self.plot_area();
        if w <= 0.0 || h <= 0.0 {
            return Err("Margin leaves no room for the plot".into());
        }
        if !(self.stroke_width > 0.0 && self.font_size > 0.0) {
            return Err("Stroke width and font size must be positive".into());
        }
        if self.point_radius < 0.0 || self.label_offset < 0.0 {
            return Err("Point radius and label offset must not be negative".into());
        }
        if self.palette.is_empty() {
            return Err("Palette must contain at least one colour".into());
        }
        Ok(())
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            // Canvas
            width: 800.0,
            height: 800.0,
            margin: 60.0,

            // Drawing
            label_offset: 10.0,
            stroke_width: 1.5,
            point_radius: 2.5,
            font_size: 11.0,

            // Decorations
            show_grid: true,
            show_legend: true,
            show_points: true,

            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl fmt::Display for PlotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlotConfig({}x{}px, margin={}px, label_offset={}px)",
            self.width, self.height, self.margin, self.label_offset
        )
    }
}
