//! SVG plots of level shapes.
//!
//! A plot shows every line of a level in its own colour, marks each point and
//! labels it with its index within its line. Labels of line `i` out of `n` are
//! pushed away from their point in the direction `2π·i/n`, so the shared
//! endpoints of neighbouring lines stay readable.
//!
//! Level coordinates have y pointing up; the renderer flips them into SVG
//! space and keeps a unit in x equal to a unit in y.

use crate::config::PlotConfig;
use crate::geometry::{BoundingBox, Point};
use crate::level::Level;
use crate::{Coord, Error, Result};
use log::debug;
use std::path::Path;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Line, Path as SvgPath, Rectangle, Text};
use svg::Document;

/// Upper bound on grid lines per axis.
const MAX_GRID_LINES: usize = 200;

/// Pick a grid spacing of 1, 2 or 5 × 10^k giving roughly `target` steps over `span`.
pub fn nice_step(span: Coord, target: usize) -> Coord {
    if !(span.is_finite() && span > 0.0) || target == 0 {
        return 1.0;
    }
    let raw = span / target as Coord;
    let magnitude = 10f64.powf(raw.log10().floor());
    let norm = raw / magnitude;
    let nice = if norm < 1.5 {
        1.0
    } else if norm < 3.5 {
        2.0
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// File stem for a level's plot: the id with anything outside
/// `[A-Za-z0-9_-]` replaced by `_`.
pub fn plot_file_stem(level_id: &str) -> String {
    let stem: String = level_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "level".to_string()
    } else {
        stem
    }
}

/// Maps level coordinates onto the canvas.
#[derive(Clone, Copy, Debug)]
struct Viewport {
    center: Point,
    scale: Coord,
    canvas_center: Point,
}

impl Viewport {
    fn fit(bb: &BoundingBox, config: &PlotConfig) -> Self {
        let (area_w, area_h) = config.plot_area();
        let sx = if bb.width() > 0.0 {
            area_w / bb.width()
        } else {
            Coord::INFINITY
        };
        let sy = if bb.height() > 0.0 {
            area_h / bb.height()
        } else {
            Coord::INFINITY
        };
        let mut scale = sx.min(sy);
        if !scale.is_finite() {
            // A single point: nothing to fit.
            scale = 1.0;
        }

        Self {
            center: bb.center(),
            scale,
            canvas_center: Point::new(config.width / 2.0, config.height / 2.0),
        }
    }

    fn to_canvas(&self, p: Point) -> Point {
        Point::new(
            self.canvas_center.x + (p.x - self.center.x) * self.scale,
            self.canvas_center.y - (p.y - self.center.y) * self.scale,
        )
    }

    /// Level-space bounds of the canvas rectangle `min..max`.
    fn visible(&self, min: Point, max: Point) -> BoundingBox {
        let to_level = |c: Point| {
            Point::new(
                self.center.x + (c.x - self.canvas_center.x) / self.scale,
                self.center.y - (c.y - self.canvas_center.y) / self.scale,
            )
        };
        BoundingBox::from_corners(to_level(min), to_level(max))
    }
}

/// Renders levels into SVG documents.
pub struct PlotRenderer<'a> {
    config: &'a PlotConfig,
}

impl<'a> PlotRenderer<'a> {
    pub fn new(config: &'a PlotConfig) -> Self {
        Self { config }
    }

    /// Draw a level.
    pub fn render(&self, level: &Level) -> Document {
        let config = self.config;
        let shape = level.shape();

        let mut document = Document::new()
            .set("width", config.width)
            .set("height", config.height)
            .set("viewBox", (0.0, 0.0, config.width, config.height))
            .add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", "white"),
            );

        let bb = shape.bounding_box();
        if bb.is_defined() {
            let viewport = Viewport::fit(&bb, config);
            debug!(
                "Plotting '{}': {} lines, {} points, scale {:.3} px/unit",
                level.name,
                shape.line_count(),
                shape.point_count(),
                viewport.scale
            );

            if config.show_grid {
                document = document.add(self.grid(&viewport));
            }
            let line_count = shape.line_count();
            for (idx, line) in shape.lines.iter().enumerate() {
                document = document.add(self.line(&viewport, idx, line_count, line.points()));
            }
            if config.show_legend && line_count > 0 {
                document = document.add(self.legend(line_count));
            }
        }

        document.add(
            Text::new(level.name.clone())
                .set("class", "title")
                .set("x", config.width / 2.0)
                .set("y", config.margin / 2.0)
                .set("font-family", "sans-serif")
                .set("font-size", config.font_size * 1.5)
                .set("text-anchor", "middle"),
        )
    }

    fn grid(&self, viewport: &Viewport) -> Group {
        let config = self.config;
        let min = Point::new(config.margin, config.margin);
        let max = Point::new(config.width - config.margin, config.height - config.margin);
        let visible = viewport.visible(min, max);
        let step = nice_step(visible.width().max(visible.height()), 10);

        let mut group = Group::new()
            .set("class", "grid")
            .set("stroke", "#dddddd")
            .set("stroke-width", 0.5);

        let first = (visible.min.x / step).ceil() as i64;
        for k in (first..).take(MAX_GRID_LINES) {
            let x = k as Coord * step;
            if x > visible.max.x {
                break;
            }
            let cx = viewport.to_canvas(Point::new(x, 0.0)).x;
            group = group.add(
                Line::new()
                    .set("x1", cx)
                    .set("y1", min.y)
                    .set("x2", cx)
                    .set("y2", max.y),
            );
        }

        let first = (visible.min.y / step).ceil() as i64;
        for k in (first..).take(MAX_GRID_LINES) {
            let y = k as Coord * step;
            if y > visible.max.y {
                break;
            }
            let cy = viewport.to_canvas(Point::new(0.0, y)).y;
            group = group.add(
                Line::new()
                    .set("x1", min.x)
                    .set("y1", cy)
                    .set("x2", max.x)
                    .set("y2", cy),
            );
        }

        group
    }

    fn line(&self, viewport: &Viewport, idx: usize, count: usize, points: &[Point]) -> Group {
        let config = self.config;
        let color = config.line_color(idx);

        let mut group = Group::new()
            .set("class", format!("line line-{}", idx))
            .set("fill", color);

        let canvas: Vec<Point> = points.iter().map(|p| viewport.to_canvas(*p)).collect();

        if let Some((first, rest)) = canvas.split_first() {
            let data = rest
                .iter()
                .fold(Data::new().move_to((first.x, first.y)), |data, p| {
                    data.line_to((p.x, p.y))
                });
            group = group.add(
                SvgPath::new()
                    .set("fill", "none")
                    .set("stroke", color)
                    .set("stroke-width", config.stroke_width)
                    .set("stroke-linejoin", "round")
                    .set("d", data),
            );
        }

        let angle = 2.0 * std::f64::consts::PI * idx as Coord / count.max(1) as Coord;
        let dx = config.label_offset * angle.cos();
        let dy = -config.label_offset * angle.sin();

        for (point_idx, p) in canvas.iter().enumerate() {
            if config.show_points {
                group = group.add(
                    Circle::new()
                        .set("cx", p.x)
                        .set("cy", p.y)
                        .set("r", config.point_radius),
                );
            }
            group = group.add(
                Text::new(point_idx.to_string())
                    .set("x", p.x + dx)
                    .set("y", p.y + dy)
                    .set("font-family", "sans-serif")
                    .set("font-size", config.font_size)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            );
        }

        group
    }

    fn legend(&self, line_count: usize) -> Group {
        let config = self.config;
        let x = config.width - config.margin + config.font_size * 0.5;
        let row = config.font_size * 1.5;

        let mut group = Group::new()
            .set("class", "legend")
            .set("font-family", "sans-serif")
            .set("font-size", config.font_size);

        for idx in 0..line_count {
            let y = config.margin + row * (idx as Coord + 0.5);
            group = group
                .add(
                    Line::new()
                        .set("x1", x)
                        .set("y1", y)
                        .set("x2", x + config.font_size * 1.5)
                        .set("y2", y)
                        .set("stroke", config.line_color(idx))
                        .set("stroke-width", config.stroke_width * 2.0),
                )
                .add(
                    Text::new(idx.to_string())
                        .set("x", x + config.font_size * 2.0)
                        .set("y", y)
                        .set("dominant-baseline", "middle"),
                );
        }

        group
    }
}

/// Validate the config and draw a level.
pub fn render_level(level: &Level, config: &PlotConfig) -> Result<Document> {
    config.validate().map_err(Error::Config)?;
    Ok(PlotRenderer::new(config).render(level))
}

/// Draw a level and write it as an SVG file.
pub fn save_level_plot<P: AsRef<Path>>(level: &Level, config: &PlotConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    let document = render_level(level, config)?;
    svg::save(path, &document).map_err(|e| {
        Error::Plot(format!("failed to write plot {}: {}", path.display(), e))
    })?;
    debug!("Wrote plot of '{}' to {}", level.name, path.display());
    Ok(())
}
