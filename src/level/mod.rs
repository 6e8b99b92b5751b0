//! Level data model.
//!
//! A level file is a JSON array of objects shaped like
//!
//! ```json
//! [{ "id": "…", "name": "…", "body": { "shape": { "lines": [[{"x": 0, "y": 0}, …], …] } } }]
//! ```
//!
//! Only the fields the tools need are modelled. Everything else on a level,
//! its body or its shape (ball setup, centre of rotation, …) is kept in an
//! `extra` map and written back unchanged.

mod selector;

pub use selector::{LevelFilter, LevelSelector};

use crate::cut::cut_segment;
use crate::geometry::{BoundingBox, Point, Polyline, Segment};
use crate::{Coord, Error, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Indentation used for every JSON document the tools emit.
pub const JSON_INDENT: &[u8] = b"    ";

/// Serialize a value as JSON indented with [`JSON_INDENT`].
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// The geometry of a level: an ordered list of polylines.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub lines: Vec<Polyline>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Shape {
    /// Create a shape from its lines.
    pub fn new(lines: Vec<Polyline>) -> Self {
        Self {
            lines,
            extra: Map::new(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Every point of every line, line by line.
    pub fn all_points(&self) -> Vec<Point> {
        self.lines
            .iter()
            .flat_map(|line| line.iter().copied())
            .collect()
    }

    pub fn point_count(&self) -> usize {
        self.lines.iter().map(|line| line.len()).sum()
    }

    pub fn segment_count(&self) -> usize {
        self.lines.iter().map(|line| line.edge_count()).sum()
    }

    /// Bounding box of all points; undefined for an empty shape.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.all_points())
    }

    /// Cut a gap of `width` into segment `point_idx` of line `line_idx`.
    ///
    /// The line is replaced by the part before the gap and the part after the
    /// gap is inserted right behind it; all other lines keep their order. On
    /// error the shape is left untouched. Returns the gap that was opened.
    pub fn cut_line(&mut self, line_idx: usize, point_idx: usize, width: Coord) -> Result<Segment> {
        let line_count = self.lines.len();
        let line = self.lines.get(line_idx).ok_or_else(|| {
            Error::InvalidIndex(format!(
                "line index {} is out of range for a shape with {} line(s)",
                line_idx, line_count
            ))
        })?;
        let cut = cut_segment(line, point_idx, width)?;
        let gap = cut.gap();
        let (first, second) = cut.into_pair();

        debug!(
            "Line {} split into {} + {} points",
            line_idx,
            first.len(),
            second.len()
        );

        self.lines[line_idx] = first;
        self.lines.insert(line_idx + 1, second);

        Ok(gap)
    }

    /// The `lines` array as indented JSON.
    pub fn lines_to_json(&self) -> Result<String> {
        to_json_pretty(&self.lines)
    }
}

/// The body of a level. Only the shape is interpreted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelBody {
    pub shape: Shape,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named, identified level definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    pub name: String,
    pub body: LevelBody,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Level {
    /// Create a level with the given shape and no extra fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, shape: Shape) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            body: LevelBody {
                shape,
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.body.shape
    }

    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.body.shape
    }
}

/// All levels of a level file, in file order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelSet {
    levels: Vec<Level>,
}

impl LevelSet {
    /// Load a level file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let set = Self::from_json_str(&content)?;
        info!("Loaded {} levels from {}", set.len(), path.display());
        Ok(set)
    }

    /// Parse a level file from a string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let set: Self = serde_json::from_str(content)?;
        for level in &set.levels {
            for (idx, line) in level.shape().lines.iter().enumerate() {
                if !line.is_valid() {
                    warn!(
                        "Level '{}' line {} has {} point(s) and no segment",
                        level.name,
                        idx,
                        line.len()
                    );
                }
            }
        }
        Ok(set)
    }

    /// Serialize the whole set as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        to_json_pretty(self)
    }

    /// Write the whole set to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut content = self.to_json_pretty()?;
        content.push('\n');
        fs::write(path, content)?;
        info!("Wrote {} levels to {}", self.len(), path.display());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Level> {
        self.levels.iter()
    }

    fn position(&self, selector: &LevelSelector) -> Result<usize> {
        let mut matches = self
            .levels
            .iter()
            .enumerate()
            .filter(|(_, level)| selector.matches(level))
            .map(|(i, _)| i);

        let first = matches
            .next()
            .ok_or_else(|| Error::LevelNotFound(selector.to_string()))?;
        let others = matches.count();
        if others > 0 {
            warn!(
                "{} levels match {}, using the first one",
                others + 1,
                selector
            );
        }
        Ok(first)
    }

    /// The first level matching the selector.
    pub fn select(&self, selector: &LevelSelector) -> Result<&Level> {
        let idx = self.position(selector)?;
        Ok(&self.levels[idx])
    }

    /// Mutable access to the first level matching the selector.
    pub fn select_mut(&mut self, selector: &LevelSelector) -> Result<&mut Level> {
        let idx = self.position(selector)?;
        Ok(&mut self.levels[idx])
    }

    /// All levels passing the filter, in file order.
    pub fn filter(&self, filter: &LevelFilter) -> Vec<&Level> {
        self.levels.iter().filter(|level| filter.matches(level)).collect()
    }
}

impl<'a> IntoIterator for &'a LevelSet {
    type Item = &'a Level;
    type IntoIter = std::slice::Iter<'a, Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}
