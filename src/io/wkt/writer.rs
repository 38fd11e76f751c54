use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::coord::CoordTrait;
use crate::datatypes::{Dimension, GeometryKind, GeometryType};
use crate::error::{GeoWireError, Result};
use crate::geometry::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use crate::trait_::GeometryWriter;

/// Options for writing WKT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WktWriteOptions {
    /// SRID to prefix as `SRID=<n>;`, producing EWKT.
    pub srid: Option<i32>,

    /// Fixed number of decimal places. When unset every ordinate is written with the shortest
    /// text that parses back to the same value.
    pub precision: Option<usize>,
}

impl WktWriteOptions {
    pub fn ewkt(srid: i32) -> Self {
        Self {
            srid: Some(srid),
            ..Default::default()
        }
    }

    pub fn with_precision(self, precision: usize) -> Self {
        Self {
            precision: Some(precision),
            ..self
        }
    }
}

pub(super) fn keyword(kind: GeometryKind) -> &'static str {
    match kind {
        GeometryKind::Point => "POINT",
        GeometryKind::LineString => "LINESTRING",
        GeometryKind::Polygon => "POLYGON",
        GeometryKind::MultiPoint => "MULTIPOINT",
        GeometryKind::MultiLineString => "MULTILINESTRING",
        GeometryKind::MultiPolygon => "MULTIPOLYGON",
    }
}

pub(super) fn dimension_suffix(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::XY => "",
        Dimension::XYZ => " Z",
        Dimension::XYM => " M",
        Dimension::XYZM => " ZM",
    }
}

/// Writes WKT, or EWKT when an SRID is configured, to an underlying [`std::fmt::Write`].
///
/// Consecutive geometries are separated by a newline. The dimension suffix is always written
/// separated by a space, as in `POINT Z (1 1 80)`.
#[derive(Debug)]
pub struct WktWriter<W: Write> {
    writer: W,
    options: WktWriteOptions,
    num_written: usize,
    allow_non_finite: bool,
}

impl<W: Write> WktWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, Default::default())
    }

    pub fn with_options(writer: W, options: WktWriteOptions) -> Self {
        log::trace!("WKT writer with {options:?}");
        Self {
            writer,
            options,
            num_written: 0,
            allow_non_finite: false,
        }
    }

    /// Write NaN and infinite ordinates as `NaN` and `inf` instead of failing. The output is
    /// then no longer valid WKT.
    pub(crate) fn allow_non_finite(self) -> Self {
        Self {
            allow_non_finite: true,
            ..self
        }
    }

    pub fn options(&self) -> &WktWriteOptions {
        &self.options
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self, geometry_type: GeometryType) -> Result<()> {
        if self.num_written > 0 {
            self.writer.write_char('\n')?;
        }
        self.num_written += 1;
        if let Some(srid) = self.options.srid {
            write!(self.writer, "SRID={srid};")?;
        }
        write!(
            self.writer,
            "{}{} ",
            keyword(geometry_type.kind()),
            dimension_suffix(geometry_type.dimension())
        )?;
        Ok(())
    }

    fn write_ordinate(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() && !self.allow_non_finite {
            return Err(GeoWireError::Malformed(format!(
                "cannot write non-finite ordinate {value} as WKT"
            )));
        }
        match self.options.precision {
            Some(precision) => write!(self.writer, "{value:.precision$}")?,
            None => write!(self.writer, "{value}")?,
        }
        Ok(())
    }

    fn write_coord<C: CoordTrait>(&mut self, coord: &C) -> Result<()> {
        for (i, ordinate) in coord.ordinates().enumerate() {
            if i > 0 {
                self.writer.write_char(' ')?;
            }
            self.write_ordinate(ordinate)?;
        }
        Ok(())
    }

    /// `EMPTY`, or each item between parentheses separated by `, `.
    fn write_list<T>(
        &mut self,
        items: &[T],
        mut write_item: impl FnMut(&mut Self, &T) -> Result<()>,
    ) -> Result<()> {
        if items.is_empty() {
            self.writer.write_str("EMPTY")?;
            return Ok(());
        }
        self.writer.write_char('(')?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.writer.write_str(", ")?;
            }
            write_item(self, item)?;
        }
        self.writer.write_char(')')?;
        Ok(())
    }

    fn write_point_body<C: CoordTrait>(&mut self, geom: &Point<C>) -> Result<()> {
        match geom.coord() {
            Some(coord) => {
                self.writer.write_char('(')?;
                self.write_coord(&coord)?;
                self.writer.write_char(')')?;
            }
            None => self.writer.write_str("EMPTY")?,
        }
        Ok(())
    }

    fn write_line_string_body<C: CoordTrait>(&mut self, geom: &LineString<C>) -> Result<()> {
        self.write_list(geom.coords(), |writer, coord| writer.write_coord(coord))
    }

    fn write_polygon_body<C: CoordTrait>(&mut self, geom: &Polygon<C>) -> Result<()> {
        self.write_list(geom.rings(), |writer, ring| writer.write_line_string_body(ring))
    }
}

impl<W: Write> GeometryWriter for WktWriter<W> {
    fn write_point<C: CoordTrait>(&mut self, geom: &Point<C>) -> Result<()> {
        self.write_header(GeometryType::new(GeometryKind::Point, C::DIMENSION))?;
        self.write_point_body(geom)
    }

    fn write_line_string<C: CoordTrait>(&mut self, geom: &LineString<C>) -> Result<()> {
        self.write_header(GeometryType::new(GeometryKind::LineString, C::DIMENSION))?;
        self.write_line_string_body(geom)
    }

    fn write_polygon<C: CoordTrait>(&mut self, geom: &Polygon<C>) -> Result<()> {
        self.write_header(GeometryType::new(GeometryKind::Polygon, C::DIMENSION))?;
        self.write_polygon_body(geom)
    }

    fn write_multi_point<C: CoordTrait>(&mut self, geom: &MultiPoint<C>) -> Result<()> {
        self.write_header(GeometryType::new(GeometryKind::MultiPoint, C::DIMENSION))?;
        self.write_list(geom.points(), |writer, point| writer.write_point_body(point))
    }

    fn write_multi_line_string<C: CoordTrait>(
        &mut self,
        geom: &MultiLineString<C>,
    ) -> Result<()> {
        self.write_header(GeometryType::new(
            GeometryKind::MultiLineString,
            C::DIMENSION,
        ))?;
        self.write_list(geom.line_strings(), |writer, line_string| {
            writer.write_line_string_body(line_string)
        })
    }

    fn write_multi_polygon<C: CoordTrait>(&mut self, geom: &MultiPolygon<C>) -> Result<()> {
        self.write_header(GeometryType::new(GeometryKind::MultiPolygon, C::DIMENSION))?;
        self.write_list(geom.polygons(), |writer, polygon| {
            writer.write_polygon_body(polygon)
        })
    }
}
