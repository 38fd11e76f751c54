use crate::error::Result;
use crate::geometry::AnyGeometry;
use crate::io::twkb::reader::TwkbRecord;
use crate::io::twkb::writer::{TwkbWriteOptions, TwkbWriter};
use crate::trait_::{GeometryRecord, GeometryWriter};

/// Decode a TWKB buffer into a geometry.
pub fn from_twkb(buf: &[u8]) -> Result<AnyGeometry> {
    TwkbRecord::try_new(buf)?.get_geometry()
}

/// Encode a geometry as TWKB.
pub fn to_twkb(geom: &AnyGeometry, options: TwkbWriteOptions) -> Result<Vec<u8>> {
    let mut writer = TwkbWriter::try_new(vec![], options)?;
    writer.write_any_geometry(geom)?;
    Ok(writer.into_inner())
}
