use crate::coord::CoordTrait;
use crate::error::{GeoWireError, Result};
use crate::io::twkb::common::unscale_ordinate;
use crate::io::twkb::varint::{read_uvarint, read_varint};

/// A forward-only read position over a TWKB buffer, carrying the coordinate and ID delta
/// accumulators for one top-level geometry.
#[derive(Debug, Clone)]
pub(super) struct TwkbCursor<'a> {
    buf: &'a [u8],
    pos: usize,
    precisions: [i8; 4],
    last: [i64; 4],
    last_id: i64,
}

impl<'a> TwkbCursor<'a> {
    pub(super) fn new(buf: &'a [u8], pos: usize, precisions: [i8; 4]) -> Self {
        Self {
            buf,
            pos,
            precisions,
            last: [0; 4],
            last_id: 0,
        }
    }

    pub(super) fn position(&self) -> usize {
        self.pos
    }

    pub(super) fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub(super) fn read_u8(&mut self) -> Result<u8> {
        let byte = *self.buf.get(self.pos).ok_or_else(|| {
            GeoWireError::Malformed(format!("TWKB buffer too small at offset {}", self.pos))
        })?;
        self.pos += 1;
        Ok(byte)
    }

    pub(super) fn read_uvarint(&mut self) -> Result<u64> {
        read_uvarint(self.buf, &mut self.pos)
    }

    pub(super) fn read_varint(&mut self) -> Result<i64> {
        read_varint(self.buf, &mut self.pos)
    }

    /// Read an element count, rejecting counts whose elements could not possibly fit in the
    /// remaining bytes. Every varint takes at least one byte.
    pub(super) fn read_count(&mut self, min_element_size: usize) -> Result<usize> {
        let count = usize::try_from(self.read_uvarint()?)?;
        if count.saturating_mul(min_element_size) > self.remaining() {
            return Err(GeoWireError::Malformed(format!(
                "count of {count} exceeds the {} remaining bytes",
                self.remaining()
            )));
        }
        Ok(count)
    }

    /// Read one coordinate tuple, continuing the delta chain.
    pub(super) fn read_coord<C: CoordTrait>(&mut self) -> Result<C> {
        let mut ordinates = [0.; 4];
        for (i, ordinate) in ordinates
            .iter_mut()
            .enumerate()
            .take(C::DIMENSION.size())
        {
            let delta = self.read_varint()?;
            self.last[i] = self.last[i]
                .checked_add(delta)
                .ok_or(GeoWireError::Overflow)?;
            *ordinate = unscale_ordinate(self.last[i], self.precisions[i]);
        }
        Ok(C::from_ordinates(&ordinates))
    }

    pub(super) fn read_coords<C: CoordTrait>(&mut self) -> Result<Vec<C>> {
        let count = self.read_count(C::DIMENSION.size())?;
        let mut coords = Vec::with_capacity(count);
        for _ in 0..count {
            coords.push(self.read_coord()?);
        }
        Ok(coords)
    }

    /// Read `count` IDs, continuing the ID delta chain.
    pub(super) fn read_ids(&mut self, count: usize) -> Result<Vec<i64>> {
        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            self.last_id = self
                .last_id
                .checked_add(self.read_varint()?)
                .ok_or(GeoWireError::Overflow)?;
            ids.push(self.last_id);
        }
        Ok(ids)
    }
}
