//! Netlink attribute (TLV) encoding and decoding
//!
//! Each attribute is a 4-byte header `{ nla_len: u16, nla_type: u16 }`
//! followed by the payload and zero padding up to the next 4-byte boundary.
//! `nla_len` counts header plus payload, without padding.

use super::{Error, NLA_HDRLEN, NLA_TYPE_MASK, Result, nla_align};

// =============================================================================
// Writer
// =============================================================================

/// Appends attributes to a caller-supplied buffer
#[derive(Debug)]
pub struct AttrWriter<'b> {
    buf: &'b mut [u8],
    pos: usize,
}

impl<'b> AttrWriter<'b> {
    /// Start writing at the beginning of `buf`
    pub fn new(buf: &'b mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub(super) fn at(buf: &'b mut [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    /// Bytes written so far, padding included
    pub fn len(&self) -> usize {
        self.pos
    }

    /// Nothing written yet
    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Append one attribute
    ///
    /// Fails with [`Error::NoBufferSpace`] and leaves the buffer untouched
    /// when the padded attribute does not fit.
    pub fn put(&mut self, ty: u16, payload: &[u8]) -> Result<()> {
        let attr_len = NLA_HDRLEN + payload.len();
        let total = nla_align(attr_len);
        let nla_len = u16::try_from(attr_len).map_err(|_| Error::NoBufferSpace)?;

        let end = self.pos.checked_add(total).ok_or(Error::NoBufferSpace)?;
        let Some(dst) = self.buf.get_mut(self.pos..end) else {
            return Err(Error::NoBufferSpace);
        };

        dst[0..2].copy_from_slice(&nla_len.to_ne_bytes());
        dst[2..4].copy_from_slice(&(ty & NLA_TYPE_MASK).to_ne_bytes());
        dst[NLA_HDRLEN..attr_len].copy_from_slice(payload);
        dst[attr_len..].fill(0);

        self.pos = end;
        Ok(())
    }

    /// Append a u32 attribute
    pub fn put_u32(&mut self, ty: u16, value: u32) -> Result<()> {
        self.put(ty, &value.to_ne_bytes())
    }

    /// Append an attribute with no payload
    pub fn put_flag(&mut self, ty: u16) -> Result<()> {
        self.put(ty, &[])
    }

    pub(super) fn buf_mut(&mut self) -> &mut [u8] {
        self.buf
    }

    pub(super) fn into_parts(self) -> (&'b mut [u8], usize) {
        (self.buf, self.pos)
    }
}

// =============================================================================
// Reader
// =============================================================================

/// One attribute borrowed from a received message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attr<'a> {
    ty: u16,
    payload: &'a [u8],
}

impl<'a> Attr<'a> {
    /// Attribute type with flag bits stripped
    pub fn ty(&self) -> u16 {
        self.ty
    }

    /// Payload without header or padding
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Payload as a u32, `None` if shorter than four bytes
    pub fn get_u32(&self) -> Option<u32> {
        let bytes: [u8; 4] = self.payload.get(..4)?.try_into().ok()?;
        Some(u32::from_ne_bytes(bytes))
    }
}

/// A validated attribute stream
///
/// Lookups behave like libnl's `nla_parse`: types above `max` are ignored
/// and when a type appears more than once the last occurrence wins.
#[derive(Debug, Clone, Copy)]
pub struct Attrs<'a> {
    data: &'a [u8],
    max: u16,
}

impl<'a> Attrs<'a> {
    /// Walk the attribute headers in `data`
    ///
    /// Stops at the first header whose length is below the header size or
    /// runs past the end; attributes before it are kept. A tail shorter than
    /// one header is ignored.
    pub fn parse(data: &'a [u8], max: u16) -> Self {
        let mut end = 0;
        while let Some(rest) = data.get(end..).filter(|rest| rest.len() >= NLA_HDRLEN) {
            let nla_len = u16::from_ne_bytes([rest[0], rest[1]]) as usize;
            if nla_len < NLA_HDRLEN || nla_len > rest.len() {
                break;
            }
            end = (end + nla_align(nla_len)).min(data.len());
        }
        Self {
            data: &data[..end],
            max,
        }
    }

    /// Iterate over all attributes in order, including types above `max`
    pub fn iter(&self) -> AttrIter<'a> {
        AttrIter { rest: self.data }
    }

    /// Look up an attribute by type
    pub fn get(&self, ty: u16) -> Option<Attr<'a>> {
        if ty > self.max {
            return None;
        }
        self.iter().filter(|attr| attr.ty == ty).last()
    }
}

/// Iterator over the attributes of an [`Attrs`]
#[derive(Debug, Clone)]
pub struct AttrIter<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for AttrIter<'a> {
    type Item = Attr<'a>;

    fn next(&mut self) -> Option<Attr<'a>> {
        if self.rest.len() < NLA_HDRLEN {
            return None;
        }
        let nla_len = u16::from_ne_bytes([self.rest[0], self.rest[1]]) as usize;
        let ty = u16::from_ne_bytes([self.rest[2], self.rest[3]]) & NLA_TYPE_MASK;
        let payload = self.rest.get(NLA_HDRLEN..nla_len)?;
        self.rest = self.rest.get(nla_align(nla_len)..).unwrap_or(&[]);
        Some(Attr { ty, payload })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_u32_layout() {
        let mut buf = [0xAAu8; 8];
        let mut w = AttrWriter::new(&mut buf);
        w.put_u32(0x0400, 1).unwrap();
        assert_eq!(w.len(), 8);

        assert_eq!(u16::from_ne_bytes([buf[0], buf[1]]), 8);
        assert_eq!(u16::from_ne_bytes([buf[2], buf[3]]), 0x0400);
        assert_eq!(u32::from_ne_bytes([buf[4], buf[5], buf[6], buf[7]]), 1);
    }

    #[test]
    fn put_pads_to_alignment() {
        let mut buf = [0xAAu8; 12];
        let mut w = AttrWriter::new(&mut buf);
        w.put(7, &[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(w.len(), 12);

        assert_eq!(u16::from_ne_bytes([buf[0], buf[1]]), 9);
        assert_eq!(&buf[4..9], &[1, 2, 3, 4, 5]);
        assert_eq!(&buf[9..12], &[0, 0, 0]);
    }

    #[test]
    fn put_without_room_writes_nothing() {
        let mut buf = [0xAAu8; 7];
        let mut w = AttrWriter::new(&mut buf);
        assert_eq!(w.put_u32(1, 5), Err(Error::NoBufferSpace));
        assert!(w.is_empty());
        assert_eq!(buf, [0xAA; 7]);
    }

    #[test]
    fn parse_and_lookup() {
        let mut buf = [0u8; 32];
        let mut w = AttrWriter::new(&mut buf);
        w.put_u32(3, 42).unwrap();
        w.put_flag(9).unwrap();
        w.put(5, b"wlan0\0").unwrap();
        let len = w.len();

        let attrs = Attrs::parse(&buf[..len], 16);
        assert_eq!(attrs.get(3).and_then(|a| a.get_u32()), Some(42));
        assert_eq!(attrs.get(9).map(|a| a.payload().len()), Some(0));
        assert_eq!(attrs.get(5).map(|a| a.payload()), Some(&b"wlan0\0"[..]));
        assert_eq!(attrs.get(4), None);
        assert_eq!(attrs.iter().count(), 3);
    }

    #[test]
    fn duplicate_type_last_wins() {
        let mut buf = [0u8; 16];
        let mut w = AttrWriter::new(&mut buf);
        w.put_u32(3, 1).unwrap();
        w.put_u32(3, 2).unwrap();

        let attrs = Attrs::parse(&buf, 3);
        assert_eq!(attrs.get(3).and_then(|a| a.get_u32()), Some(2));
    }

    #[test]
    fn types_above_max_are_ignored() {
        let mut buf = [0u8; 8];
        AttrWriter::new(&mut buf).put_u32(10, 1).unwrap();

        let attrs = Attrs::parse(&buf, 9);
        assert_eq!(attrs.get(10), None);
        assert_eq!(attrs.iter().count(), 1);
    }

    #[test]
    fn parse_stops_at_bad_lengths() {
        let mut buf = [0u8; 8];
        buf[0..2].copy_from_slice(&2u16.to_ne_bytes());
        assert_eq!(Attrs::parse(&buf, 16).iter().count(), 0);

        buf[0..2].copy_from_slice(&12u16.to_ne_bytes());
        assert_eq!(Attrs::parse(&buf, 16).iter().count(), 0);
    }

    #[test]
    fn attributes_before_a_bad_header_are_kept() {
        let mut buf = [0u8; 16];
        AttrWriter::new(&mut buf).put_u32(3, 42).unwrap();
        // Second header claims 2 bytes, shorter than the header itself.
        buf[8..10].copy_from_slice(&2u16.to_ne_bytes());
        buf[10..12].copy_from_slice(&5u16.to_ne_bytes());

        let attrs = Attrs::parse(&buf, 16);
        assert_eq!(attrs.get(3).and_then(|a| a.get_u32()), Some(42));
        assert_eq!(attrs.get(5), None);
        assert_eq!(attrs.iter().count(), 1);

        buf[8..10].copy_from_slice(&64u16.to_ne_bytes());
        let attrs = Attrs::parse(&buf, 16);
        assert_eq!(attrs.get(3).and_then(|a| a.get_u32()), Some(42));
        assert_eq!(attrs.iter().count(), 1);
    }

    #[test]
    fn short_payload_has_no_u32() {
        let mut buf = [0u8; 8];
        AttrWriter::new(&mut buf).put(1, &[1, 2]).unwrap();

        let attrs = Attrs::parse(&buf, 1);
        assert_eq!(attrs.get(1).and_then(|a| a.get_u32()), None);
    }
}
