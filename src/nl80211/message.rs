//! Generic netlink message framing
//!
//! [`RequestBuilder`] lays out `nlmsghdr`, `genlmsghdr` and attributes in a
//! caller buffer. [`GenlMessage`] validates a received message and hands out
//! its attributes.

use super::attr::{AttrWriter, Attrs};
use super::{Error, GENL_HDRLEN, NLMSG_HDRLEN, Result, nlm_flags};

/// Offset of the first attribute in a generic netlink message
const PAYLOAD_OFFSET: usize = NLMSG_HDRLEN + GENL_HDRLEN;

/// Builds one generic netlink request in place
///
/// The length field is filled in by [`finish`](Self::finish).
#[derive(Debug)]
pub struct RequestBuilder<'b> {
    writer: AttrWriter<'b>,
}

impl<'b> RequestBuilder<'b> {
    /// Write the headers for `cmd` to `family`
    ///
    /// Flags are `REQUEST | ACK`; the port id is left 0 for the kernel to
    /// fill in.
    pub fn new(buf: &'b mut [u8], family: u16, cmd: u8, seq: u32) -> Result<Self> {
        let Some(hdr) = buf.get_mut(..PAYLOAD_OFFSET) else {
            return Err(Error::NoBufferSpace);
        };

        hdr[0..4].copy_from_slice(&(PAYLOAD_OFFSET as u32).to_ne_bytes());
        hdr[4..6].copy_from_slice(&family.to_ne_bytes());
        hdr[6..8].copy_from_slice(&(nlm_flags::REQUEST | nlm_flags::ACK).to_ne_bytes());
        hdr[8..12].copy_from_slice(&seq.to_ne_bytes());
        hdr[12..16].copy_from_slice(&0u32.to_ne_bytes());
        hdr[16] = cmd;
        hdr[17] = 0;
        hdr[18..20].fill(0);

        Ok(Self {
            writer: AttrWriter::at(buf, PAYLOAD_OFFSET),
        })
    }

    /// OR extra bits into `nlmsg_flags`
    pub fn set_flags(&mut self, flags: u16) {
        let hdr = self.writer.buf_mut();
        let current = u16::from_ne_bytes([hdr[6], hdr[7]]);
        hdr[6..8].copy_from_slice(&(current | flags).to_ne_bytes());
    }

    /// Append a u32 attribute
    pub fn put_u32(&mut self, ty: u16, value: u32) -> Result<()> {
        self.writer.put_u32(ty, value)
    }

    /// Append an attribute with an arbitrary payload
    pub fn put(&mut self, ty: u16, payload: &[u8]) -> Result<()> {
        self.writer.put(ty, payload)
    }

    /// Current message length
    pub fn len(&self) -> usize {
        self.writer.len()
    }

    /// Whether no attribute has been added yet
    pub fn is_empty(&self) -> bool {
        self.writer.len() == PAYLOAD_OFFSET
    }

    /// Fix up `nlmsg_len` and return the finished message
    pub fn finish(self) -> &'b [u8] {
        let (buf, len) = self.writer.into_parts();
        buf[0..4].copy_from_slice(&(len as u32).to_ne_bytes());
        &buf[..len]
    }
}

/// A received generic netlink message
#[derive(Debug, Clone, Copy)]
pub struct GenlMessage<'a> {
    bytes: &'a [u8],
}

impl<'a> GenlMessage<'a> {
    /// Validate the headers of the first message in `bytes`
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() < PAYLOAD_OFFSET {
            return Err(Error::Truncated);
        }
        let len = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        if len < PAYLOAD_OFFSET {
            return Err(Error::InvalidHeader);
        }
        let bytes = bytes.get(..len).ok_or(Error::Truncated)?;
        Ok(Self { bytes })
    }

    fn u16_at(&self, offset: usize) -> u16 {
        u16::from_ne_bytes([self.bytes[offset], self.bytes[offset + 1]])
    }

    fn u32_at(&self, offset: usize) -> u32 {
        u32::from_ne_bytes([
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
            self.bytes[offset + 3],
        ])
    }

    /// Message length from the header
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; a parsed message carries at least both headers
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `nlmsg_type` (the family id)
    pub fn msg_type(&self) -> u16 {
        self.u16_at(4)
    }

    /// `nlmsg_flags`
    pub fn flags(&self) -> u16 {
        self.u16_at(6)
    }

    /// `nlmsg_seq`
    pub fn seq(&self) -> u32 {
        self.u32_at(8)
    }

    /// `nlmsg_pid`
    pub fn pid(&self) -> u32 {
        self.u32_at(12)
    }

    /// Generic netlink command
    pub fn cmd(&self) -> u8 {
        self.bytes[NLMSG_HDRLEN]
    }

    /// Generic netlink family version
    pub fn version(&self) -> u8 {
        self.bytes[NLMSG_HDRLEN + 1]
    }

    /// Attribute stream after the generic header
    pub fn attrs(&self, max: u16) -> Attrs<'a> {
        Attrs::parse(&self.bytes[PAYLOAD_OFFSET..], max)
    }
}
