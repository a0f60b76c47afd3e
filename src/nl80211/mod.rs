//! nl80211 implicit-ACK commands
//!
//! Client-side pieces of the `set iack` / `get iack` wireless commands:
//! request framing, attribute encoding, reply decoding and the command
//! table that ties them together. Sockets, family resolution and ACK
//! handling belong to the caller; everything here works on byte buffers.
//!
//! # Wire Layout
//!
//! ```text
//! +-----------------+---------------+---------+---------+-----
//! | nlmsghdr (16)   | genlmsghdr (4)| nlattr  | payload | pad ...
//! +-----------------+---------------+---------+---------+-----
//! ```
//!
//! All header fields are host byte order, as netlink expects.
//!
//! # Example
//!
//! ```ignore
//! let cmd = nl80211::find_command("set", "iack").unwrap();
//! let mut buf = [0u8; 64];
//! let prepared = nl80211::prepare(cmd, family_id, ifindex, seq, &["on"], &mut buf, &mut out)?;
//! socket.send(prepared.request())?;
//! ```

pub mod attr;
pub mod command;
pub mod iack;
pub mod message;

pub use attr::{Attr, AttrWriter, Attrs};
pub use command::{
    COMMANDS, CallbackAction, Command, CommandError, CommandIdBy, Prepared, find_command, prepare,
};
pub use iack::IackState;
pub use message::{GenlMessage, RequestBuilder};

// =============================================================================
// Netlink Constants
// =============================================================================

/// Size of `struct nlmsghdr`
pub const NLMSG_HDRLEN: usize = 16;
/// Size of `struct genlmsghdr`
pub const GENL_HDRLEN: usize = 4;
/// Size of `struct nlattr`
pub const NLA_HDRLEN: usize = 4;
/// Netlink attribute and message alignment
pub const NLA_ALIGNTO: usize = 4;
/// Attribute type bits (nested and byte-order flags stripped)
pub const NLA_TYPE_MASK: u16 = 0x3FFF;

/// Round a length up to netlink alignment
pub const fn nla_align(len: usize) -> usize {
    (len + NLA_ALIGNTO - 1) & !(NLA_ALIGNTO - 1)
}

/// `nlmsghdr.nlmsg_flags` bits
pub mod nlm_flags {
    /// Message is a request
    pub const REQUEST: u16 = 0x0001;
    /// Ask for an acknowledgement
    pub const ACK: u16 = 0x0004;
}

/// errno value reported when a request buffer is full
pub const ENOBUFS: i32 = 105;

// =============================================================================
// nl80211 Constants
// =============================================================================

/// Query the implicit-ACK state of an interface
///
/// Not part of upstream nl80211; the value sits above the upstream command
/// range and must match the kernel this client talks to.
pub const NL80211_CMD_GET_IACK: u8 = 0xF0;
/// Set the implicit-ACK state of an interface
pub const NL80211_CMD_SET_IACK: u8 = 0xF1;

/// Network interface index (u32)
pub const NL80211_ATTR_IFINDEX: u16 = 3;
/// Implicit-ACK state (u32, see [`IackState`])
pub const NL80211_ATTR_IACK_STATE: u16 = 0x0400;
/// Highest attribute type this client parses
pub const NL80211_ATTR_MAX: u16 = NL80211_ATTR_IACK_STATE;

// =============================================================================
// Errors
// =============================================================================

/// Framing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Not enough room left in the request buffer
    NoBufferSpace,
    /// Message or attribute extends past the received bytes
    Truncated,
    /// Header length field is smaller than the header itself
    InvalidHeader,
}

impl Error {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Error::NoBufferSpace => "no buffer space",
            Error::Truncated => "truncated message",
            Error::InvalidHeader => "invalid header",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type alias for framing operations
pub type Result<T> = core::result::Result<T, Error>;
