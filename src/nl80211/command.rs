//! Command table and request preparation
//!
//! A [`Command`] describes one `<section> <name>` subcommand the way a
//! wireless CLI registers it. [`prepare`] frames the request, adds the
//! interface index, runs the command's handler and returns the finished
//! bytes together with the reply handler it installed.

use core::fmt::{self, Write};

use super::iack::{get_iack, set_iack};
use super::message::{GenlMessage, RequestBuilder};
use super::{ENOBUFS, Error, NL80211_ATTR_IFINDEX, NL80211_CMD_GET_IACK, NL80211_CMD_SET_IACK};

// =============================================================================
// Types
// =============================================================================

/// What a reply handler wants done with the rest of the reply stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CallbackAction {
    /// Continue with the next message
    Ok,
    /// Skip the rest of this message and continue
    Skip,
    /// Stop processing
    Stop,
}

/// Which identifier a command's target is addressed by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandIdBy {
    /// No target
    None,
    /// Wireless PHY index
    Phy,
    /// Network interface index
    Netdev,
    /// Wireless device id
    Wdev,
}

/// Errors a command handler reports to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Wrong number of arguments or an unknown value
    InvalidParameters,
    /// The request buffer is full
    NoBufferSpace,
}

impl CommandError {
    /// Process exit status for this error
    pub const fn status(self) -> i32 {
        match self {
            CommandError::InvalidParameters => 2,
            CommandError::NoBufferSpace => -ENOBUFS,
        }
    }

    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CommandError::InvalidParameters => "invalid parameters",
            CommandError::NoBufferSpace => "no buffer space",
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Error> for CommandError {
    fn from(_: Error) -> Self {
        CommandError::NoBufferSpace
    }
}

/// Called for every valid reply message
pub type ResponseHandler = fn(&GenlMessage<'_>, &mut dyn Write) -> CallbackAction;

/// Adds the command's attributes to a request and optionally installs a
/// reply handler
pub type CommandHandler =
    fn(&mut RequestBuilder<'_>, &[&str], &mut dyn Write) -> Result<Option<ResponseHandler>, CommandError>;

/// One registered subcommand
#[derive(Debug, Clone, Copy)]
pub struct Command {
    /// First word (`set`, `get`)
    pub section: &'static str,
    /// Second word
    pub name: &'static str,
    /// Argument synopsis
    pub args: &'static str,
    /// nl80211 command number
    pub cmd: u8,
    /// Extra netlink flags
    pub flags: u16,
    /// How the target is identified
    pub id_by: CommandIdBy,
    /// Request builder
    pub handler: CommandHandler,
    /// One-line help
    pub help: &'static str,
}

/// Every command this module provides
pub static COMMANDS: [Command; 2] = [
    Command {
        section: "set",
        name: "iack",
        args: "<on|off>",
        cmd: NL80211_CMD_SET_IACK,
        flags: 0,
        id_by: CommandIdBy::Netdev,
        handler: set_iack,
        help: "Set implicit ack state to on or off.",
    },
    Command {
        section: "get",
        name: "iack",
        args: "<param>",
        cmd: NL80211_CMD_GET_IACK,
        flags: 0,
        id_by: CommandIdBy::Netdev,
        handler: get_iack,
        help: "Retrieve implicit ack state.",
    },
];

/// Look up a command by its two words
pub fn find_command(section: &str, name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.section == section && c.name == name)
}

// =============================================================================
// Request Preparation
// =============================================================================

/// A framed request and the handler for its replies
#[derive(Debug)]
pub struct Prepared<'b> {
    request: &'b [u8],
    handler: Option<ResponseHandler>,
}

impl<'b> Prepared<'b> {
    /// Bytes to send
    pub fn request(&self) -> &'b [u8] {
        self.request
    }

    /// Whether replies will be decoded
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Feed one reply message to the installed handler
    ///
    /// Without a handler the reply is accepted as is.
    pub fn handle_response(&self, bytes: &[u8], out: &mut dyn Write) -> Result<CallbackAction, Error> {
        let msg = GenlMessage::parse(bytes)?;
        Ok(match self.handler {
            Some(handler) => handler(&msg, out),
            None => CallbackAction::Ok,
        })
    }
}

/// Build the complete request for `command` aimed at interface `ifindex`
pub fn prepare<'b>(
    command: &Command,
    family: u16,
    ifindex: u32,
    seq: u32,
    args: &[&str],
    buf: &'b mut [u8],
    out: &mut dyn Write,
) -> Result<Prepared<'b>, CommandError> {
    let mut msg = RequestBuilder::new(buf, family, command.cmd, seq)?;
    msg.set_flags(command.flags);

    if command.id_by == CommandIdBy::Netdev {
        msg.put_u32(NL80211_ATTR_IFINDEX, ifindex)?;
    }

    let handler = (command.handler)(&mut msg, args, out)?;
    Ok(Prepared {
        request: msg.finish(),
        handler,
    })
}
