//! `set iack` / `get iack`

use core::fmt::Write;

use super::command::{CallbackAction, CommandError, ResponseHandler};
use super::message::{GenlMessage, RequestBuilder};
use super::{NL80211_ATTR_IACK_STATE, NL80211_ATTR_MAX};

/// Implicit-ACK state carried in [`NL80211_ATTR_IACK_STATE`]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IackState {
    /// Implicit ACK off
    Disabled = 0,
    /// Implicit ACK on
    Enabled = 1,
}

impl IackState {
    /// Parse the command-line spelling (`on` / `off`)
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "on" => Some(Self::Enabled),
            "off" => Some(Self::Disabled),
            _ => None,
        }
    }

    /// Decode a reported value; anything but `1` reads as disabled
    pub const fn from_u32(value: u32) -> Self {
        if value == Self::Enabled as u32 {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    /// `on` or `off`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "on",
            Self::Disabled => "off",
        }
    }
}

/// Append the requested state to a `SET_IACK` request
///
/// Argument errors print a diagnostic and leave the request untouched.
pub fn set_iack(
    msg: &mut RequestBuilder<'_>,
    args: &[&str],
    out: &mut dyn Write,
) -> Result<Option<ResponseHandler>, CommandError> {
    let [arg] = args else {
        let _ = out.write_str("Invalid parameters!\n");
        return Err(CommandError::InvalidParameters);
    };

    let Some(state) = IackState::from_arg(arg) else {
        let _ = writeln!(out, "Invalid parameter: {arg}");
        return Err(CommandError::InvalidParameters);
    };

    msg.put_u32(NL80211_ATTR_IACK_STATE, state as u32)?;
    Ok(None)
}

/// Install [`print_iack`] as the reply handler
pub fn get_iack(
    _msg: &mut RequestBuilder<'_>,
    _args: &[&str],
    _out: &mut dyn Write,
) -> Result<Option<ResponseHandler>, CommandError> {
    Ok(Some(print_iack))
}

/// Print `Implicit ACK: on|off` for a reply carrying the state attribute
pub fn print_iack(msg: &GenlMessage<'_>, out: &mut dyn Write) -> CallbackAction {
    let state = msg
        .attrs(NL80211_ATTR_MAX)
        .get(NL80211_ATTR_IACK_STATE)
        .and_then(|attr| attr.get_u32());

    if let Some(value) = state {
        let _ = writeln!(out, "Implicit ACK: {}", IackState::from_u32(value).as_str());
    }
    CallbackAction::Skip
}
