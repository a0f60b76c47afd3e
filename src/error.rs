//! Error types for the AT803x PHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Driver setup and board description failures
//! - [`IoError`]: MDIO transport failures
//!
//! The unified [`Error`] enum wraps both domain errors and is returned
//! by every fallible bus and driver method.
//!
//! The nl80211 command helpers keep their own error types in
//! [`crate::nl80211`], because their failures map to command exit codes
//! rather than register access.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and identification errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid PHY address (must be 0-31)
    InvalidPhyAddress,
    /// Invalid configuration parameter
    InvalidConfig,
    /// PHY identifier does not match any known AT803x part
    UnsupportedPhy,
    /// GPIO (reset pin) error
    GpioError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::InvalidConfig => "invalid configuration",
            ConfigError::UnsupportedPhy => "unsupported PHY",
            ConfigError::GpioError => "GPIO error",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// MDIO transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// Operation timed out
    Timeout,
    /// PHY did not respond (no turnaround, all-ones read)
    PhyError,
    /// Bus controller reported a failure
    BusError,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::Timeout => "operation timed out",
            IoError::PhyError => "PHY communication error",
            IoError::BusError => "MDIO bus error",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// ```ignore
/// match phy.config_init() {
///     Err(Error::Io(IoError::Timeout)) => { /* bus stuck */ }
///     Err(Error::Config(ConfigError::UnsupportedPhy)) => { /* wrong part */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for PHY and bus operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for raw bus operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Best-effort results
// =============================================================================

/// Discard the outcome of a write the hardware treats as advisory.
///
/// Some register writes during bring-up are not checked by design (WOL
/// interrupt enable, SmartEEE disable, debug port write-back). Routing them
/// through this function keeps the discarded error visible at the call site
/// and logs it when `defmt` is enabled.
#[inline]
pub fn best_effort<T>(result: Result<T>) {
    if let Err(_e) = result {
        #[cfg(feature = "defmt")]
        defmt::debug!("best-effort PHY access failed: {}", _e);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
