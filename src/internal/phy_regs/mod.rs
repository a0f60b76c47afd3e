//! PHY Register Definitions
//!
//! # Module Organization
//!
//! - [`standard`] - IEEE 802.3 Clause 22 standard PHY registers (0-15) and
//!   the Clause 45 MMD registers reached through them
//! - [`at803x`] - AT803x vendor-specific registers, debug port and MMD offsets
//!
//! # Access Method
//!
//! PHY registers are accessed via the MDIO (Management Data Input/Output)
//! interface. Registers beyond the 32 directly addressable ones are reached
//! through one of two windows: the IEEE MMD window (registers 13/14) or the
//! Atheros debug port (registers 29/30).

pub mod at803x;
pub mod standard;
