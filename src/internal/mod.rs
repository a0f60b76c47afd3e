//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`phy_regs`]: IEEE 802.3 and AT803x PHY register definitions
//!
//! The register modules are re-exported read-only through [`crate::phy`].

pub(crate) mod phy_regs;
