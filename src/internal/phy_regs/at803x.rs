//! AT803x Vendor-Specific Register Definitions
//!
//! Register definitions for the Qualcomm Atheros AR8030/AR8035 Gigabit
//! Ethernet PHYs.
//!
//! # Module Organization
//!
//! - `phy_id`: PHY identifier constants
//! - `reg`: Directly addressable vendor registers
//! - `intr`: Interrupt enable/status bits
//! - `debug`: Debug port window and debug register bits
//! - `mmd`: Vendor offsets inside the PCS MMD
//! - `timing`: Reset timing
//!
//! # References
//!
//! - AR8035 Datasheet
//! - IEEE 802.3 Ethernet Standard

#![allow(dead_code)]

// =============================================================================
// AT803x PHY Identifiers
// =============================================================================

/// PHY identifier constants
pub mod phy_id {
    /// AR8035 PHY identifier
    pub const AT8035: u32 = 0x004D_D072;
    /// AR8030 PHY identifier
    pub const AT8030: u32 = 0x004D_D076;
    /// Match mask shared by the family (ignores bit 4)
    pub const MASK: u32 = 0xFFFF_FFEF;
}

// =============================================================================
// Vendor Registers
// =============================================================================

/// AT803x vendor-specific register addresses
pub mod reg {
    /// Interrupt Enable Register
    pub const INTR_ENABLE: u8 = 0x12;
    /// Interrupt Status Register (clear on read)
    pub const INTR_STATUS: u8 = 0x13;
    /// Debug port address offset register
    pub const DEBUG_ADDR: u8 = 0x1D;
    /// Debug port data register
    pub const DEBUG_DATA: u8 = 0x1E;
}

/// Interrupt Enable Register (0x12) bits
pub mod intr {
    /// Wake-on-LAN interrupt enable
    pub const WOL: u16 = 0x0001;
}

// =============================================================================
// Debug Port
// =============================================================================

/// Debug registers reached through the debug port window
pub mod debug {
    /// Debug register 0 (analog test control)
    pub const DBG0: u16 = 0x00;
    /// RGMII receive clock delay enable
    pub const DBG0_RGMII_RX_CLK_DELAY_EN: u16 = 1 << 8;

    /// Debug register 5 (SerDes test and system mode control)
    pub const DBG5: u16 = 0x05;
    /// RGMII transmit clock delay enable
    pub const DBG5_RGMII_TX_CLK_DELAY_EN: u16 = 1 << 8;

    /// Value assumed for a debug register whose read failed
    pub const READ_FAILED: u16 = 0xFFFF;
}

// =============================================================================
// Vendor MMD Offsets
// =============================================================================

/// Vendor offsets inside the PCS MMD (device 3)
pub mod mmd {
    /// Local MAC address bits 32..47 (first two octets)
    pub const LOC_MAC_ADDR_32_47: u16 = 0x804A;
    /// Local MAC address bits 16..31 (middle two octets)
    pub const LOC_MAC_ADDR_16_31: u16 = 0x804B;
    /// Local MAC address bits 0..15 (last two octets)
    pub const LOC_MAC_ADDR_0_15: u16 = 0x804C;

    /// WOL address words in programming order (high, mid, low)
    pub const WOL_ADDR_OFFSETS: [u16; 3] =
        [LOC_MAC_ADDR_32_47, LOC_MAC_ADDR_16_31, LOC_MAC_ADDR_0_15];

    /// SmartEEE control register 3
    pub const SMART_EEE_CTRL3: u16 = 0x805D;
    /// LPI TX delay select field shift
    pub const SMART_EEE_CTRL3_LPI_TX_DELAY_SEL_SHIFT: u16 = 12;
    /// LPI TX delay select field mask (before shift)
    pub const SMART_EEE_CTRL3_LPI_TX_DELAY_SEL_MASK: u16 = 0x3;
    /// SmartEEE LPI enable
    pub const SMART_EEE_CTRL3_LPI_EN: u16 = 1 << 8;
}

// =============================================================================
// Timing
// =============================================================================

/// Reset timing constants
pub mod timing {
    /// Hardware reset pulse in microseconds (datasheet minimum is 10 ms)
    pub const RESET_PULSE_US: u32 = 10_000;
    /// Wait after releasing reset before the first MDIO access
    pub const RESET_RECOVERY_US: u32 = 5_000;
}
