//! IEEE 802.3 PHY Register Definitions
//!
//! Standard PHY register addresses and bit definitions as specified in
//! IEEE 802.3 Clause 22, plus the Clause 45 MMD device numbers and the
//! MMD access control bits used for indirect access through registers 13/14.
//!
//! # Standard Registers
//!
//! | Register | Name | Description |
//! |----------|------|-------------|
//! | 0 | BMCR | Basic Mode Control |
//! | 1 | BMSR | Basic Mode Status |
//! | 2 | PHYIDR1 | PHY Identifier 1 |
//! | 3 | PHYIDR2 | PHY Identifier 2 |
//! | 4 | ANAR | Auto-Negotiation Advertisement |
//! | 5 | ANLPAR | Link Partner Ability |
//! | 6 | ANER | Auto-Negotiation Expansion |
//! | 9 | CTRL1000 | 1000BASE-T Control |
//! | 10 | STAT1000 | 1000BASE-T Status |
//! | 13 | MMD_CTRL | MMD Access Control |
//! | 14 | MMD_DATA | MMD Access Address/Data |
//! | 15 | ESTATUS | Extended Status |

// Complete register definitions are kept for reference
#![allow(dead_code)]

// =============================================================================
// Standard PHY Register Addresses
// =============================================================================

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
    /// Auto-Negotiation Advertisement Register
    pub const ANAR: u8 = 4;
    /// Auto-Negotiation Link Partner Ability Register
    pub const ANLPAR: u8 = 5;
    /// Auto-Negotiation Expansion Register
    pub const ANER: u8 = 6;
    /// 1000BASE-T Control Register
    pub const CTRL1000: u8 = 9;
    /// 1000BASE-T Status Register
    pub const STAT1000: u8 = 10;
    /// MMD Access Control Register
    pub const MMD_CTRL: u8 = 13;
    /// MMD Access Address/Data Register
    pub const MMD_DATA: u8 = 14;
    /// Extended Status Register
    pub const ESTATUS: u8 = 15;
}

// =============================================================================
// BMCR - Basic Mode Control Register (Register 0)
// =============================================================================

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset - self-clearing
    pub const RESET: u16 = 1 << 15;
    /// Loopback mode
    pub const LOOPBACK: u16 = 1 << 14;
    /// Speed select LSB (100 Mbps if set and SPEED_1000 clear)
    pub const SPEED_100: u16 = 1 << 13;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate PHY from MII
    pub const ISOLATE: u16 = 1 << 10;
    /// Restart auto-negotiation - self-clearing
    pub const AN_RESTART: u16 = 1 << 9;
    /// Duplex mode (full duplex if set)
    pub const DUPLEX_FULL: u16 = 1 << 8;
    /// Speed select MSB (1000 Mbps if set and SPEED_100 clear)
    pub const SPEED_1000: u16 = 1 << 6;
}

// =============================================================================
// BMSR - Basic Mode Status Register (Register 1)
// =============================================================================

/// BMSR (Basic Mode Status Register) bits
pub mod bmsr {
    /// 100BASE-T4 capable
    pub const T4_CAPABLE: u16 = 1 << 15;
    /// 100BASE-TX full duplex capable
    pub const TX_FD_CAPABLE: u16 = 1 << 14;
    /// 100BASE-TX half duplex capable
    pub const TX_HD_CAPABLE: u16 = 1 << 13;
    /// 10BASE-T full duplex capable
    pub const T10_FD_CAPABLE: u16 = 1 << 12;
    /// 10BASE-T half duplex capable
    pub const T10_HD_CAPABLE: u16 = 1 << 11;
    /// Extended status register (15) present
    pub const ESTATUS: u16 = 1 << 8;
    /// MF preamble suppression
    pub const MF_PREAMBLE_SUPP: u16 = 1 << 6;
    /// Auto-negotiation complete
    pub const AN_COMPLETE: u16 = 1 << 5;
    /// Remote fault detected
    pub const REMOTE_FAULT: u16 = 1 << 4;
    /// Auto-negotiation ability
    pub const AN_ABILITY: u16 = 1 << 3;
    /// Link status (latched low)
    pub const LINK_STATUS: u16 = 1 << 2;
    /// Jabber condition detected
    pub const JABBER_DETECT: u16 = 1 << 1;
    /// Extended register capabilities
    pub const EXT_CAPABLE: u16 = 1 << 0;
}

// =============================================================================
// ANAR / ANLPAR - Auto-Negotiation Advertisement (Registers 4 and 5)
// =============================================================================

/// ANAR (Auto-Negotiation Advertisement Register) bits
///
/// ANLPAR (register 5) shares this layout for the link partner.
pub mod anar {
    /// Next page
    pub const NEXT_PAGE: u16 = 1 << 15;
    /// Acknowledge
    pub const ACK: u16 = 1 << 14;
    /// Remote fault
    pub const REMOTE_FAULT: u16 = 1 << 13;
    /// Asymmetric pause
    pub const PAUSE_ASYM: u16 = 1 << 11;
    /// Pause capable
    pub const PAUSE: u16 = 1 << 10;
    /// 100BASE-T4
    pub const T4: u16 = 1 << 9;
    /// 100BASE-TX full duplex
    pub const TX_FD: u16 = 1 << 8;
    /// 100BASE-TX half duplex
    pub const TX_HD: u16 = 1 << 7;
    /// 10BASE-T full duplex
    pub const T10_FD: u16 = 1 << 6;
    /// 10BASE-T half duplex
    pub const T10_HD: u16 = 1 << 5;
    /// All speed/duplex/pause bits this driver manages
    pub const ALL: u16 = PAUSE_ASYM | PAUSE | TX_FD | TX_HD | T10_FD | T10_HD;
    /// Selector field mask
    pub const SELECTOR: u16 = 0x001F;
    /// IEEE 802.3 selector value
    pub const SELECTOR_IEEE802_3: u16 = 0x0001;
}

// =============================================================================
// CTRL1000 / STAT1000 - 1000BASE-T Control and Status (Registers 9 and 10)
// =============================================================================

/// CTRL1000 (1000BASE-T Control Register) bits
pub mod ctrl1000 {
    /// Advertise 1000BASE-T full duplex
    pub const ADV_1000_FULL: u16 = 1 << 9;
    /// Advertise 1000BASE-T half duplex
    pub const ADV_1000_HALF: u16 = 1 << 8;
}

/// STAT1000 (1000BASE-T Status Register) bits
///
/// The link partner bits sit two positions above the matching CTRL1000
/// advertisement bits.
pub mod stat1000 {
    /// Link partner is 1000BASE-T full duplex capable
    pub const LPA_1000_FULL: u16 = 1 << 11;
    /// Link partner is 1000BASE-T half duplex capable
    pub const LPA_1000_HALF: u16 = 1 << 10;
}

// =============================================================================
// ESTATUS - Extended Status Register (Register 15)
// =============================================================================

/// ESTATUS (Extended Status Register) bits
pub mod estatus {
    /// 1000BASE-X full duplex capable
    pub const X_1000_FULL: u16 = 1 << 15;
    /// 1000BASE-X half duplex capable
    pub const X_1000_HALF: u16 = 1 << 14;
    /// 1000BASE-T full duplex capable
    pub const T_1000_FULL: u16 = 1 << 13;
    /// 1000BASE-T half duplex capable
    pub const T_1000_HALF: u16 = 1 << 12;
}

// =============================================================================
// MMD (Clause 45 over Clause 22)
// =============================================================================

/// MMD device addresses and access control bits
pub mod mmd {
    /// Physical Coding Sublayer device
    pub const DEV_PCS: u8 = 3;
    /// Auto-Negotiation device
    pub const DEV_AN: u8 = 7;

    /// MMD_CTRL device address field mask
    pub const CTRL_DEVAD_MASK: u16 = 0x001F;
    /// MMD_CTRL function: address
    pub const CTRL_FUNC_ADDR: u16 = 0x0000;
    /// MMD_CTRL function: data, no post increment
    pub const CTRL_FUNC_DATA: u16 = 0x4000;

    /// EEE advertisement register (AN device, register 60)
    pub const AN_EEE_ADV: u16 = 0x003C;
}
