//! Generic PHY Driver Trait
//!
//! This module defines the common interface for all Ethernet PHY drivers,
//! based on IEEE 802.3 Clause 22 standard registers. Drivers supply their
//! identity as associated constants and a `config_init` routine; negotiation
//! and status resolution default to the [`genphy`] helpers.

use super::device::{Features, PhyDevice};
use crate::config::{Duplex, Speed};
use crate::error::Result;
use crate::hal::mdio::MdioBus;

// =============================================================================
// Link Status
// =============================================================================

/// Ethernet link status information
///
/// Contains the negotiated or configured link parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Link speed
    pub speed: Speed,
    /// Duplex mode
    pub duplex: Duplex,
}

impl LinkStatus {
    /// Create a new link status
    pub const fn new(speed: Speed, duplex: Duplex) -> Self {
        Self { speed, duplex }
    }

    /// 1000 Mbps Full Duplex
    pub const fn gigabit_full() -> Self {
        Self::new(Speed::Mbps1000, Duplex::Full)
    }

    /// 1000 Mbps Half Duplex
    pub const fn gigabit_half() -> Self {
        Self::new(Speed::Mbps1000, Duplex::Half)
    }

    /// 100 Mbps Full Duplex
    pub const fn fast_full() -> Self {
        Self::new(Speed::Mbps100, Duplex::Full)
    }

    /// 100 Mbps Half Duplex
    pub const fn fast_half() -> Self {
        Self::new(Speed::Mbps100, Duplex::Half)
    }

    /// 10 Mbps Full Duplex
    pub const fn slow_full() -> Self {
        Self::new(Speed::Mbps10, Duplex::Full)
    }

    /// 10 Mbps Half Duplex
    pub const fn slow_half() -> Self {
        Self::new(Speed::Mbps10, Duplex::Half)
    }
}

// =============================================================================
// Driver Identity
// =============================================================================

/// Driver flags
pub mod flags {
    /// The PHY can raise an interrupt line
    pub const HAS_INTERRUPT: u32 = 0x0000_0001;
}

/// PHY identifier with the mask of bits that must match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId {
    /// Identifier value: `(PHYIDR1 << 16) | PHYIDR2`
    pub id: u32,
    /// Bits of the identifier that are compared
    pub mask: u32,
}

impl DeviceId {
    /// Create a device id
    pub const fn new(id: u32, mask: u32) -> Self {
        Self { id, mask }
    }

    /// Whether a read identifier belongs to this device
    pub const fn matches(&self, phy_id: u32) -> bool {
        (phy_id & self.mask) == (self.id & self.mask)
    }
}

/// Static description of a driver, usable in tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverInfo {
    /// Human-readable driver name
    pub name: &'static str,
    /// Identifier and match mask
    pub id: DeviceId,
    /// Link modes the part can support
    pub features: Features,
    /// See [`flags`]
    pub flags: u32,
}

impl DriverInfo {
    /// Table entry for a [`Driver`] implementation
    pub const fn of<D: Driver>() -> Self {
        Self {
            name: D::NAME,
            id: D::PHY_DEVICE_ID,
            features: D::FEATURES,
            flags: D::FLAGS,
        }
    }
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Trait for Ethernet PHY drivers
///
/// Implementations are zero-sized markers; all state lives in the
/// [`PhyDevice`] passed to each call.
///
/// # IEEE 802.3 Compliance
///
/// All PHY drivers must support the standard Clause 22 registers (0-15),
/// but may also use vendor-specific registers (16-31) for advanced features.
///
/// # Example Implementation
///
/// ```ignore
/// struct MyPhy;
///
/// impl Driver for MyPhy {
///     const NAME: &'static str = "My PHY";
///     const PHY_DEVICE_ID: DeviceId = DeviceId::new(0x0012_3450, 0xFFFF_FFF0);
///     const FEATURES: Features = Features::BASIC;
///     const FLAGS: u32 = 0;
///
///     fn config_init<B: MdioBus>(dev: &mut PhyDevice<'_, B>) -> Result<()> {
///         dev.write(phy_reg::BMCR, bmcr::AN_ENABLE)
///     }
/// }
/// ```
pub trait Driver {
    /// Driver name
    const NAME: &'static str;
    /// Identifier this driver binds to
    const PHY_DEVICE_ID: DeviceId;
    /// Link modes the part can support
    const FEATURES: Features;
    /// See [`flags`]
    const FLAGS: u32;

    /// Bring the PHY into its operating configuration
    fn config_init<B: MdioBus>(dev: &mut PhyDevice<'_, B>) -> Result<()>;

    /// Program advertisement and restart auto-negotiation
    fn config_aneg<B: MdioBus>(dev: &mut PhyDevice<'_, B>) -> Result<()> {
        genphy::config_aneg(dev)
    }

    /// Resolve the current link
    ///
    /// Returns `None` if link is down, `Some(LinkStatus)` if link is up.
    fn read_status<B: MdioBus>(dev: &mut PhyDevice<'_, B>) -> Result<Option<LinkStatus>> {
        genphy::read_status(dev)
    }
}

// =============================================================================
// Default Implementations
// =============================================================================

/// Helper functions using standard IEEE 802.3 registers
pub mod genphy {
    use super::*;
    use crate::internal::phy_regs::standard::{anar, bmcr, bmsr, ctrl1000, phy_reg, stat1000};

    const GBIT: Features = Features::from_bits(
        Features::BASET_1000_HALF.bits() | Features::BASET_1000_FULL.bits(),
    );

    /// Translate advertised modes into ANAR bits
    fn anar_bits(adv: Features) -> u16 {
        let mut bits = 0;
        if adv.contains(Features::BASET_10_HALF) {
            bits |= anar::T10_HD;
        }
        if adv.contains(Features::BASET_10_FULL) {
            bits |= anar::T10_FD;
        }
        if adv.contains(Features::BASET_100_HALF) {
            bits |= anar::TX_HD;
        }
        if adv.contains(Features::BASET_100_FULL) {
            bits |= anar::TX_FD;
        }
        if adv.contains(Features::PAUSE) {
            bits |= anar::PAUSE;
        }
        if adv.contains(Features::ASYM_PAUSE) {
            bits |= anar::PAUSE_ASYM;
        }
        bits
    }

    /// Write the advertisement registers and restart auto-negotiation
    pub fn config_aneg<B: MdioBus>(dev: &mut PhyDevice<'_, B>) -> Result<()> {
        let adv = dev.advertising();

        let old = dev.read(phy_reg::ANAR)?;
        let mut anar_val = (old & !(anar::ALL | anar::SELECTOR)) | anar_bits(adv);
        anar_val |= anar::SELECTOR_IEEE802_3;
        dev.write(phy_reg::ANAR, anar_val)?;

        if dev.supported().intersects(GBIT) {
            let mut ctrl = dev.read(phy_reg::CTRL1000)?;
            ctrl &= !(ctrl1000::ADV_1000_FULL | ctrl1000::ADV_1000_HALF);
            if adv.contains(Features::BASET_1000_FULL) {
                ctrl |= ctrl1000::ADV_1000_FULL;
            }
            if adv.contains(Features::BASET_1000_HALF) {
                ctrl |= ctrl1000::ADV_1000_HALF;
            }
            dev.write(phy_reg::CTRL1000, ctrl)?;
        }

        let bmcr_val = dev.read(phy_reg::BMCR)?;
        dev.write(
            phy_reg::BMCR,
            (bmcr_val | bmcr::AN_ENABLE | bmcr::AN_RESTART) & !bmcr::ISOLATE,
        )
    }

    /// Decode a forced link from BMCR
    fn forced_link(bmcr_val: u16) -> LinkStatus {
        let speed = match (bmcr_val & bmcr::SPEED_1000 != 0, bmcr_val & bmcr::SPEED_100 != 0) {
            (true, false) => Speed::Mbps1000,
            (_, true) => Speed::Mbps100,
            (false, false) => Speed::Mbps10,
        };
        let duplex = if bmcr_val & bmcr::DUPLEX_FULL != 0 {
            Duplex::Full
        } else {
            Duplex::Half
        };
        LinkStatus::new(speed, duplex)
    }

    /// Resolve the highest common mode from both sides' abilities
    fn resolve_negotiated<B: MdioBus>(dev: &PhyDevice<'_, B>) -> Result<LinkStatus> {
        let common_1000 = if dev.supported().intersects(GBIT) {
            let stat = dev.read(phy_reg::STAT1000)?;
            let ctrl = dev.read(phy_reg::CTRL1000)?;
            stat & (ctrl << 2)
        } else {
            0
        };

        let common = dev.read(phy_reg::ANLPAR)? & dev.read(phy_reg::ANAR)?;

        let link = if common_1000 & stat1000::LPA_1000_FULL != 0 {
            LinkStatus::gigabit_full()
        } else if common_1000 & stat1000::LPA_1000_HALF != 0 {
            LinkStatus::gigabit_half()
        } else if common & anar::TX_FD != 0 {
            LinkStatus::fast_full()
        } else if common & anar::TX_HD != 0 {
            LinkStatus::fast_half()
        } else if common & anar::T10_FD != 0 {
            LinkStatus::slow_full()
        } else {
            LinkStatus::slow_half()
        };
        Ok(link)
    }

    /// Read BMSR and resolve speed and duplex
    ///
    /// The result is also stored in the device.
    pub fn read_status<B: MdioBus>(dev: &mut PhyDevice<'_, B>) -> Result<Option<LinkStatus>> {
        // Link status is latched low; the second read reports the current state.
        let _ = dev.read(phy_reg::BMSR)?;
        let bmsr_val = dev.read(phy_reg::BMSR)?;

        let link = if bmsr_val & bmsr::LINK_STATUS == 0 {
            None
        } else {
            let bmcr_val = dev.read(phy_reg::BMCR)?;
            if bmcr_val & bmcr::AN_ENABLE == 0 {
                Some(forced_link(bmcr_val))
            } else if bmsr_val & bmsr::AN_COMPLETE == 0 {
                None
            } else {
                Some(resolve_negotiated(dev)?)
            }
        };

        dev.set_link(link);
        Ok(link)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
