//! PHY device handle and the values it carries
//!
//! A [`PhyDevice`] identifies one transceiver on a shared [`MiiBus`]. It is
//! created by the owner when the PHY is attached and dropped on detach.
//! Drivers read and update its [`Features`] fields; everything else is
//! supplied by the owner.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

use super::generic::LinkStatus;
use crate::config::PlatformData;
use crate::error::{ConfigResult, Result};
use crate::hal::mdio::{self, MAX_PHY_ADDR, MdioBus, MiiBus};
use crate::internal::phy_regs::standard::phy_reg;

// =============================================================================
// Feature Mask
// =============================================================================

/// Link mode and media capability mask
///
/// Bit positions follow the ethtool `SUPPORTED_*` layout so values can be
/// compared with what Linux reports for the same PHY.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Features(u32);

impl Features {
    /// No capabilities
    pub const EMPTY: Self = Self(0);
    /// 10BASE-T half duplex
    pub const BASET_10_HALF: Self = Self(1 << 0);
    /// 10BASE-T full duplex
    pub const BASET_10_FULL: Self = Self(1 << 1);
    /// 100BASE-TX half duplex
    pub const BASET_100_HALF: Self = Self(1 << 2);
    /// 100BASE-TX full duplex
    pub const BASET_100_FULL: Self = Self(1 << 3);
    /// 1000BASE-T half duplex
    pub const BASET_1000_HALF: Self = Self(1 << 4);
    /// 1000BASE-T full duplex
    pub const BASET_1000_FULL: Self = Self(1 << 5);
    /// Auto-negotiation
    pub const AUTONEG: Self = Self(1 << 6);
    /// Twisted pair
    pub const TP: Self = Self(1 << 7);
    /// AUI
    pub const AUI: Self = Self(1 << 8);
    /// MII
    pub const MII: Self = Self(1 << 9);
    /// Fibre
    pub const FIBRE: Self = Self(1 << 10);
    /// BNC
    pub const BNC: Self = Self(1 << 11);
    /// Symmetric pause
    pub const PAUSE: Self = Self(1 << 13);
    /// Asymmetric pause
    pub const ASYM_PAUSE: Self = Self(1 << 14);

    /// Media types every AT803x reports regardless of what is wired
    pub const MEDIA_BASELINE: Self =
        Self(Self::TP.0 | Self::MII.0 | Self::AUI.0 | Self::FIBRE.0 | Self::BNC.0);

    /// 10/100 twisted pair with auto-negotiation
    pub const BASIC: Self = Self(
        Self::BASET_10_HALF.0
            | Self::BASET_10_FULL.0
            | Self::BASET_100_HALF.0
            | Self::BASET_100_FULL.0
            | Self::AUTONEG.0
            | Self::TP.0
            | Self::MII.0,
    );

    /// [`Features::BASIC`] plus 1000BASE-T
    pub const GBIT: Self =
        Self(Self::BASIC.0 | Self::BASET_1000_HALF.0 | Self::BASET_1000_FULL.0);

    /// Build from raw ethtool bits
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw ethtool bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is present
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any bit of `other` is present
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Union of two masks
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether no bit is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Features {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Features {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Features {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Features({:#06x})", self.0)
    }
}

// =============================================================================
// MAC Address
// =============================================================================

/// Ethernet MAC address of the interface a PHY is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// The broadcast address
    pub const BROADCAST: Self = Self([0xFF; 6]);

    /// Create from octets
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Address octets
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// All octets zero
    pub const fn is_zero(&self) -> bool {
        let o = self.0;
        (o[0] | o[1] | o[2] | o[3] | o[4] | o[5]) == 0
    }

    /// Group bit set (includes broadcast)
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// All octets 0xFF
    pub const fn is_broadcast(&self) -> bool {
        let o = self.0;
        (o[0] & o[1] & o[2] & o[3] & o[4] & o[5]) == 0xFF
    }

    /// Usable as a unicast station address: not zero, not multicast/broadcast
    pub const fn is_valid(&self) -> bool {
        !self.is_zero() && !self.is_multicast()
    }

    /// Split into three big-endian 16-bit words, high word first
    pub const fn wol_words(&self) -> [u16; 3] {
        let o = self.0;
        [
            u16::from_be_bytes([o[0], o[1]]),
            u16::from_be_bytes([o[2], o[3]]),
            u16::from_be_bytes([o[4], o[5]]),
        ]
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

// =============================================================================
// Device Handle
// =============================================================================

/// One PHY on a shared MDIO bus
///
/// Holds a shared reference to the bus; the bus lock stays inside
/// [`MiiBus`]. Concurrent use of the same `PhyDevice` is prevented by
/// `&mut self` on every method that updates it.
#[derive(Debug)]
pub struct PhyDevice<'bus, B> {
    bus: &'bus MiiBus<B>,
    addr: u8,
    supported: Features,
    advertising: Features,
    platform_data: Option<PlatformData>,
    attached: Option<MacAddress>,
    link: Option<LinkStatus>,
}

impl<'bus, B: MdioBus> PhyDevice<'bus, B> {
    /// Attach a PHY handle at `addr` on `bus`
    pub fn new(bus: &'bus MiiBus<B>, addr: u8) -> ConfigResult<Self> {
        if addr > MAX_PHY_ADDR {
            return Err(crate::error::ConfigError::InvalidPhyAddress);
        }
        Ok(Self {
            bus,
            addr,
            supported: Features::EMPTY,
            advertising: Features::EMPTY,
            platform_data: None,
            attached: None,
            link: None,
        })
    }

    /// Supply the board description consumed by `config_init`
    #[must_use]
    pub fn with_platform_data(mut self, platform_data: PlatformData) -> Self {
        self.platform_data = Some(platform_data);
        self
    }

    /// Record the MAC address of the network interface using this PHY
    pub fn attach_interface(&mut self, mac: MacAddress) {
        self.attached = Some(mac);
    }

    /// Forget the attached interface
    pub fn detach_interface(&mut self) {
        self.attached = None;
    }

    /// PHY address (0-31)
    pub fn address(&self) -> u8 {
        self.addr
    }

    /// The bus this PHY lives on
    pub fn bus(&self) -> &'bus MiiBus<B> {
        self.bus
    }

    /// Capabilities derived by the last `config_init`
    pub fn supported(&self) -> Features {
        self.supported
    }

    /// Capabilities advertised during auto-negotiation
    pub fn advertising(&self) -> Features {
        self.advertising
    }

    /// Restrict the advertised modes to a subset of what is supported
    pub fn set_advertising(&mut self, advertising: Features) {
        self.advertising = advertising & self.supported;
    }

    /// Board description, if one was supplied
    pub fn platform_data(&self) -> Option<&PlatformData> {
        self.platform_data.as_ref()
    }

    /// MAC address of the attached interface, if any
    pub fn attached_interface(&self) -> Option<MacAddress> {
        self.attached
    }

    /// Link resolved by the last `read_status`
    pub fn link(&self) -> Option<LinkStatus> {
        self.link
    }

    /// Read a Clause 22 register of this PHY
    pub fn read(&self, reg_addr: u8) -> Result<u16> {
        self.bus.read(self.addr, reg_addr)
    }

    /// Write a Clause 22 register of this PHY
    pub fn write(&self, reg_addr: u8, value: u16) -> Result<()> {
        self.bus.write(self.addr, reg_addr, value)
    }

    /// Read an MMD register through the Clause 22 window
    pub fn read_mmd(&self, devad: u8, reg: u16) -> Result<u16> {
        mdio::mmd::read(self.bus, self.addr, devad, reg)
    }

    /// Write an MMD register through the Clause 22 window
    pub fn write_mmd(&self, devad: u8, reg: u16, value: u16) -> Result<()> {
        mdio::mmd::write(self.bus, self.addr, devad, reg, value)
    }

    /// Read the 32-bit identifier: `(PHYIDR1 << 16) | PHYIDR2`
    pub fn read_id(&self) -> Result<u32> {
        let id1 = self.read(phy_reg::PHYIDR1)? as u32;
        let id2 = self.read(phy_reg::PHYIDR2)? as u32;
        Ok((id1 << 16) | id2)
    }

    pub(crate) fn set_features(&mut self, features: Features) {
        self.supported = features;
        self.advertising = features;
    }

    pub(crate) fn set_link(&mut self, link: Option<LinkStatus>) {
        self.link = link;
    }
}
