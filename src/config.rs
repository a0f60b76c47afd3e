//! Configuration types for the AT803x PHY driver
//!
//! [`PlatformData`] is the static board description consumed once by
//! `config_init`. [`Speed`] and [`Duplex`] describe a resolved link.

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    Mbps100,
    /// 1000 Mbps
    #[default]
    Mbps1000,
}

impl Speed {
    /// Speed in megabits per second
    pub const fn mbps(self) -> u16 {
        match self {
            Speed::Mbps10 => 10,
            Speed::Mbps100 => 100,
            Speed::Mbps1000 => 1000,
        }
    }
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    #[default]
    Full,
}

/// Board-level PHY configuration
///
/// Each flag is independent. The driver reads the record once during
/// initialization and never modifies it.
///
/// # Example
///
/// ```ignore
/// let pdata = PlatformData::new()
///     .with_disable_smarteee(true)
///     .with_rgmii_rx_delay(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlatformData {
    /// Turn off SmartEEE (Atheros' MAC-transparent Energy Efficient Ethernet)
    pub disable_smarteee: bool,
    /// Insert the PHY-side RGMII receive clock delay
    pub enable_rgmii_rx_delay: bool,
    /// Insert the PHY-side RGMII transmit clock delay
    pub enable_rgmii_tx_delay: bool,
}

impl PlatformData {
    /// All flags off: SmartEEE left as is, both clock delays cleared
    pub const fn new() -> Self {
        Self {
            disable_smarteee: false,
            enable_rgmii_rx_delay: false,
            enable_rgmii_tx_delay: false,
        }
    }

    /// RGMII with internal delays on both paths ("rgmii-id")
    pub const fn rgmii_id() -> Self {
        Self::new().with_rgmii_rx_delay(true).with_rgmii_tx_delay(true)
    }

    /// Set whether SmartEEE is disabled at init
    #[must_use]
    pub const fn with_disable_smarteee(mut self, disable: bool) -> Self {
        self.disable_smarteee = disable;
        self
    }

    /// Set the RGMII receive clock delay
    #[must_use]
    pub const fn with_rgmii_rx_delay(mut self, enable: bool) -> Self {
        self.enable_rgmii_rx_delay = enable;
        self
    }

    /// Set the RGMII transmit clock delay
    #[must_use]
    pub const fn with_rgmii_tx_delay(mut self, enable: bool) -> Self {
        self.enable_rgmii_tx_delay = enable;
        self
    }
}
