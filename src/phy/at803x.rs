//! AT803x PHY Driver
//!
//! Driver for the Qualcomm Atheros AR8030 and AR8035 Gigabit Ethernet PHYs.
//!
//! Besides the standard Clause 22 registers the driver touches three
//! vendor areas:
//!
//! - the **debug port**, a windowed register space behind registers
//!   0x1D (offset) and 0x1E (data), which holds the RGMII clock delay bits;
//! - the **PCS MMD**, where the Wake-on-LAN station address and the SmartEEE
//!   control live;
//! - the **interrupt registers** 0x12/0x13.
//!
//! Windowed accesses select and then access. Both steps run under the bus
//! lock so that another PHY on the same bus cannot move the window between
//! them.
//!
//! # Example
//!
//! ```ignore
//! use ph_at803x::phy::{at803x, Driver, At8035, PhyDevice};
//! use ph_at803x::{MiiBus, PlatformData};
//!
//! static BUS: MiiBus<BoardSmi> = MiiBus::new(BoardSmi::new());
//!
//! at803x::hardware_reset(&mut reset_pin, &mut delay)?;
//!
//! let mut phy = PhyDevice::new(&BUS, 4)?
//!     .with_platform_data(PlatformData::rgmii_id());
//! phy.attach_interface(mac);
//!
//! let driver = at803x::probe(&phy)?;
//! At8035::config_init(&mut phy)?;
//! At8035::config_aneg(&mut phy)?;
//!
//! if let Some(link) = At8035::read_status(&mut phy)? {
//!     mac.set_speed(link.speed);
//! }
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::device::{Features, PhyDevice};
use super::generic::{DeviceId, Driver, DriverInfo, flags};
use crate::error::{ConfigError, Result, best_effort};
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::at803x::{debug as dbg, intr, mmd as vendor_mmd, phy_id, reg, timing};
use crate::internal::phy_regs::standard::{bmsr, estatus, mmd, phy_reg};

// =============================================================================
// Debug Port
// =============================================================================

/// Locked access to the debug register window
///
/// Each call is one critical section: select, read, write back.
pub mod debug {
    use super::*;

    /// Apply `f` to a debug register and write the result back
    ///
    /// A failed read is treated as [`READ_FAILED`](dbg::READ_FAILED) and the
    /// sequence continues. The write-back always happens and its outcome is
    /// discarded. Returns the value written.
    pub fn update<B: MdioBus>(dev: &PhyDevice<'_, B>, debug_reg: u16, f: impl FnOnce(u16) -> u16) -> u16 {
        let addr = dev.address();
        dev.bus().transaction(|raw| {
            best_effort(raw.write(addr, reg::DEBUG_ADDR, debug_reg));

            let value = match raw.read(addr, reg::DEBUG_DATA) {
                Ok(value) => value,
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!(
                        "AT803x debug reg {=u16:#x} read failed ({}), using sentinel",
                        debug_reg,
                        _e
                    );
                    dbg::READ_FAILED
                }
            };

            let new = f(value);
            best_effort(raw.write(addr, reg::DEBUG_DATA, new));
            new
        })
    }

    /// Clear then set bits in a debug register: `(v & !clear) | set`
    pub fn rmw<B: MdioBus>(dev: &PhyDevice<'_, B>, debug_reg: u16, clear: u16, set: u16) -> u16 {
        update(dev, debug_reg, |value| (value & !clear) | set)
    }

    /// Set bits in a debug register
    pub fn set<B: MdioBus>(dev: &PhyDevice<'_, B>, debug_reg: u16, bits: u16) -> u16 {
        rmw(dev, debug_reg, 0, bits)
    }

    /// Clear bits in a debug register
    pub fn clear<B: MdioBus>(dev: &PhyDevice<'_, B>, debug_reg: u16, bits: u16) -> u16 {
        rmw(dev, debug_reg, bits, 0)
    }
}

// =============================================================================
// Initialization Steps
// =============================================================================

/// BMSR ability bits and the feature each one maps to
const BMSR_FEATURES: [(u16, Features); 5] = [
    (bmsr::AN_ABILITY, Features::AUTONEG),
    (bmsr::TX_FD_CAPABLE, Features::BASET_100_FULL),
    (bmsr::TX_HD_CAPABLE, Features::BASET_100_HALF),
    (bmsr::T10_FD_CAPABLE, Features::BASET_10_FULL),
    (bmsr::T10_HD_CAPABLE, Features::BASET_10_HALF),
];

/// Derive the capability set from BMSR (and ESTATUS if present)
///
/// Stores the result as both supported and advertised modes.
pub fn derive_features<B: MdioBus>(dev: &mut PhyDevice<'_, B>) -> Result<Features> {
    let mut features = Features::MEDIA_BASELINE;

    let bmsr_val = dev.read(phy_reg::BMSR)?;
    for (bit, feature) in BMSR_FEATURES {
        if bmsr_val & bit != 0 {
            features |= feature;
        }
    }

    if bmsr_val & bmsr::ESTATUS != 0 {
        let estatus_val = dev.read(phy_reg::ESTATUS)?;
        if estatus_val & estatus::T_1000_FULL != 0 {
            features |= Features::BASET_1000_FULL;
        }
        if estatus_val & estatus::T_1000_HALF != 0 {
            features |= Features::BASET_1000_HALF;
        }
    }

    dev.set_features(features);
    Ok(features)
}

/// Program the attached interface's MAC address as the WOL station address
///
/// Returns `false` without touching the bus when no interface is attached
/// or its address is not a valid unicast address. Each 16-bit word is its
/// own locked MMD sequence. All four frames of a word are issued even when
/// one of them fails; write errors are discarded.
pub fn set_wol_mac_addr<B: MdioBus>(dev: &PhyDevice<'_, B>) -> bool {
    let Some(mac) = dev.attached_interface() else {
        #[cfg(feature = "defmt")]
        defmt::debug!("AT803x: no attached interface, WOL address not set");
        return false;
    };

    if !mac.is_valid() {
        #[cfg(feature = "defmt")]
        defmt::debug!("AT803x: invalid MAC {}, WOL address not set", mac);
        return false;
    }

    let addr = dev.address();
    let devad = mmd::DEV_PCS as u16 & mmd::CTRL_DEVAD_MASK;
    for (offset, word) in vendor_mmd::WOL_ADDR_OFFSETS.into_iter().zip(mac.wol_words()) {
        let frames = [
            (phy_reg::MMD_CTRL, mmd::CTRL_FUNC_ADDR | devad),
            (phy_reg::MMD_DATA, offset),
            (phy_reg::MMD_CTRL, mmd::CTRL_FUNC_DATA | devad),
            (phy_reg::MMD_DATA, word),
        ];
        dev.bus().transaction(|raw| {
            for (reg_addr, value) in frames {
                best_effort(raw.write(addr, reg_addr, value));
            }
        });
    }
    true
}

/// Turn off SmartEEE and stop advertising EEE
pub fn disable_smarteee<B: MdioBus>(dev: &PhyDevice<'_, B>) {
    best_effort(dev.write_mmd(
        mmd::DEV_PCS,
        vendor_mmd::SMART_EEE_CTRL3,
        1 << vendor_mmd::SMART_EEE_CTRL3_LPI_TX_DELAY_SEL_SHIFT,
    ));
    best_effort(dev.write_mmd(mmd::DEV_AN, mmd::AN_EEE_ADV, 0));
}

/// Bring an AR8030/AR8035 into its operating configuration
///
/// Only a failure to read the capability registers is reported. WOL
/// programming, the interrupt writes, SmartEEE and the clock delays are
/// best effort.
pub fn config_init<B: MdioBus>(dev: &mut PhyDevice<'_, B>) -> Result<()> {
    let _features = derive_features(dev)?;
    #[cfg(feature = "defmt")]
    defmt::info!(
        "AT803x at {=u8}: features {=u32:#x}",
        dev.address(),
        _features.bits()
    );

    set_wol_mac_addr(dev);
    best_effort(dev.write(reg::INTR_ENABLE, intr::WOL));
    best_effort(dev.read(reg::INTR_STATUS));

    if let Some(pdata) = dev.platform_data().copied() {
        if pdata.disable_smarteee {
            disable_smarteee(dev);
        }

        if pdata.enable_rgmii_rx_delay {
            debug::set(dev, dbg::DBG0, dbg::DBG0_RGMII_RX_CLK_DELAY_EN);
        } else {
            debug::clear(dev, dbg::DBG0, dbg::DBG0_RGMII_RX_CLK_DELAY_EN);
        }

        if pdata.enable_rgmii_tx_delay {
            debug::set(dev, dbg::DBG5, dbg::DBG5_RGMII_TX_CLK_DELAY_EN);
        } else {
            debug::clear(dev, dbg::DBG5, dbg::DBG5_RGMII_TX_CLK_DELAY_EN);
        }
    }

    Ok(())
}

/// Pulse nRST low and wait for the PHY to come back
///
/// # Timing
/// - Reset pulse: 10ms (datasheet minimum)
/// - Recovery time: 5ms before the first MDIO access
pub fn hardware_reset<P: OutputPin, D: DelayNs>(reset_pin: &mut P, delay: &mut D) -> Result<()> {
    reset_pin.set_low().map_err(|_| ConfigError::GpioError)?;
    delay.delay_us(timing::RESET_PULSE_US);

    reset_pin.set_high().map_err(|_| ConfigError::GpioError)?;
    delay.delay_us(timing::RESET_RECOVERY_US);

    Ok(())
}

// =============================================================================
// Drivers
// =============================================================================

/// Match mask shared by both parts
const AT803X_ID_MASK: u32 = phy_id::MASK;

/// Atheros AR8035
#[derive(Debug, Clone, Copy, Default)]
pub struct At8035;

impl Driver for At8035 {
    const NAME: &'static str = "Atheros 8035 ethernet";
    const PHY_DEVICE_ID: DeviceId = DeviceId::new(phy_id::AT8035, AT803X_ID_MASK);
    const FEATURES: Features = Features::GBIT;
    const FLAGS: u32 = flags::HAS_INTERRUPT;

    fn config_init<B: MdioBus>(dev: &mut PhyDevice<'_, B>) -> Result<()> {
        config_init(dev)
    }
}

/// Atheros AR8030
#[derive(Debug, Clone, Copy, Default)]
pub struct At8030;

impl Driver for At8030 {
    const NAME: &'static str = "Atheros 8030 ethernet";
    const PHY_DEVICE_ID: DeviceId = DeviceId::new(phy_id::AT8030, AT803X_ID_MASK);
    const FEATURES: Features = Features::GBIT;
    const FLAGS: u32 = flags::HAS_INTERRUPT;

    fn config_init<B: MdioBus>(dev: &mut PhyDevice<'_, B>) -> Result<()> {
        config_init(dev)
    }
}

/// Every part this module drives
pub static AT803X_DRIVERS: [DriverInfo; 2] = [DriverInfo::of::<At8035>(), DriverInfo::of::<At8030>()];

/// Look up the driver entry for a PHY identifier
pub fn find_driver(id: u32) -> Option<&'static DriverInfo> {
    AT803X_DRIVERS.iter().find(|info| info.id.matches(id))
}

/// Read the PHY identifier and return the matching driver entry
pub fn probe<B: MdioBus>(dev: &PhyDevice<'_, B>) -> Result<&'static DriverInfo> {
    let id = dev.read_id()?;
    match find_driver(id) {
        Some(info) => Ok(info),
        None => {
            #[cfg(feature = "defmt")]
            defmt::warn!("unknown PHY id {=u32:#010x} at {=u8}", id, dev.address());
            Err(ConfigError::UnsupportedPhy.into())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
