//! MDIO (Management Data Input/Output) HAL
//!
//! Two layers live here:
//!
//! - [`MdioBus`]: the raw transport trait a board (or a test mock) implements.
//!   It knows nothing about locking.
//! - [`MiiBus`]: the shared bus handle. It owns the transport behind a
//!   critical-section lock and is handed to every PHY on the bus by shared
//!   reference. Single register accesses and multi-step windowed sequences
//!   both go through it, so no two transactions on the same bus interleave.
//!
//! The [`mmd`] helpers implement the IEEE 802.3 Clause 45 over Clause 22
//! indirect access (registers 13/14) as one locked sequence each.

use crate::error::{ConfigError, Result};
use crate::sync::CriticalSectionCell;

// =============================================================================
// MDIO Constants
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid register address (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;

/// Check a PHY/register address pair against the Clause 22 frame fields
pub const fn validate_address(phy_addr: u8, reg_addr: u8) -> core::result::Result<(), ConfigError> {
    if phy_addr > MAX_PHY_ADDR {
        return Err(ConfigError::InvalidPhyAddress);
    }
    if reg_addr > MAX_REG_ADDR {
        return Err(ConfigError::InvalidConfig);
    }
    Ok(())
}

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// This trait can be implemented by different backends (a MAC's SMI block,
/// a bit-banged GPIO pair, a test mock), allowing the PHY driver to work
/// with any of them. Implementations do not need to lock; [`MiiBus`] does.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;

    /// Check if the MDIO bus is busy
    fn is_busy(&self) -> bool;
}

// =============================================================================
// Shared Bus Handle
// =============================================================================

/// Shared MDIO bus with a bus-wide lock
///
/// One `MiiBus` exists per physical bus and outlives every PHY attached to
/// it. PHY handles borrow it immutably; the lock itself never leaves this
/// type.
///
/// # Example
///
/// ```ignore
/// static BUS: MiiBus<MySmi> = MiiBus::new(MySmi::new());
///
/// let mut phy = PhyDevice::new(&BUS, 4)?;
/// At8035::config_init(&mut phy)?;
/// ```
#[derive(Debug)]
pub struct MiiBus<B> {
    inner: CriticalSectionCell<B>,
}

impl<B> MiiBus<B> {
    /// Wrap a raw transport (const, suitable for static initialization).
    pub const fn new(bus: B) -> Self {
        Self {
            inner: CriticalSectionCell::new(bus),
        }
    }

    /// Consume the handle and return the raw transport.
    pub fn into_inner(self) -> B {
        self.inner.into_inner()
    }

    /// Inspect the transport under the bus lock.
    pub fn with_bus_ref<R>(&self, f: impl FnOnce(&B) -> R) -> R {
        self.inner.with_ref(f)
    }
}

impl<B: MdioBus> MiiBus<B> {
    /// Read one register as a single locked transaction.
    pub fn read(&self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        validate_address(phy_addr, reg_addr)?;
        self.inner.with(|bus| bus.read(phy_addr, reg_addr))
    }

    /// Write one register as a single locked transaction.
    pub fn write(&self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        validate_address(phy_addr, reg_addr)?;
        self.inner.with(|bus| bus.write(phy_addr, reg_addr, value))
    }

    /// Check whether the transport reports an operation in flight.
    pub fn is_busy(&self) -> bool {
        self.inner.with_ref(|bus| bus.is_busy())
    }

    /// Run a multi-step sequence with the bus lock held throughout.
    ///
    /// The closure receives the raw transport, so it cannot re-enter the lock.
    /// Windowed register helpers use this; drivers should go through those
    /// helpers instead of calling it directly.
    pub(crate) fn transaction<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        self.inner.with(f)
    }
}

// =============================================================================
// MMD Indirect Access (Clause 45 over Clause 22)
// =============================================================================

/// MMD register access through the Clause 22 window (registers 13/14)
pub mod mmd {
    use super::{MdioBus, MiiBus, validate_address};
    use crate::error::Result;
    use crate::internal::phy_regs::standard::{mmd, phy_reg};

    fn select<B: MdioBus>(bus: &mut B, phy_addr: u8, devad: u8, reg: u16) -> Result<()> {
        let devad = devad as u16 & mmd::CTRL_DEVAD_MASK;
        bus.write(phy_addr, phy_reg::MMD_CTRL, mmd::CTRL_FUNC_ADDR | devad)?;
        bus.write(phy_addr, phy_reg::MMD_DATA, reg)?;
        bus.write(phy_addr, phy_reg::MMD_CTRL, mmd::CTRL_FUNC_DATA | devad)
    }

    /// Read an MMD register as one locked sequence.
    pub fn read<B: MdioBus>(bus: &MiiBus<B>, phy_addr: u8, devad: u8, reg: u16) -> Result<u16> {
        validate_address(phy_addr, 0)?;
        bus.transaction(|raw| {
            select(raw, phy_addr, devad, reg)?;
            raw.read(phy_addr, phy_reg::MMD_DATA)
        })
    }

    /// Write an MMD register as one locked sequence.
    ///
    /// The four frames are: device address, register offset, data function
    /// select, value.
    pub fn write<B: MdioBus>(
        bus: &MiiBus<B>,
        phy_addr: u8,
        devad: u8,
        reg: u16,
        value: u16,
    ) -> Result<()> {
        validate_address(phy_addr, 0)?;
        bus.transaction(|raw| {
            select(raw, phy_addr, devad, reg)?;
            raw.write(phy_addr, phy_reg::MMD_DATA, value)
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]
mod tests {
    extern crate std;

    use super::*;
    use crate::error::{Error, IoError};
    use crate::internal::phy_regs::standard::phy_reg;
    use crate::test_utils::MockMdioBus;
    use std::vec;

    #[test]
    fn validate_address_limits() {
        assert!(validate_address(0, 0).is_ok());
        assert!(validate_address(31, 31).is_ok());
        assert_eq!(validate_address(32, 0), Err(ConfigError::InvalidPhyAddress));
        assert_eq!(validate_address(0, 32), Err(ConfigError::InvalidConfig));
    }

    #[test]
    fn mii_bus_read_write_pass_through() {
        let bus = MiiBus::new(MockMdioBus::new());
        bus.write(3, phy_reg::BMCR, 0x1140).unwrap();
        assert_eq!(bus.read(3, phy_reg::BMCR).unwrap(), 0x1140);
        assert_eq!(bus.into_inner().get_writes(), vec![(3, phy_reg::BMCR, 0x1140)]);
    }

    #[test]
    fn mii_bus_rejects_bad_addresses() {
        let bus = MiiBus::new(MockMdioBus::new());
        assert_eq!(
            bus.read(40, phy_reg::BMSR),
            Err(Error::Config(ConfigError::InvalidPhyAddress))
        );
        assert_eq!(
            bus.write(0, 40, 0),
            Err(Error::Config(ConfigError::InvalidConfig))
        );
        assert!(bus.into_inner().get_writes().is_empty());
    }

    #[test]
    fn mii_bus_propagates_transport_errors() {
        let mock = MockMdioBus::new();
        mock.fail_reads(0, phy_reg::BMSR);
        let bus = MiiBus::new(mock);
        assert_eq!(bus.read(0, phy_reg::BMSR), Err(Error::Io(IoError::PhyError)));
    }

    #[test]
    fn mii_bus_reports_busy() {
        let mock = MockMdioBus::new();
        mock.set_busy(true);
        let bus = MiiBus::new(mock);
        assert!(bus.is_busy());
    }

    #[test]
    fn mmd_write_frame_sequence() {
        let bus = MiiBus::new(MockMdioBus::new());
        mmd::write(&bus, 1, 3, 0x805D, 0x1000).unwrap();

        assert_eq!(
            bus.into_inner().get_writes(),
            vec![
                (1, phy_reg::MMD_CTRL, 0x0003),
                (1, phy_reg::MMD_DATA, 0x805D),
                (1, phy_reg::MMD_CTRL, 0x4003),
                (1, phy_reg::MMD_DATA, 0x1000),
            ]
        );
    }

    #[test]
    fn mmd_round_trip_through_mock() {
        let bus = MiiBus::new(MockMdioBus::new());
        mmd::write(&bus, 0, 7, 0x003C, 0x0006).unwrap();
        assert_eq!(mmd::read(&bus, 0, 7, 0x003C).unwrap(), 0x0006);
        bus.with_bus_ref(|mock| assert_eq!(mock.get_mmd(0, 7, 0x003C), Some(0x0006)));
    }

    #[test]
    fn mmd_write_stops_on_first_error() {
        let mock = MockMdioBus::new();
        mock.fail_writes(0, phy_reg::MMD_DATA);
        let bus = MiiBus::new(mock);

        assert!(mmd::write(&bus, 0, 3, 0x804A, 0xAABB).is_err());
        assert_eq!(
            bus.into_inner().get_writes(),
            vec![(0, phy_reg::MMD_CTRL, 0x0003), (0, phy_reg::MMD_DATA, 0x804A)]
        );
    }
}
