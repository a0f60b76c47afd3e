//! Testing utilities and mock implementations
//!
//! Mock implementations for testing the PHY driver on the host without
//! hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::vec::Vec;

use crate::error::{IoError, Result};
use crate::hal::mdio::MdioBus;

use crate::internal::phy_regs::at803x::reg as at_reg;
use crate::internal::phy_regs::standard::{bmsr, estatus, mmd, phy_reg};

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Window state for the Clause 22 MMD access registers of one PHY
#[derive(Debug, Default, Clone, Copy)]
struct MmdWindow {
    devad: u8,
    reg: u16,
    data_mode: bool,
}

/// Mock MDIO bus for testing PHY drivers without hardware
///
/// Besides the plain register map, the mock emulates the two windowed
/// register spaces the AT803x driver uses: the IEEE MMD window
/// (registers 13/14) and the Atheros debug port (registers 0x1D/0x1E).
/// Reads and writes of specific registers can be made to fail.
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.set_register(0, 0x01, 0x796D);
/// mdio.fail_reads(0, 0x0F);
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// Debug port registers: (phy_addr, debug_reg) -> value
    debug: RefCell<HashMap<(u8, u16), u16>>,
    /// MMD registers: (phy_addr, devad, reg) -> value
    mmd: RefCell<HashMap<(u8, u8, u16), u16>>,
    /// MMD window state per PHY
    mmd_window: RefCell<HashMap<u8, MmdWindow>>,
    /// Record of writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Record of reads: (phy_addr, reg_addr)
    read_log: RefCell<Vec<(u8, u8)>>,
    /// Registers whose reads fail
    failing_reads: RefCell<HashSet<(u8, u8)>>,
    /// Registers whose writes fail
    failing_writes: RefCell<HashSet<(u8, u8)>>,
    /// Whether the bus should report as busy
    busy: RefCell<bool>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Set a debug port register value
    pub fn set_debug(&self, phy_addr: u8, debug_reg: u16, value: u16) {
        self.debug.borrow_mut().insert((phy_addr, debug_reg), value);
    }

    /// Get a debug port register value
    pub fn get_debug(&self, phy_addr: u8, debug_reg: u16) -> Option<u16> {
        self.debug.borrow().get(&(phy_addr, debug_reg)).copied()
    }

    /// Get an MMD register value
    pub fn get_mmd(&self, phy_addr: u8, devad: u8, reg: u16) -> Option<u16> {
        self.mmd.borrow().get(&(phy_addr, devad, reg)).copied()
    }

    /// Get all writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Get all reads that have been made
    pub fn get_reads(&self) -> Vec<(u8, u8)> {
        self.read_log.borrow().clone()
    }

    /// Make every read of a register fail with `IoError::PhyError`
    pub fn fail_reads(&self, phy_addr: u8, reg_addr: u8) {
        self.failing_reads.borrow_mut().insert((phy_addr, reg_addr));
    }

    /// Make every write of a register fail with `IoError::BusError`
    pub fn fail_writes(&self, phy_addr: u8, reg_addr: u8) {
        self.failing_writes.borrow_mut().insert((phy_addr, reg_addr));
    }

    /// Set the busy flag
    pub fn set_busy(&self, busy: bool) {
        *self.busy.borrow_mut() = busy;
    }

    /// Setup for an AR8035 with its reset-default status registers
    pub fn setup_at8035(&self, phy_addr: u8) {
        self.set_register(phy_addr, phy_reg::PHYIDR1, 0x004D);
        self.set_register(phy_addr, phy_reg::PHYIDR2, 0xD072);

        let bmsr_value = bmsr::TX_FD_CAPABLE
            | bmsr::TX_HD_CAPABLE
            | bmsr::T10_FD_CAPABLE
            | bmsr::T10_HD_CAPABLE
            | bmsr::ESTATUS
            | bmsr::MF_PREAMBLE_SUPP
            | bmsr::AN_ABILITY
            | bmsr::EXT_CAPABLE;
        self.set_register(phy_addr, phy_reg::BMSR, bmsr_value);
        self.set_register(phy_addr, phy_reg::ESTATUS, estatus::T_1000_FULL | estatus::T_1000_HALF);

        self.set_register(phy_addr, phy_reg::BMCR, 0x1140);
        self.set_register(phy_addr, phy_reg::ANAR, 0x01E1);
        self.set_register(phy_addr, phy_reg::ANLPAR, 0x0000);

        // Debug register reset values from the datasheet
        self.set_debug(phy_addr, 0x00, 0x02EE);
        self.set_debug(phy_addr, 0x05, 0x2D47);
    }

    fn mmd_write(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        let mut windows = self.mmd_window.borrow_mut();
        let window = windows.entry(phy_addr).or_default();
        if reg_addr == phy_reg::MMD_CTRL {
            window.devad = (value & mmd::CTRL_DEVAD_MASK) as u8;
            window.data_mode = value & mmd::CTRL_FUNC_DATA != 0;
        } else if window.data_mode {
            self.mmd
                .borrow_mut()
                .insert((phy_addr, window.devad, window.reg), value);
        } else {
            window.reg = value;
        }
    }

    fn mmd_read(&self, phy_addr: u8) -> u16 {
        let window = self
            .mmd_window
            .borrow()
            .get(&phy_addr)
            .copied()
            .unwrap_or_default();
        if window.data_mode {
            self.get_mmd(phy_addr, window.devad, window.reg).unwrap_or(0)
        } else {
            window.reg
        }
    }

    fn debug_selected(&self, phy_addr: u8) -> u16 {
        self.get_register(phy_addr, at_reg::DEBUG_ADDR).unwrap_or(0)
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        self.read_log.borrow_mut().push((phy_addr, reg_addr));

        if self.failing_reads.borrow().contains(&(phy_addr, reg_addr)) {
            return Err(IoError::PhyError.into());
        }

        let value = match reg_addr {
            phy_reg::MMD_DATA => self.mmd_read(phy_addr),
            at_reg::DEBUG_DATA => {
                let selected = self.debug_selected(phy_addr);
                self.get_debug(phy_addr, selected).unwrap_or(0)
            }
            _ => self.get_register(phy_addr, reg_addr).unwrap_or(0),
        };
        Ok(value)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        self.write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));

        if self.failing_writes.borrow().contains(&(phy_addr, reg_addr)) {
            return Err(IoError::BusError.into());
        }

        match reg_addr {
            phy_reg::MMD_CTRL | phy_reg::MMD_DATA => self.mmd_write(phy_addr, reg_addr, value),
            at_reg::DEBUG_DATA => {
                let selected = self.debug_selected(phy_addr);
                self.set_debug(phy_addr, selected, value);
            }
            _ => {}
        }

        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);

        Ok(())
    }

    fn is_busy(&self) -> bool {
        *self.busy.borrow()
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }

    /// Get total microseconds that were "delayed"
    pub fn total_us(&self) -> u64 {
        self.total_ns() / 1_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += ns as u64;
    }
}

// =============================================================================
// Mock Output Pin
// =============================================================================

/// Pin error used by [`MockPin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Mock output pin recording every level change (`true` = high)
#[derive(Debug, Default)]
pub struct MockPin {
    pub levels: Vec<bool>,
    pub fail: bool,
}

impl MockPin {
    /// Create a pin whose writes succeed
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pin whose writes always fail
    pub fn failing() -> Self {
        Self {
            levels: Vec::new(),
            fail: true,
        }
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = MockPinError;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        if self.fail {
            return Err(MockPinError);
        }
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        if self.fail {
            return Err(MockPinError);
        }
        self.levels.push(true);
        Ok(())
    }
}

// =============================================================================
// Test Assertions
// =============================================================================

/// Assert that a register was written with a specific value
#[macro_export]
macro_rules! assert_reg_written {
    ($mdio:expr, $phy:expr, $reg:expr, $value:expr) => {
        let writes = $mdio.get_writes();
        assert!(
            writes
                .iter()
                .any(|w| w.0 == $phy && w.1 == $reg && w.2 == $value),
            "Expected write to PHY {} reg {} with value 0x{:04X}, but got: {:?}",
            $phy,
            $reg,
            $value,
            writes
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;

    #[test]
    fn mock_mdio_read_write() {
        let mut mdio = MockMdioBus::new();

        assert_eq!(mdio.read(0, 1).unwrap(), 0);

        mdio.set_register(0, 1, 0x1234);
        assert_eq!(mdio.read(0, 1).unwrap(), 0x1234);

        mdio.write(0, 1, 0x5678).unwrap();
        assert_eq!(mdio.read(0, 1).unwrap(), 0x5678);

        assert_eq!(mdio.get_writes(), vec![(0, 1, 0x5678)]);
        assert_eq!(mdio.get_reads().len(), 3);
    }

    #[test]
    fn mock_mdio_failure_injection() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_reads(0, 1);
        mdio.fail_writes(0, 2);

        assert_eq!(mdio.read(0, 1), Err(IoError::PhyError.into()));
        assert_eq!(mdio.write(0, 2, 1), Err(IoError::BusError.into()));
        assert_eq!(mdio.get_register(0, 2), None);
    }

    #[test]
    fn mock_debug_port_emulation() {
        let mut mdio = MockMdioBus::new();
        mdio.set_debug(0, 0x05, 0xAAAA);

        mdio.write(0, at_reg::DEBUG_ADDR, 0x05).unwrap();
        assert_eq!(mdio.read(0, at_reg::DEBUG_DATA).unwrap(), 0xAAAA);

        mdio.write(0, at_reg::DEBUG_DATA, 0x5555).unwrap();
        assert_eq!(mdio.get_debug(0, 0x05), Some(0x5555));
    }

    #[test]
    fn mock_mmd_emulation() {
        let mut mdio = MockMdioBus::new();

        mdio.write(2, phy_reg::MMD_CTRL, 0x0003).unwrap();
        mdio.write(2, phy_reg::MMD_DATA, 0x804A).unwrap();
        mdio.write(2, phy_reg::MMD_CTRL, 0x4003).unwrap();
        mdio.write(2, phy_reg::MMD_DATA, 0x0011).unwrap();

        assert_eq!(mdio.get_mmd(2, 3, 0x804A), Some(0x0011));
        assert_eq!(mdio.read(2, phy_reg::MMD_DATA).unwrap(), 0x0011);
    }

    #[test]
    fn mock_at8035_setup() {
        let mut mdio = MockMdioBus::new();
        mdio.setup_at8035(0);

        assert_eq!(mdio.read(0, phy_reg::PHYIDR1).unwrap(), 0x004D);
        assert_eq!(mdio.read(0, phy_reg::PHYIDR2).unwrap(), 0xD072);
        assert!(mdio.read(0, phy_reg::BMSR).unwrap() & bmsr::ESTATUS != 0);
    }

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();

        embedded_hal::delay::DelayNs::delay_us(&mut delay, 10);
        embedded_hal::delay::DelayNs::delay_ns(&mut delay, 500);

        assert_eq!(delay.total_ns(), 10_500);
        assert_eq!(delay.total_us(), 10);
    }
}
