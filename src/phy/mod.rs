//! Ethernet PHY Drivers
//!
//! This module provides the PHY device handle, a generic driver trait with
//! IEEE 802.3 default behavior, and the AT803x driver.
//!
//! # Architecture
//!
//! The PHY layer talks to hardware only through a shared [`MiiBus`]. A
//! [`PhyDevice`] names one PHY on that bus; drivers are zero-sized types
//! implementing [`Driver`] whose functions take the device handle.
//!
//! - Several PHYs can share one bus and one lock
//! - Windowed register spaces (MMD, AT803x debug port) are accessed as a
//!   single locked sequence
//! - Everything can be tested with a mock MDIO transport
//!
//! # Supported PHY Chips
//!
//! - [`At8035`]: Qualcomm Atheros AR8035 (RGMII, gigabit)
//! - [`At8030`]: Qualcomm Atheros AR8030
//!
//! # Example
//!
//! ```ignore
//! use ph_at803x::phy::{At8035, Driver, PhyDevice};
//! use ph_at803x::MiiBus;
//!
//! let bus = MiiBus::new(board_smi);
//! let mut phy = PhyDevice::new(&bus, 0)?;
//!
//! At8035::config_init(&mut phy)?;
//! At8035::config_aneg(&mut phy)?;
//!
//! loop {
//!     if let Some(link) = At8035::read_status(&mut phy)? {
//!         println!("Link up: {:?}", link);
//!         break;
//!     }
//! }
//! ```
//!
//! [`MiiBus`]: crate::hal::MiiBus

pub mod at803x;
pub mod device;
pub mod generic;

pub use at803x::{AT803X_DRIVERS, At8030, At8035};
pub use device::{Features, MacAddress, PhyDevice};
pub use generic::{DeviceId, Driver, DriverInfo, LinkStatus, genphy};

/// Standard IEEE 802.3 register addresses and bit definitions
pub use crate::internal::phy_regs::standard::{anar, bmcr, bmsr, ctrl1000, estatus, phy_reg, stat1000};

/// AT803x vendor register definitions
pub mod regs {
    pub use crate::internal::phy_regs::at803x::*;
}
