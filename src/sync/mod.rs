//! Synchronization support
//!
//! The only shared resource in this crate is the MDIO bus. Every PHY on a
//! bus serializes its transactions through one [`CriticalSectionCell`] owned
//! by [`MiiBus`](crate::hal::mdio::MiiBus).
//!
//! The cell is built on `critical_section::Mutex`, so it works from thread
//! context and interrupt handlers alike. On the host (tests) the
//! `critical-section/std` implementation backs it with a global mutex.

mod primitives;

pub use primitives::CriticalSectionCell;
