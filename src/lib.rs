//! AT803x PHY Driver
//!
//! A `no_std`, `no_alloc` Rust driver for the Qualcomm Atheros AR8030/AR8035
//! Ethernet PHYs, plus the nl80211 implicit-ACK (`iack`) command helpers.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! 1. **Bus Layer** ([`hal`]): the [`MdioBus`] transport trait and the shared,
//!    locked [`MiiBus`], including Clause 45 over Clause 22 MMD access
//! 2. **PHY Layer** ([`phy`]): device handle, generic negotiation, AT803x driver
//! 3. **Wireless Commands** ([`nl80211`]): `set iack` / `get iack` framing
//!
//! ## Bus Locking
//!
//! Every PHY on a bus shares one [`MiiBus`]. Single register accesses and
//! windowed sequences (debug port select/read/write, MMD select/access) are
//! each one critical section, so PHYs on the same bus can be configured from
//! different contexts without interleaving frames.
//!
//! # Supported PHY Chips
//!
//! - [`At8035`]: Atheros AR8035
//! - [`At8030`]: Atheros AR8030
//!
//! Additional PHY drivers can be added by implementing [`Driver`].
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for error types and driver logging
//!
//! # Example
//!
//! ```ignore
//! use ph_at803x::{At8035, Driver, MacAddress, MiiBus, PhyDevice, PlatformData};
//!
//! static BUS: MiiBus<BoardSmi> = MiiBus::new(BoardSmi::new());
//!
//! let mut phy = PhyDevice::new(&BUS, 0)?
//!     .with_platform_data(PlatformData::rgmii_id().with_disable_smarteee(true));
//! phy.attach_interface(MacAddress::new([0x02, 0x00, 0x00, 0x12, 0x34, 0x56]));
//!
//! At8035::config_init(&mut phy)?;
//! At8035::config_aneg(&mut phy)?;
//!
//! if let Some(link) = At8035::read_status(&mut phy)? {
//!     mac.set_speed(link.speed);
//!     mac.set_duplex(link.duplex);
//! }
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod config;
pub mod error;
pub mod hal;
pub mod nl80211;
pub mod phy;
pub mod sync;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Duplex, PlatformData, Speed};
pub use error::{ConfigError, ConfigResult, Error, IoError, IoResult, Result};
pub use hal::{MdioBus, MiiBus};

// Re-export PHY types
pub use phy::{At8030, At8035, DeviceId, Driver, Features, LinkStatus, MacAddress, PhyDevice};
