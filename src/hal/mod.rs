//! Hardware Abstraction Layer
//!
//! # Modules
//!
//! - [`mdio`]: MDIO transport trait, the locked shared bus, MMD window access
//!
//! # Delay Integration
//!
//! Types that require delays (PHY hardware reset) use
//! `embedded_hal::delay::DelayNs` directly. Pass any delay implementation
//! from your HAL.

pub mod mdio;

// Re-export commonly used types
pub use mdio::{MdioBus, MiiBus};
