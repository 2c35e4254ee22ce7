//! Chain-level configuration.

mod hardfork;
pub use hardfork::HardForkConfig;
