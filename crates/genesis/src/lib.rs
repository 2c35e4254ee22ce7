#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

mod chain;
pub use chain::HardForkConfig;

mod rollup;
pub use rollup::{OptimismConfig, RollupConfig};
