#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
extern crate tracing;

pub mod constants;

mod attributes;
pub use attributes::{
    L1Attributes, L1AttributesBedrock, L1AttributesEcotone, L1AttributesKind, L1BlockValuesEcotone,
    L1FeeScalars,
};

mod cost;
pub use cost::{L1CostFn, l1_cost_bedrock, l1_cost_ecotone};

mod cost_data;
pub use cost_data::RollupCostData;

mod error;
pub use error::L1FeeError;

mod hardfork;
pub use hardfork::{
    WBNB_NAME, WBNB_NAME_SLOT, WBNB_SYMBOL, WBNB_SYMBOL_SLOT, apply_pre_contract_hard_fork,
};

mod oracle;
pub use oracle::{L1CostFunc, new_l1_cost_fn};

mod params;
pub use params::{L1GasParams, extract_l1_gas_params};

mod storage;
pub use storage::{DatabaseStorage, L1BlockStorage, StateMutator};
