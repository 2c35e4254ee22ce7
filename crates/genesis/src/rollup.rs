//! Rollup Config Types

use crate::HardForkConfig;
use alloy_hardforks::{EthereumHardfork, EthereumHardforks, ForkCondition};
use alloy_op_hardforks::{OpHardfork, OpHardforks};

/// The EIP-1559 parameters of an OP Stack chain.
///
/// The L1 fee oracle does not read these, but their presence marks the chain as an OP Stack chain.
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimismConfig {
    /// The EIP-1559 elasticity multiplier.
    pub eip1559_elasticity: u64,
    /// The EIP-1559 base fee max change denominator.
    pub eip1559_denominator: u64,
}

/// The Rollup configuration.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct RollupConfig {
    /// The Optimism parameters. `None` for chains that are not OP Stack chains.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub optimism: Option<OptimismConfig>,
    /// The hardfork activation times.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub hardforks: HardForkConfig,
}

impl RollupConfig {
    /// Returns true if the chain is an OP Stack chain.
    pub const fn is_optimism(&self) -> bool {
        self.optimism.is_some()
    }

    /// Returns true if Regolith is active at the given timestamp.
    ///
    /// Always false on chains that are not OP Stack chains.
    pub fn is_regolith_active(&self, timestamp: u64) -> bool {
        self.is_optimism() && self.is_regolith_active_at_timestamp(timestamp)
    }

    /// Returns true if Ecotone is active at the given timestamp.
    ///
    /// Always false on chains that are not OP Stack chains.
    pub fn is_ecotone_active(&self, timestamp: u64) -> bool {
        self.is_optimism() && self.is_ecotone_active_at_timestamp(timestamp)
    }

    /// Returns true if the pre-contract hard fork is active at the given timestamp.
    pub fn is_pre_contract_active(&self, timestamp: u64) -> bool {
        self.hardforks.pre_contract_time.is_some_and(|t| timestamp >= t)
    }

    /// Returns true if the block at `timestamp` is the first block with the pre-contract hard fork
    /// active, given the timestamp of its parent.
    pub fn is_on_pre_contract_fork(&self, timestamp: u64, parent_timestamp: u64) -> bool {
        self.is_pre_contract_active(timestamp) && !self.is_pre_contract_active(parent_timestamp)
    }
}

impl EthereumHardforks for RollupConfig {
    fn ethereum_fork_activation(&self, fork: EthereumHardfork) -> ForkCondition {
        if fork <= EthereumHardfork::Paris {
            // Bedrock activates all hardforks up to Paris.
            self.op_fork_activation(OpHardfork::Bedrock)
        } else if fork <= EthereumHardfork::Cancun {
            // Ecotone activates Cancun hardfork.
            self.op_fork_activation(OpHardfork::Ecotone)
        } else {
            ForkCondition::Never
        }
    }
}

impl OpHardforks for RollupConfig {
    fn op_fork_activation(&self, fork: OpHardfork) -> ForkCondition {
        match fork {
            OpHardfork::Bedrock => ForkCondition::Block(0),
            OpHardfork::Regolith => self
                .hardforks
                .regolith_time
                .map(ForkCondition::Timestamp)
                .unwrap_or(self.op_fork_activation(OpHardfork::Ecotone)),
            OpHardfork::Ecotone => self
                .hardforks
                .ecotone_time
                .map(ForkCondition::Timestamp)
                .unwrap_or(ForkCondition::Never),
            _ => ForkCondition::Never,
        }
    }
}
