//! Contains the hardfork configuration for the chain.

use core::fmt::Display;

/// Hardfork configuration.
///
/// Only the forks that change how the L1 data fee is charged, plus the opBNB pre-contract fork,
/// are tracked here. Every fork is active if its time is `Some(t)` and the L2 block timestamp is
/// `>= t`, inactive otherwise.
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct HardForkConfig {
    /// `regolith_time` sets the activation time of the Regolith network upgrade.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub regolith_time: Option<u64>,
    /// `ecotone_time` sets the activation time of the Ecotone network upgrade.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ecotone_time: Option<u64>,
    /// `pre_contract_time` sets the activation time of the pre-contract hard fork, which renames
    /// the wrapped native token predeploy and removes the governance token predeploy.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pre_contract_time: Option<u64>,
}

impl Display for HardForkConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fn write_time(
            f: &mut core::fmt::Formatter<'_>,
            name: &str,
            t: Option<u64>,
        ) -> core::fmt::Result {
            match t {
                Some(t) => writeln!(f, "-> {name} Activation Time: {t}"),
                None => writeln!(f, "-> {name} Activation Time: Not scheduled"),
            }
        }

        writeln!(f, "🍴 Scheduled Hardforks:")?;
        write_time(f, "Regolith", self.regolith_time)?;
        write_time(f, "Ecotone", self.ecotone_time)?;
        write_time(f, "PreContract", self.pre_contract_time)
    }
}

#[cfg(test)]
#[cfg(feature = "serde")]
mod tests {
    use super::*;

    #[test]
    fn test_hardforks_deserialize_json() {
        let raw: &str = r#"
        {
            "regolith_time": 0,
            "ecotone_time": 1718870400,
            "pre_contract_time": 1692154800
        }
        "#;

        let hardforks = HardForkConfig {
            regolith_time: Some(0),
            ecotone_time: Some(1718870400),
            pre_contract_time: Some(1692154800),
        };

        let deserialized: HardForkConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(hardforks, deserialized);
    }

    #[test]
    fn test_hardforks_deserialize_missing_fields_json() {
        let deserialized: HardForkConfig =
            serde_json::from_str(r#"{ "ecotone_time": 10 }"#).unwrap();
        assert_eq!(deserialized, HardForkConfig { ecotone_time: Some(10), ..Default::default() });
    }

    #[test]
    fn test_hardforks_deserialize_new_field_fail_json() {
        let raw: &str = r#"
        {
            "regolith_time": 0,
            "ecotone_time": 1718870400,
            "fjord_time": 1720627201
        }
        "#;

        let err = serde_json::from_str::<HardForkConfig>(raw).unwrap_err();
        assert_eq!(err.classify(), serde_json::error::Category::Data);
    }

    #[test]
    fn test_hardforks_deserialize_toml() {
        let raw: &str = r#"
        regolith_time = 0
        ecotone_time = 1718870400 # Thu 20 Jun 2024 08:00:00 UTC
        pre_contract_time = 1692154800 # Wed 16 Aug 2023 03:00:00 UTC
        "#;

        let hardforks = HardForkConfig {
            regolith_time: Some(0),
            ecotone_time: Some(1718870400),
            pre_contract_time: Some(1692154800),
        };

        let deserialized: HardForkConfig = toml::from_str(raw).unwrap();
        assert_eq!(hardforks, deserialized);
    }

    #[test]
    fn test_hardforks_deserialize_new_field_fail_toml() {
        let raw: &str = r#"
        regolith_time = 0
        fjord_time = 1720627201
        "#;
        toml::from_str::<HardForkConfig>(raw).unwrap_err();
    }

    #[test]
    fn test_hardforks_display() {
        let hardforks = HardForkConfig { ecotone_time: Some(30), ..Default::default() };
        let rendered = hardforks.to_string();

        assert!(rendered.contains("-> Regolith Activation Time: Not scheduled"));
        assert!(rendered.contains("-> Ecotone Activation Time: 30"));
        assert!(rendered.contains("-> PreContract Activation Time: Not scheduled"));
    }
}
