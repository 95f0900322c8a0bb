//! Configuration for the calculator module.

use calculator_sdk::OverflowPolicy;
use serde::{Deserialize, Serialize};

/// Calculator module configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Overflow handling for policy-aware evaluation.
    pub overflow: OverflowPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CalculatorConfig::default();
        assert_eq!(config.overflow, OverflowPolicy::Wrap);
    }

    #[test]
    fn test_config_parse_overflow() {
        let yaml = r#"
overflow: saturate
"#;
        let config: CalculatorConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.overflow, OverflowPolicy::Saturate);
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let yaml = r#"
overflow: reject
precision: 3
"#;
        let result: Result<CalculatorConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_rejects_unknown_policy() {
        let yaml = r#"
overflow: explode
"#;
        let result: Result<CalculatorConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
