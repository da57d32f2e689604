//! Rule lookup and configuration-driven construction.

use crate::illegal_catch::{self, IllegalCatch};
use catch_lint_core::{Config, RuleBox};

/// Returns every available rule with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(IllegalCatch::new())]
}

/// Builds the rules named in `names` (by name or code), configured from
/// `config`. Unknown names are logged and skipped.
#[must_use]
pub fn rules_by_name(names: &[&str], config: &Config) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    for name in names {
        match *name {
            illegal_catch::NAME | illegal_catch::CODE => {
                rules.push(Box::new(configured_illegal_catch(config)));
            }
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}

/// Builds every available rule, configured from `config`.
#[must_use]
pub fn rules_from_config(config: &Config) -> Vec<RuleBox> {
    vec![Box::new(configured_illegal_catch(config))]
}

fn configured_illegal_catch(config: &Config) -> IllegalCatch {
    config
        .rule_config(illegal_catch::NAME)
        .map_or_else(IllegalCatch::new, IllegalCatch::from_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_lists_illegal_catch() {
        let names: Vec<&str> = all_rules().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["illegal-catch"]);
    }

    #[test]
    fn lookup_by_name_or_code() {
        let config = Config::default();
        assert_eq!(rules_by_name(&["illegal-catch"], &config).len(), 1);
        assert_eq!(rules_by_name(&["IC001"], &config).len(), 1);
        assert!(rules_by_name(&["no-such-rule"], &config).is_empty());
    }

    #[test]
    fn configured_rule_reads_its_table() {
        let config = Config::parse(
            "[rules.illegal-catch]\nillegal_names = [\"Exception\"]\npermit_rethrow = true\n",
        )
        .expect("valid config");
        let rule = configured_illegal_catch(&config);
        assert!(rule.config().permit_rethrow);
        assert_eq!(rule.config().illegal_names.len(), 1);
    }
}
