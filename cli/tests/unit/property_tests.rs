//! Property-based tests for configuration and option validation.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use std::path::Path;

use proptest::prelude::*;

use agentos_cli::domain::{
    AgentOsConfig, ConfigurationError, InstallLocation, InstallOptions, ProjectType,
    ValidationError,
};

fn config_yaml(project_types: &[String], default: &str) -> String {
    let mut yaml = String::from("version: 1.0.0\nproject_types:\n");
    for name in project_types {
        yaml.push_str(&format!("  {name}:\n    instructions: i\n    standards: s\n"));
    }
    yaml.push_str(&format!("default_project_type: {default}\n"));
    yaml
}

// ============================================================================
// AgentOsConfig invariants
// ============================================================================

proptest! {
    /// A default project type missing from project_types is always rejected.
    #[test]
    fn prop_unknown_default_project_type_rejected(
        types in prop::collection::btree_set("pt_[a-z]{1,8}", 1..5),
        default in "X[A-Z]{0,8}",
    ) {
        let types: Vec<String> = types.into_iter().collect();
        let result = AgentOsConfig::from_yaml(&config_yaml(&types, &default), Path::new("config.yml"));
        let rejected = matches!(
            result,
            Err(ConfigurationError::UnknownDefaultProjectType { ref name, .. }) if *name == default
        );
        prop_assert!(rejected, "expected rejection for default {}", default);
    }

    /// A default project type present in project_types is always accepted.
    #[test]
    fn prop_known_default_project_type_accepted(
        types in prop::collection::btree_set("pt_[a-z]{1,8}", 1..5),
        pick in any::<prop::sample::Index>(),
    ) {
        let types: Vec<String> = types.into_iter().collect();
        let default = pick.get(&types).clone();
        let config = AgentOsConfig::from_yaml(&config_yaml(&types, &default), Path::new("config.yml"));
        prop_assert!(config.is_ok(), "rejected: {:?}", config);
    }
}

// ============================================================================
// Project type validation
// ============================================================================

proptest! {
    /// Names made of letters, digits, `-` and `_` are accepted unchanged.
    #[test]
    fn prop_valid_project_types_accepted(name in "[A-Za-z0-9_-]{1,40}") {
        let project_type = ProjectType::new(name.clone()).expect("valid");
        prop_assert_eq!(project_type.as_str(), name.as_str());
    }

    /// Any other character makes the whole name invalid, and the builder
    /// refuses to produce options.
    #[test]
    fn prop_invalid_character_rejected(
        prefix in "[A-Za-z0-9_-]{0,10}",
        bad in "[ ./;:$!@#%&*()\\[\\]{}'\"`~+=<>?,|\\\\]",
        suffix in "[A-Za-z0-9_-]{0,10}",
    ) {
        let name = format!("{prefix}{bad}{suffix}");
        let built = InstallOptions::builder(InstallLocation::Project)
            .project_type(name.as_str())
            .build();
        prop_assert_eq!(built, Err(ValidationError::InvalidProjectType(name)));
    }
}

#[test]
fn test_empty_project_type_rejected() {
    assert!(ProjectType::new("").is_err());
}
