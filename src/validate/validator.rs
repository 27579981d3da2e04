//! Cross-section validation of a [`SystemConfig`].
//!
//! Checks, all run on every pass:
//! - Rule D1: keys within a section must be unique ignoring case
//! - Rule R1: every agent's `llm` names an existing LLM profile
//! - Rule R2: every task's `agent` names an existing agent
//! - Rule R3: every team member names an existing agent
//!
//! Reference lookups are exact and case-sensitive.

use super::violation::{ConfigError, ConfigViolation};
use crate::config::{Section, SectionName, SystemConfig};
use std::collections::HashSet;

/// Validates references and key uniqueness across a borrowed config.
///
/// Validation is read-only and keeps no state between calls, so validating
/// the same config twice yields the same result.
#[derive(Debug, Clone, Copy)]
pub struct ConfigValidator<'a> {
    config: &'a SystemConfig,
}

impl<'a> ConfigValidator<'a> {
    pub fn new(config: &'a SystemConfig) -> Self {
        Self { config }
    }

    /// Run every check and return all violations, in check order.
    pub fn violations(&self) -> Vec<ConfigViolation> {
        let config = self.config;
        let mut violations = Vec::new();

        check_duplicates(&config.llm_profiles, SectionName::LlmProfiles, &mut violations);
        check_duplicates(&config.agents, SectionName::Agents, &mut violations);
        check_duplicates(&config.tasks, SectionName::Tasks, &mut violations);
        check_duplicates(&config.teams, SectionName::Teams, &mut violations);

        for (agent_name, agent) in config.agents.iter() {
            if !config.llm_profiles.contains_key(&agent.llm) {
                violations.push(ConfigViolation::unknown_reference(
                    SectionName::Agents,
                    agent_name,
                    "llm",
                    &agent.llm,
                    format!(
                        "Unknown llm profile '{}' for agent '{}'",
                        agent.llm, agent_name
                    ),
                ));
            }
        }

        for (task_name, task) in config.tasks.iter() {
            if !config.agents.contains_key(&task.agent) {
                violations.push(ConfigViolation::unknown_reference(
                    SectionName::Tasks,
                    task_name,
                    "agent",
                    &task.agent,
                    format!("Unknown agent '{}' for task '{}'", task.agent, task_name),
                ));
            }
        }

        for (team_name, team) in config.teams.iter() {
            for member in &team.agents {
                if !config.agents.contains_key(member) {
                    violations.push(ConfigViolation::unknown_reference(
                        SectionName::Teams,
                        team_name,
                        "agents",
                        member,
                        format!(
                            "Team '{}' references unknown agent '{}'",
                            team_name, member
                        ),
                    ));
                }
            }
        }

        violations
    }

    /// Validate the config.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - No violations
    /// * `Err(ConfigError)` - Every violation found, never just the first
    pub fn validate(&self) -> Result<(), ConfigError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = violations.len(), "configuration has violations");
            Err(ConfigError { violations })
        }
    }
}

/// Validate `config`; shorthand for `ConfigValidator::new(config).validate()`.
pub fn validate_config(config: &SystemConfig) -> Result<(), ConfigError> {
    ConfigValidator::new(config).validate()
}

/// Report each key whose lowercase form was already seen in `section`.
fn check_duplicates<T>(
    section: &Section<T>,
    name: SectionName,
    violations: &mut Vec<ConfigViolation>,
) {
    let mut seen = HashSet::with_capacity(section.len());
    for key in section.keys() {
        if !seen.insert(key.to_lowercase()) {
            violations.push(ConfigViolation::duplicate(name, key));
        }
    }
}
