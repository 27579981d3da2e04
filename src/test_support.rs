use crate::config::SystemConfig;
use std::path::PathBuf;
use tempfile::TempDir;

/// A complete, valid configuration document.
pub(crate) const SAMPLE_CONFIG: &str = r#"
version: "1.0"
llm_profiles:
  default:
    provider: openai
    model: gpt-4o-mini
    temperature: 0.2
  creative:
    provider: anthropic
    model: claude-3-haiku
    temperature: 0.9
agents:
  researcher:
    description: Finds and summarises sources
    llm: default
  archivist:
    description: Files notes into long-term memory
    llm: default
  writer:
    description: Drafts prose
    llm: creative
tasks:
  gather:
    description: Collect background material
    agent: researcher
  store:
    description: Archive the findings
    agent: archivist
teams:
  core:
    agents: [researcher, writer]
  memory:
    agents: [archivist]
"#;

pub(crate) fn sample_config() -> SystemConfig {
    SystemConfig::from_yaml(SAMPLE_CONFIG).unwrap()
}

/// Write `contents` to a config file inside a fresh temp dir.
pub(crate) fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("system_config.yaml");
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}
