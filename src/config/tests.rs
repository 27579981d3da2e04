//! Tests for config functionality.

use crate::config::{LoadError, SchemaError, SectionName, SystemConfig};
use crate::test_support::{SAMPLE_CONFIG, sample_config, write_config};

fn schema_error(yaml: &str) -> SchemaError {
    match SystemConfig::from_yaml(yaml) {
        Err(LoadError::Schema(err)) => err,
        other => panic!("expected schema error, got {:?}", other),
    }
}

const MINIMAL: &str = r#"
llm_profiles: {}
agents: {}
tasks: {}
teams: {}
"#;

#[test]
fn test_parse_sample_config() {
    let config = sample_config();

    assert_eq!(config.version.as_deref(), Some("1.0"));
    assert_eq!(config.llm_profiles.len(), 2);
    assert_eq!(config.agents.len(), 3);
    assert_eq!(config.tasks.len(), 2);
    assert_eq!(config.teams.len(), 2);
    assert!(config.routing.is_none());

    let creative = config.llm_profiles.get("creative").unwrap();
    assert_eq!(creative.provider, "anthropic");
    assert_eq!(creative.temperature, 0.9);

    let core = config.teams.get("core").unwrap();
    assert_eq!(core.agents, vec!["researcher", "writer"]);
}

#[test]
fn test_sections_keep_document_order() {
    let config = sample_config();
    let agents: Vec<&str> = config.agents.keys().collect();
    assert_eq!(agents, vec!["researcher", "archivist", "writer"]);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = SystemConfig::from_yaml(MINIMAL).unwrap();
    assert!(config.version.is_none());
    assert!(config.agents.is_empty());
}

#[test]
fn test_temperature_defaults_when_missing() {
    let yaml = r#"
llm_profiles:
  default:
    provider: openai
    model: gpt-4o-mini
agents: {}
tasks: {}
teams: {}
"#;
    let config = SystemConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.llm_profiles.get("default").unwrap().temperature, 0.1);
}

#[test]
fn test_temperature_bounds() {
    let profile = |t: &str| {
        format!(
            "llm_profiles:\n  p:\n    provider: x\n    model: y\n    temperature: {}\nagents: {{}}\ntasks: {{}}\nteams: {{}}\n",
            t
        )
    };

    assert!(SystemConfig::from_yaml(&profile("1.0")).is_ok());
    assert!(SystemConfig::from_yaml(&profile("1")).is_ok());
    assert!(SystemConfig::from_yaml(&profile("0.01")).is_ok());

    let err = schema_error(&profile("0.0"));
    assert_eq!(err.issue.path, "llm_profiles.p.temperature");
    assert_eq!(err.issue.message, "expected a number in (0, 1], got 0");

    let err = schema_error(&profile("1.5"));
    assert_eq!(err.issue.path, "llm_profiles.p.temperature");
    assert_eq!(err.issue.message, "expected a number in (0, 1], got 1.5");
}

#[test]
fn test_temperature_wrong_type() {
    let yaml = r#"
llm_profiles:
  p:
    provider: x
    model: y
    temperature: hot
agents: {}
tasks: {}
teams: {}
"#;
    let err = schema_error(yaml);
    assert_eq!(err.issue.path, "llm_profiles.p.temperature");
    assert!(err.issue.message.contains("\"hot\""));
    assert!(err.issue.message.contains("expected a number in (0, 1]"));
}

#[test]
fn test_empty_provider_rejected() {
    let yaml = r#"
llm_profiles:
  p:
    provider: ""
    model: y
agents: {}
tasks: {}
teams: {}
"#;
    let err = schema_error(yaml);
    assert_eq!(err.issue.path, "llm_profiles.p.provider");
    assert_eq!(err.issue.message, "expected a non-empty string, got ''");
}

#[test]
fn test_blank_provider_reports_received_value() {
    let yaml = r#"
llm_profiles:
  p:
    provider: "   "
    model: y
agents: {}
tasks: {}
teams: {}
"#;
    let err = schema_error(yaml);
    assert_eq!(err.issue.path, "llm_profiles.p.provider");
    assert_eq!(err.issue.message, "expected a non-empty string, got '   '");
}

#[test]
fn test_unknown_top_level_key_rejected() {
    let yaml = format!("{}plugins: [a]\n", MINIMAL);
    let err = schema_error(&yaml);
    assert_eq!(err.issue.path, "");
    assert!(err.issue.message.starts_with("unknown field `plugins`"));
    assert!(err.to_string().contains("<root>: unknown field `plugins`"));
}

#[test]
fn test_unknown_entity_field_rejected() {
    let yaml = r#"
llm_profiles: {}
agents:
  researcher:
    description: d
    llm: default
    tools: [search]
tasks: {}
teams: {}
"#;
    let err = schema_error(yaml);
    assert_eq!(err.issue.path, "agents.researcher");
    assert!(err.issue.message.starts_with("unknown field `tools`"));
    assert!(err.issue.line.is_some());
}

#[test]
fn test_missing_field_reported() {
    let yaml = r#"
llm_profiles: {}
agents:
  researcher:
    description: d
tasks: {}
teams: {}
"#;
    let err = schema_error(yaml);
    assert_eq!(err.issue.path, "agents.researcher");
    assert_eq!(err.issue.message, "missing field `llm`");
}

#[test]
fn test_missing_section_reported() {
    let yaml = "llm_profiles: {}\nagents: {}\ntasks: {}\n";
    let err = schema_error(yaml);
    assert_eq!(err.issue.path, "");
    assert_eq!(err.issue.message, "missing field `teams`");
}

#[test]
fn test_sequence_item_path() {
    let yaml = r#"
llm_profiles: {}
agents: {}
tasks: {}
teams:
  core:
    agents: [a, {name: b}]
"#;
    let err = schema_error(yaml);
    assert_eq!(err.issue.path, "teams.core.agents[1]");
    assert!(err.issue.message.starts_with("invalid type: map"));
}

#[test]
fn test_repeated_key_rejected() {
    let yaml = r#"
llm_profiles: {}
agents:
  a: {description: d, llm: x}
  a: {description: e, llm: y}
tasks: {}
teams: {}
"#;
    let err = schema_error(yaml);
    assert_eq!(err.issue.path, "agents");
    assert_eq!(err.issue.message, "duplicate entry with key 'a'");
}

#[test]
fn test_root_must_be_mapping() {
    let err = schema_error("- just\n- a list\n");
    assert_eq!(err.issue.path, "");
    assert!(err.to_string().contains("<root>: invalid type: sequence"));
}

#[test]
fn test_version_pattern() {
    let with_version = |v: &str| format!("version: \"{}\"\n{}", v, MINIMAL);

    let config = SystemConfig::from_yaml(&with_version("2.1")).unwrap();
    assert_eq!(config.version.as_deref(), Some("2.1"));

    for bad in ["2", "1.0.0", "v1.0", "1.x"] {
        let err = schema_error(&with_version(bad));
        assert!(err.issue.is_version());
        assert_eq!(
            err.issue.message,
            format!("invalid version '{}': expected format 'X.Y'", bad)
        );
    }
}

#[test]
fn test_unquoted_version_is_read_as_written() {
    let config = SystemConfig::from_yaml(&format!("version: 1.10\n{}", MINIMAL)).unwrap();
    assert_eq!(config.version.as_deref(), Some("1.10"));

    let err = schema_error(&format!("version: 3\n{}", MINIMAL));
    assert!(err.issue.is_version());
}

#[test]
fn test_routing_table_parsed_in_order() {
    let yaml = format!(
        "{}routing:\n  archivist: [memory, archive]\n  research: [lookup]\n",
        MINIMAL
    );
    let config = SystemConfig::from_yaml(&yaml).unwrap();
    let routing = config.routing.unwrap();
    let ids: Vec<&str> = routing.keys().collect();
    assert_eq!(ids, vec!["archivist", "research"]);
    assert_eq!(routing.get("archivist").unwrap(), &vec!["memory", "archive"]);
}

#[test]
fn test_round_trip_preserves_config() {
    let original = sample_config();

    let yaml = original.to_yaml().unwrap();
    let reloaded = SystemConfig::from_yaml(&yaml).unwrap();

    assert_eq!(reloaded, original);
    assert_eq!(reloaded.to_yaml().unwrap(), yaml);
}

#[test]
fn test_load_from_file() {
    let (_temp_dir, path) = write_config(SAMPLE_CONFIG);
    let config = SystemConfig::load(&path).unwrap();
    assert_eq!(config, sample_config());
}

#[test]
fn test_load_missing_file() {
    let result = SystemConfig::load("does-not-exist.yaml");
    assert!(matches!(result, Err(LoadError::Read { .. })));
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("failed to read config file 'does-not-exist.yaml'")
    );
}

#[test]
fn test_load_malformed_yaml() {
    let (_temp_dir, path) = write_config("foo: [bar");
    let result = SystemConfig::load(&path);
    assert!(matches!(result, Err(LoadError::Parse(_))));
}

#[test]
fn test_section_singular_names() {
    assert_eq!(SectionName::LlmProfiles.singular(), "llm profile");
    assert_eq!(SectionName::Agents.singular(), "agent");
    assert_eq!(SectionName::Tasks.singular(), "task");
    assert_eq!(SectionName::Teams.singular(), "team");
}
