use toolspec_core::*;

#[test]
fn test_numeric_input() {
    let input =
        ToolInput::new("threshold", "Numeric", "cutoff value", "-t", false, true, "-t").unwrap();
    assert_eq!(input.input_type(), InputType::Numeric);
    assert_eq!(input.input_type().to_string(), "Numeric");
    assert_eq!(input.name(), "threshold");
    assert!(input.is_optional());
}

#[test]
fn test_file_input() {
    let input =
        ToolInput::new("inputFile", "File", "input path", "-i", false, false, "-i").unwrap();
    assert_eq!(input.input_type(), InputType::File);
    assert_eq!(input.description(), "input path");
    assert_eq!(input.command_line_key(), "-i");
    assert_eq!(input.command_line_flag(), "-i");
    assert!(!input.is_list());
    assert!(!input.is_optional());
}

#[test]
fn test_unrecognized_type() {
    let err = ToolInput::new("verbose", "Boolean", "enable verbosity", "-v", false, true, "-v")
        .unwrap_err();
    assert!(err.is_invalid_type());
    assert!(err.to_string().contains("\"Boolean\""));
}

#[test]
fn test_typed_constructor() {
    let base = ParameterDescriptor::new("n", "count", "[N]", false, false, "-n");
    let input = ToolInput::with_type(base.clone(), InputType::Numeric);
    assert_eq!(input.descriptor(), &base);
    assert_eq!("Numeric".parse::<InputType>().unwrap(), input.input_type());
}

#[test]
fn test_load_with_config() {
    let config = LoaderConfig::from_toml(r#"on_invalid_input = "skip""#).unwrap();
    let loader = ManifestLoader::new(config);
    let tool = loader
        .load_tool(
            r#"{
                "name": "mincresample",
                "inputs": [
                    {
                        "name": "like",
                        "type": "File",
                        "command-line-key": "[LIKE]",
                        "command-line-flag": "-like"
                    },
                    {"name": "level", "type": "Integer", "command-line-key": "[LEVEL]"}
                ]
            }"#,
        )
        .unwrap();

    assert_eq!(tool.inputs().len(), 1);
    let schema = schema::tool_schema(&tool);
    assert_eq!(schema["required"], serde_json::json!(["like"]));
}

#[test]
fn test_skipped_inputs_are_logged() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();

    let loader = ManifestLoader::new(LoaderConfig {
        on_invalid_input: InvalidInputPolicy::Skip,
        ..Default::default()
    });
    let tool = loader.load_tool_value(serde_json::json!({
        "name": "bet",
        "inputs": [
            {"name": "mask", "type": "Flag", "command-line-key": "[MASK]", "optional": true},
            {"name": "radius", "type": "numeric", "command-line-key": "[RADIUS]"}
        ]
    }))?;

    assert_eq!(tool.inputs().len(), 1);
    assert_eq!(tool.input("mask").map(|i| i.input_type()), Some(InputType::Flag));
    assert_eq!(tool.required_inputs().count(), 0);
    Ok(())
}
