// JSON schema rendering for tool inputs

use crate::types::{InputType, Parameter, Tool, ToolInput};
use serde_json::{json, Map, Value};

/// Render the schema fragment describing a single input
pub fn input_schema(input: &ToolInput) -> Value {
    let item = json!({
        "type": json_type(input.input_type()),
        "description": input.description()
    });

    if input.is_list() {
        json!({
            "type": "array",
            "items": item,
            "description": input.description()
        })
    } else {
        item
    }
}

/// Render an object schema covering every input of a tool
pub fn tool_schema(tool: &Tool) -> Value {
    let properties: Map<String, Value> = tool
        .inputs()
        .iter()
        .map(|i| (i.name().to_string(), input_schema(i)))
        .collect();
    let required: Vec<&str> = tool.required_inputs().map(|i| i.name()).collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

fn json_type(input_type: InputType) -> &'static str {
    match input_type {
        InputType::String | InputType::File => "string",
        InputType::Numeric => "number",
        InputType::Flag => "boolean",
    }
}
