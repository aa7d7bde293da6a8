use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    Text(String),
    Json(Value),
}

impl ToolOutput {
    /// The output as a JSON value; text is wrapped in a JSON string.
    pub fn into_value(self) -> Value {
        match self {
            ToolOutput::Text(text) => Value::String(text),
            ToolOutput::Json(value) => value,
        }
    }
}

impl std::fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolOutput::Text(text) => write!(f, "{text}"),
            ToolOutput::Json(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for ToolOutput {
    fn from(value: String) -> Self {
        ToolOutput::Text(value)
    }
}

impl From<Value> for ToolOutput {
    fn from(value: Value) -> Self {
        ToolOutput::Json(value)
    }
}
