use async_openai::types::{
    ChatCompletionTool, ChatCompletionToolArgs, ChatCompletionToolType, FunctionObjectArgs,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Explicit schema of a callable tool: what an agent runtime needs to advertise the tool to
/// a model and route calls back to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDeclaration {
    pub name: String,
    pub description: String,
    /// JSON schema of the arguments object.
    pub parameters: Value,
    pub strict: bool,
}

impl ToolDeclaration {
    /// OpenAI-compatible function-calling definition.
    pub fn as_openai_tool(&self) -> ChatCompletionTool {
        let function = FunctionObjectArgs::default()
            .name(self.name.clone())
            .description(self.description.clone())
            .parameters(self.parameters.clone())
            .strict(self.strict)
            .build()
            .unwrap_or_else(|e| unreachable!("All fields must be set: {}", e));

        ChatCompletionToolArgs::default()
            .r#type(ChatCompletionToolType::Function)
            .function(function)
            .build()
            .unwrap_or_else(|e| unreachable!("All fields must be set: {}", e))
    }
}
