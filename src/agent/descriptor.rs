use std::fmt;

use async_openai::types::ChatCompletionTool;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    tools::{ToolDeclaration, ToolDyn, ToolError, ToolOutput},
    utils::helper::normalize_tool_name,
};

use super::AgentDescriptorBuilder;

/// Static configuration of a conversational agent: who it is, which model drives it and
/// which tools it may call.
///
/// Descriptors are produced through [`AgentDescriptor::builder`] and cannot be changed
/// afterwards. The conversation loop itself belongs to the agent runtime that consumes them.
pub struct AgentDescriptor {
    pub(super) name: String,
    pub(super) model: String,
    pub(super) description: String,
    pub(super) instruction: String,
    pub(super) tools: Vec<Box<dyn ToolDyn>>,
}

/// Serializable snapshot of an [`AgentDescriptor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentManifest {
    pub name: String,
    pub model: String,
    pub description: String,
    pub instruction: String,
    pub tools: Vec<ToolDeclaration>,
}

impl AgentDescriptor {
    pub fn builder() -> AgentDescriptorBuilder {
        AgentDescriptorBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Tools in declaration order.
    pub fn tools(&self) -> impl Iterator<Item = &dyn ToolDyn> {
        self.tools.iter().map(|tool| tool.as_ref())
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.tools()
            .map(|tool| normalize_tool_name(&tool.name()))
            .collect()
    }

    pub fn get_tool(&self, tool_name: &str) -> Option<&dyn ToolDyn> {
        let tool_name = normalize_tool_name(tool_name);
        self.tools()
            .find(|tool| normalize_tool_name(&tool.name()) == tool_name)
    }

    /// Routes a runtime tool call to the named tool.
    pub async fn call_tool(&self, tool_name: &str, input: Value) -> Result<ToolOutput, ToolError> {
        let tool = self
            .get_tool(tool_name)
            .ok_or_else(|| ToolError::ToolNotFound(tool_name.to_owned()))?;

        log::debug!("Agent {} calling tool {tool_name}", self.name);
        tool.call(input).await
    }

    pub fn tool_declarations(&self) -> Vec<ToolDeclaration> {
        self.tools().map(|tool| tool.declaration()).collect()
    }

    /// Tool definitions for runtimes that speak OpenAI-style function calling.
    pub fn openai_tools(&self) -> Vec<ChatCompletionTool> {
        self.tools()
            .map(|tool| tool.declaration().as_openai_tool())
            .collect()
    }

    pub fn manifest(&self) -> AgentManifest {
        AgentManifest {
            name: self.name.clone(),
            model: self.model.clone(),
            description: self.description.clone(),
            instruction: self.instruction.clone(),
            tools: self.tool_declarations(),
        }
    }
}

impl fmt::Debug for AgentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentDescriptor")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("description", &self.description)
            .field("instruction", &self.instruction)
            .field("tools", &self.tool_names())
            .finish()
    }
}
