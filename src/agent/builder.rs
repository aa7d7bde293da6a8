use std::collections::HashSet;

use crate::{tools::ToolDyn, utils::helper::normalize_tool_name};

use super::{AgentDescriptor, BuilderError};

#[derive(Default)]
pub struct AgentDescriptorBuilder {
    name: Option<String>,
    model: Option<String>,
    description: Option<String>,
    instruction: Option<String>,
    tools: Vec<Box<dyn ToolDyn>>,
}

impl AgentDescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn instruction<S: Into<String>>(mut self, instruction: S) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    pub fn tool(mut self, tool: impl Into<Box<dyn ToolDyn>>) -> Self {
        self.tools.push(tool.into());
        self
    }

    pub fn tools(mut self, tools: impl IntoIterator<Item = impl Into<Box<dyn ToolDyn>>>) -> Self {
        self.tools.extend(tools.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<AgentDescriptor, BuilderError> {
        let name = required(self.name, "name")?;
        if !is_identifier(&name) {
            return Err(BuilderError::InvalidName(name));
        }
        let model = required(self.model, "model")?;
        let instruction = required(self.instruction, "instruction")?;

        let mut seen = HashSet::new();
        for tool in &self.tools {
            let tool_name = normalize_tool_name(&tool.name());
            if !seen.insert(tool_name.clone()) {
                return Err(BuilderError::DuplicateTool(tool_name));
            }
        }

        Ok(AgentDescriptor {
            name,
            model,
            description: self.description.unwrap_or_default(),
            instruction,
            tools: self.tools,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, BuilderError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(BuilderError::MissingField(field))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::tools::{CurrentTime, NewsSearch, ToolError, CK_NEWS_FEED_URL};

    fn base() -> AgentDescriptorBuilder {
        AgentDescriptorBuilder::new()
            .name("helper")
            .model("gemini-2.0-flash")
            .instruction("Help the user")
    }

    #[test]
    fn test_missing_fields() {
        let err = AgentDescriptorBuilder::new().build().unwrap_err();
        assert_eq!(err, BuilderError::MissingField("name"));

        let err = base().model("  ").build().unwrap_err();
        assert_eq!(err, BuilderError::MissingField("model"));

        let err = AgentDescriptorBuilder::new()
            .name("helper")
            .model("gemini-2.0-flash")
            .build()
            .unwrap_err();
        assert_eq!(err, BuilderError::MissingField("instruction"));
    }

    #[test]
    fn test_invalid_name() {
        for name in ["time agent", "1agent", "agent-name"] {
            let err = base().name(name).build().unwrap_err();
            assert_eq!(err, BuilderError::InvalidName(name.to_string()));
        }
        assert!(base().name("_agent_2").build().is_ok());
    }

    #[test]
    fn test_duplicate_tool() {
        let err = base()
            .tool(CurrentTime::new())
            .tool(CurrentTime::new())
            .build()
            .unwrap_err();

        assert_eq!(err, BuilderError::DuplicateTool("get_current_time".into()));
    }

    #[test]
    fn test_description_is_optional() {
        let agent = base().build().unwrap();

        assert_eq!(agent.description(), "");
        assert_eq!(agent.tools().count(), 0);
    }

    #[tokio::test]
    async fn test_tools_keep_order_and_route_calls() {
        let agent = base()
            .tools(crate::tools_vec![
                NewsSearch::new(CK_NEWS_FEED_URL),
                CurrentTime::new(),
            ])
            .build()
            .unwrap();

        assert_eq!(agent.tool_names(), ["get_ck_news", "get_current_time"]);
        assert!(agent.get_tool("Get Current Time").is_some());

        let output = agent
            .call_tool("get_current_time", json!({"timezone": "Not/AZone"}))
            .await
            .unwrap()
            .into_value();
        assert_eq!(output["status"], "error");

        let result = agent.call_tool("get_weather", json!({})).await;
        assert!(matches!(result, Err(ToolError::ToolNotFound(name)) if name == "get_weather"));
    }
}
