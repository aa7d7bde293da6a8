use async_trait::async_trait;
use indoc::formatdoc;
use schemars::schema::RootSchema;
use serde_json::Value;

use crate::{tools::Tool, utils::helper::normalize_tool_name};

use super::{ToolDeclaration, ToolError, ToolOutput};

mod sealed {
    /// A sealed trait to prevent external implementations of the `ToolDyn` trait.
    pub trait Sealed {}
}

/// A dyn-compatible, generic-less interface for tools.
///
/// This trait is "sealed": it is implemented for every [`Tool`] through a blanket impl and
/// cannot be implemented by hand. Agent descriptors store their tools as `Box<dyn ToolDyn>`.
#[async_trait]
pub trait ToolDyn: sealed::Sealed + Send + Sync {
    /// Returns the name of the tool.
    fn name(&self) -> String;

    /// Provides a description of what the tool does and when to use it.
    fn description(&self) -> String;

    /// JSON schema for the tool input parameters.
    fn parameters(&self) -> RootSchema;

    /// Value for `strict` in OpenAI-style function declarations.
    fn strict(&self) -> bool;

    /// Parses `input` and runs the tool.
    async fn call(&self, input: Value) -> Result<ToolOutput, ToolError>;

    /// The static declaration handed to an agent runtime.
    fn declaration(&self) -> ToolDeclaration {
        let parameters = serde_json::to_value(self.parameters()).unwrap_or_else(|e| {
            log::warn!(
                "Failed to serialize parameters for tool {}: {e}",
                self.name(),
            );
            Value::Null
        });

        ToolDeclaration {
            name: normalize_tool_name(&self.name()),
            description: self.description(),
            parameters,
            strict: self.strict(),
        }
    }

    /// Plain-text description for prompts of runtimes without native function calling.
    fn to_plain_description(&self) -> String {
        let declaration = self.declaration();
        let parameters = serde_json::to_string_pretty(&declaration.parameters)
            .unwrap_or_else(|_| String::from("{}"));

        formatdoc! {"
            > {}: {}
            <INPUT_FORMAT>
            {parameters}
            </INPUT_FORMAT>",
            declaration.name,
            declaration.description,
        }
    }
}

impl<T> sealed::Sealed for T where T: Tool {}

#[async_trait]
impl<T> ToolDyn for T
where
    T: Tool + sealed::Sealed,
{
    fn name(&self) -> String {
        Tool::name(self)
    }

    fn description(&self) -> String {
        Tool::description(self)
    }

    fn parameters(&self) -> RootSchema {
        Tool::parameters(self)
    }

    fn strict(&self) -> bool {
        Tool::strict(self)
    }

    async fn call(&self, input: Value) -> Result<ToolOutput, ToolError> {
        log::debug!("Calling tool {}", Tool::name(self));
        let input = self.parse_input(input).await?;
        let result = self.run(input).await.map_err(ToolError::ExecutionError)?;
        Ok(result.into())
    }
}

impl<'a, T> From<T> for Box<dyn ToolDyn + 'a>
where
    T: ToolDyn + 'a,
{
    fn from(val: T) -> Self {
        Box::new(val)
    }
}
