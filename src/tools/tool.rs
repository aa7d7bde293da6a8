use std::error::Error;

use async_trait::async_trait;
use schemars::{schema::RootSchema, schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{ToolError, ToolOutput};

/// A function an agent can call during a conversation turn.
///
/// The parameter schema handed to the agent runtime is derived from [`Tool::Input`], so the
/// input struct (and its `schemars` descriptions) is the single source of truth for what the
/// model is told about the tool.
///
/// Implementors are usually erased into a [`ToolDyn`](super::ToolDyn) before being attached
/// to an [`AgentDescriptor`](crate::agent::AgentDescriptor).
#[async_trait]
pub trait Tool: Send + Sync {
    type Input: DeserializeOwned + JsonSchema + Send + Sync;
    type Output: Into<ToolOutput> + Send + Sync;

    /// Returns the name of the tool.
    fn name(&self) -> String;

    /// Provides a description of what the tool does and when to use it.
    fn description(&self) -> String;

    /// JSON schema for the tool input parameters.
    fn parameters(&self) -> RootSchema {
        schema_for!(Self::Input)
    }

    /// Value for `strict` in OpenAI-style function declarations.
    fn strict(&self) -> bool {
        false
    }

    /// Parses the raw arguments produced by the model.
    ///
    /// Override this when the model is known to send something other than the schema object,
    /// e.g. a bare string.
    async fn parse_input(&self, input: Value) -> Result<Self::Input, ToolError> {
        Ok(serde_json::from_value(input)?)
    }

    /// Executes the core functionality of the tool.
    ///
    /// Failures the caller is expected to see (bad user input, upstream outages) belong in
    /// `Self::Output`; an `Err` here means the call itself could not be carried out.
    async fn run(&self, input: Self::Input) -> Result<Self::Output, Box<dyn Error + Send + Sync>>;
}
