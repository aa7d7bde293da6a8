use indoc::indoc;

use crate::tools::{CurrentTime, NewsSearch};

use super::{AgentDescriptor, BuilderError};

pub const ROOT_AGENT_MODEL: &str = "gemini-2.0-flash-exp";
pub const TIME_AGENT_MODEL: &str = "gemini-2.0-flash";

/// General assistant without tools.
pub fn root_agent() -> Result<AgentDescriptor, BuilderError> {
    AgentDescriptor::builder()
        .name("root_agent")
        .model(ROOT_AGENT_MODEL)
        .description("A helpful assistant for user questions.")
        .instruction("Answer user questions to the best of your knowledge")
        .build()
}

/// Assistant that can tell the time in any IANA timezone and search CK High School news.
pub fn time_agent() -> Result<AgentDescriptor, BuilderError> {
    time_agent_with(NewsSearch::default())
}

/// [`time_agent`] with a custom news source.
pub fn time_agent_with(news: NewsSearch) -> Result<AgentDescriptor, BuilderError> {
    AgentDescriptor::builder()
        .name("time_agent")
        .model(TIME_AGENT_MODEL)
        .description(
            "Agent to answer questions about the time in a city. \
            Agent to answer news in CK High School with a list.",
        )
        .instruction(indoc! {"
            You are a helpful agent who can answer user questions about the time in a city.
            You will be given a timezone string to find the current time.
            You will be given news in CK High School."})
        .tool(CurrentTime::new())
        .tool(news)
        .build()
}
