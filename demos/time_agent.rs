use std::error::Error;

use adk_agents::agent::{root_agent, time_agent};
use serde_json::json;

// cargo run --example time_agent -- Asia/Taipei 校慶
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let timezone = args.next().unwrap_or_else(|| "Asia/Taipei".to_string());
    let keyword = args.next().unwrap_or_else(|| "建國".to_string());

    println!("{}", serde_json::to_string_pretty(&root_agent()?.manifest())?);

    let agent = time_agent()?;
    println!("{}", serde_json::to_string_pretty(&agent.manifest())?);

    for tool in agent.tools() {
        println!("{}\n", tool.to_plain_description());
    }

    let time = agent
        .call_tool("get_current_time", json!({ "timezone": timezone }))
        .await?;
    println!("Time: {time}");

    let news = agent
        .call_tool("get_ck_news", json!({ "keyword": keyword, "max_results": 3 }))
        .await?;
    println!("News: {news}");

    Ok(())
}
