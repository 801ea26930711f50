//! End-to-end walkthrough: build a tiny workspace, talk to it, then clean up.
//!
//! Run with:
//! ```bash
//! ASSISTANT_APIKEY=... ASSISTANT_URL=https://api.us-south.assistant.watson.cloud.ibm.com/instances/... \
//!     cargo run --example walkthrough
//! ```

use std::error::Error;

use assistant_v1::{
    Client, Config, CreateIntentOptions, CreateWorkspaceOptions, DeleteWorkspaceOptions, Example,
    ListLogsOptions, MessageOptions,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let client = Client::new(Config::from_env()?)?;

    let created = client
        .workspaces()
        .create(
            &CreateWorkspaceOptions::new()
                .with_name("walkthrough")
                .with_description("Created by the walkthrough demo")
                .with_language("en"),
        )
        .await?;
    println!("create_workspace: {}", created.status_code);
    let workspace_id = created
        .result
        .workspace_id
        .ok_or("service did not return a workspace id")?;

    let intent = client
        .intents()
        .create(
            &CreateIntentOptions::new(&workspace_id, "greeting").with_examples(vec![
                Example::new("hello"),
                Example::new("good morning"),
                Example::new("hi there"),
            ]),
        )
        .await?;
    println!("create_intent: {}", intent.status_code);

    let reply = client
        .message(&MessageOptions::new(&workspace_id).with_text("hello"))
        .await?;
    println!(
        "message: {} (transaction {})",
        reply.status_code,
        reply.transaction_id().unwrap_or_default()
    );
    if let Some(top) = reply.result.top_intent() {
        println!("  top intent: #{} ({:?})", top.intent, top.confidence);
    }
    for line in &reply.result.output.text {
        println!("  > {line}");
    }

    // Logs are only kept on paid plans; a 403 here is expected on lite instances.
    match client
        .logs()
        .list(&ListLogsOptions::new(&workspace_id).with_page_limit(5))
        .await
    {
        Ok(logs) => println!("list_logs: {} ({} entries)", logs.status_code, logs.result.logs.len()),
        Err(err) => println!("list_logs: {err}"),
    }

    let deleted = client
        .workspaces()
        .delete(&DeleteWorkspaceOptions::new(&workspace_id))
        .await?;
    println!("delete_workspace: {}", deleted.status_code);

    Ok(())
}
