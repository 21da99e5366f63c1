//! Command-line client
//!
//! Talks to a running server over the same JSON API the browser client uses.

use clap::{Args, Parser, Subcommand};
use reqwest::{Client, Response};

use crate::domain::{flatten_tree, Todo};
use crate::error::ErrorBody;
use crate::routes::{AddRequest, MarkRequest};

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Base URL of the todo server
    #[arg(long, env = "TODO_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a list element
    Add(AddCommand),
    /// Mark or unmark a list element
    Mark(MarkCommand),
    /// Delete a list element and everything under it
    Delete(DeleteCommand),
    /// Show list
    List,
}

#[derive(Args, Debug)]
pub struct AddCommand {
    /// Element label
    pub text: String,
    /// ID of the element to put this one under
    #[arg(short, long)]
    pub parent: Option<u32>,
}

#[derive(Args, Debug)]
pub struct MarkCommand {
    /// ID to modify
    pub id: u32,
    /// Clear the mark instead of setting it
    #[arg(short, long)]
    pub unmark: bool,
}

#[derive(Args, Debug)]
pub struct DeleteCommand {
    /// ID to delete
    pub id: u32,
}

/// Thin wrapper over the server's HTTP API
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self {
            http: Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn list(&self) -> anyhow::Result<Vec<Todo>> {
        let resp = check(self.http.get(self.url("/todos")).send().await?).await?;
        Ok(resp.json().await?)
    }

    pub async fn add(&self, text: String, parent_id: Option<u32>) -> anyhow::Result<Todo> {
        let resp = self
            .http
            .post(self.url("/todos"))
            .json(&AddRequest { text, parent_id })
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn mark(&self, id: u32, mark: bool) -> anyhow::Result<()> {
        let resp = self
            .http
            .post(self.url(&format!("/todos/{}/mark", id)))
            .json(&MarkRequest { mark })
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    pub async fn delete(&self, id: u32) -> anyhow::Result<()> {
        let resp = self.http.delete(self.url(&format!("/todos/{}", id))).send().await?;
        check(resp).await?;
        Ok(())
    }
}

/// Turn non-2xx responses into errors carrying the server's message
async fn check(resp: Response) -> anyhow::Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or(body);
    anyhow::bail!("server returned {}: {}", status, message)
}

/// Render the list as an indented tree, one line per item
pub fn render_tree(todos: &[Todo]) -> String {
    let mut out = String::new();
    for (todo, depth) in flatten_tree(todos) {
        let indent = " ".repeat(depth * 4);
        let marker = if todo.mark { "X" } else { "_" };
        out.push_str(&format!("{}{}. {} {}\n", indent, todo.id, todo.text, marker));
    }
    out
}

/// Execute one parsed command against the server
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let client = ApiClient::new(&cli.server);

    match cli.command {
        Command::Add(AddCommand { text, parent }) => {
            let todo = client.add(text, parent).await?;
            tracing::debug!(id = todo.id, "added");
            println!("{}. {}", todo.id, todo.text);
        }
        Command::Mark(MarkCommand { id, unmark }) => {
            client.mark(id, !unmark).await?;
        }
        Command::Delete(DeleteCommand { id }) => {
            client.delete(id).await?;
        }
        Command::List => {
            let todos = client.list().await?;
            if todos.is_empty() {
                println!("Nothing to do");
            } else {
                print!("{}", render_tree(&todos));
            }
        }
    }

    Ok(())
}
