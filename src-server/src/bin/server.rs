use todo_server_lib::{config::Config, init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    run(config).await?;

    Ok(())
}
