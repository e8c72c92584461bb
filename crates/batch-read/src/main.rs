use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = batch_read::arguments::Arguments::parse();
    observe::initialize(&args.log_filter, tracing::Level::ERROR.into());
    tracing::info!("running batch-read with validated arguments:\n{}", args);
    batch_read::run(args).await
}
