use anyhow::Result;
use timeplot::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging is only wired up when the user asked for it;
    // normal runs keep the plain console output of the msg_* macros.
    if timeplot::libs::messages::macros::is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    Cli::menu().await
}
