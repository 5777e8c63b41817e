use anyhow::Result;
use auto_driving_cars::controller::{Controller, TermPrompt};

fn main() -> Result<()> {
    init_tracing();
    Controller::new(TermPrompt::new()).run()?;
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
