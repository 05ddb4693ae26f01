use tracing::{error, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub struct Logger {}

impl Logger {
    pub fn initialize() -> anyhow::Result<()> {
        Self::set_subscriber()?;

        std::panic::set_hook(Box::new(|panic| {
            // If the panic has a source location, record it as structured fields.
            if let Some(location) = panic.location() {
                error!(
                    message = %panic,
                    panic.file = location.file(),
                    panic.line = location.line(),
                    panic.column = location.column(),
                );
            } else {
                error!(message = %panic);
            }
        }));

        Ok(())
    }

    fn set_subscriber() -> anyhow::Result<()> {
        let filter = EnvFilter::from_default_env()
            .add_directive("serenity=warn".parse()?)
            .add_directive("tracing=warn".parse()?)
            .add_directive(Level::INFO.into());

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::Layer::new().with_writer(std::io::stdout).pretty())
            .init();

        Ok(())
    }
}
