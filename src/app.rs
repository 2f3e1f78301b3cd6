use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;
            let mut shell = bootstrap::compose_shell(&context)?;
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
    }

    Ok(())
}
