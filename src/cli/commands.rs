//! Command dispatch: one operation per invocation

use clap::CommandFactory;
use tracing::debug;

use crate::cli::args::{Cli, Operation};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

/// Execute the operation selected on the command line.
///
/// Usage violations are reported before any external process starts.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(operation) = cli.operation() else {
        // No operation selected: show usage and fail with a usage error.
        Cli::command().print_help().ok();
        return Err(CliError::Usage(
            "exactly one of --encrypt, --decrypt, --clean is required".into(),
        ));
    };

    let settings = Settings::load()?;
    debug!("execute_command: settings={:?}", settings);
    let container = ServiceContainer::new(settings);

    match operation {
        Operation::Encrypt(file) => {
            let dest = container.crypto.encrypt(&file)?;
            output::action("Encrypted", &dest.display());
        }
        Operation::Decrypt(file) => {
            let dest = container.crypto.decrypt(&file)?;
            output::action("Decrypted", &dest.display());
        }
        Operation::Clean => {
            container.clean.clean()?;
            output::success("removed untracked files from the working tree");
        }
    }
    Ok(())
}
