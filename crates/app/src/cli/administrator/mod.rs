use clap::{Args, Subcommand};

mod create;
mod toggle_status;

#[derive(Debug, Args)]
pub(crate) struct AdministratorCommand {
    #[command(subcommand)]
    command: AdministratorSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdministratorSubcommand {
    Create(create::CreateAdministratorArgs),
    ToggleStatus(toggle_status::ToggleStatusArgs),
}

pub(crate) async fn run(command: AdministratorCommand) -> Result<(), String> {
    match command.command {
        AdministratorSubcommand::Create(args) => create::run(args).await,
        AdministratorSubcommand::ToggleStatus(args) => toggle_status::run(args).await,
    }
}
