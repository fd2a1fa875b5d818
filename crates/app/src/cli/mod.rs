use clap::{Parser, Subcommand};

mod administrator;
mod db;
mod role;

#[derive(Debug, Parser)]
#[command(name = "tenantry-app", about = "Tenantry CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Administrator(administrator::AdministratorCommand),
    Role(role::RoleCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Administrator(command) => administrator::run(command).await,
            Commands::Role(command) => role::run(command).await,
        }
    }
}
