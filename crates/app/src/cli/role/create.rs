use clap::Args;
use tenantry_app::{
    database,
    domain::administrators::{
        AdministratorsService, PgAdministratorsService, data::NewAdministratorRole,
    },
};

#[derive(Debug, Args)]
pub(crate) struct CreateRoleArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Role display name
    #[arg(long)]
    name: String,
}

pub(crate) async fn run(args: CreateRoleArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let role = PgAdministratorsService::new(pool)
        .create_role(NewAdministratorRole { name: args.name })
        .await
        .map_err(|error| format!("failed to create role: {error}"))?;

    println!("role_uuid: {}", role.uuid);
    println!("role_name: {}", role.name);

    Ok(())
}
