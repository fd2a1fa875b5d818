use clap::Args;
use tenantry_app::{
    database,
    domain::administrators::{AdministratorsService, PgAdministratorsService},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct ToggleStatusArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Administrator UUID
    #[arg(long)]
    uuid: Uuid,
}

pub(crate) async fn run(args: ToggleStatusArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let administrator = PgAdministratorsService::new(pool)
        .toggle_status(args.uuid.into())
        .await
        .map_err(|error| format!("failed to toggle administrator status: {error}"))?;

    println!("administrator_uuid: {}", administrator.uuid);
    println!("is_active: {}", administrator.is_active);

    Ok(())
}
