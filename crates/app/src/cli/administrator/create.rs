use clap::Args;
use tenantry_app::{
    auth::password::Password,
    database,
    domain::administrators::{
        AdministratorsService, PgAdministratorsService, data::NewAdministrator, resolve_role,
    },
};

#[derive(Debug, Args)]
pub(crate) struct CreateAdministratorArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[arg(long)]
    username: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    designation: Option<String>,

    /// Role name, e.g. "Superuser"
    #[arg(long)]
    role: Option<String>,

    /// Initial password; generated and printed once when omitted
    #[arg(long, env = "ADMINISTRATOR_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

pub(crate) async fn run(args: CreateAdministratorArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgAdministratorsService::new(pool);

    let role_uuid = match args.role.as_deref() {
        Some(name) => Some(
            resolve_role(&service, name)
                .await
                .map_err(|error| format!("failed to resolve role '{name}': {error}"))?,
        ),
        None => None,
    };

    let generated = args.password.is_none();
    let password = args.password.map_or_else(Password::generate, Password::new);

    let administrator = service
        .create_administrator(NewAdministrator {
            username: args.username,
            email: args.email,
            password: password.clone(),
            first_name: args.first_name,
            mid_name: None,
            last_name: args.last_name,
            phone: None,
            designation: args.designation,
            role_uuid,
        })
        .await
        .map_err(|error| format!("failed to create administrator: {error}"))?;

    println!("administrator_uuid: {}", administrator.uuid);
    println!("username: {}", administrator.username);

    if let Some(role) = &administrator.role_name {
        println!("role: {role}");
    }

    if generated {
        println!("password: {}", password.expose());
        println!("store this password now; it is only shown once");
    }

    Ok(())
}
