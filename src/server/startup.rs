use crate::server::{
    config::Config,
    error::AppError,
    model::user::CreateUserParams,
    service::user::UserService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date before
/// the first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures an admin account exists.
///
/// When no admin exists and `ADMIN_EMAIL`/`ADMIN_PASSWORD` are configured, creates an admin
/// with those credentials. When none exists and nothing is configured, logs a warning.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration holding the optional admin credentials
///
/// # Returns
/// - `Ok(())` - An admin exists or could not be created for lack of credentials
/// - `Err(AppError)` - Database or hashing error while creating the admin
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    let user_service = UserService::new(db);

    if user_service.admin_exists().await? {
        return Ok(());
    }

    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::warn!(
            "No admin user exists. Set ADMIN_EMAIL and ADMIN_PASSWORD to create one on startup."
        );
        return Ok(());
    };

    let admin = user_service
        .create(
            CreateUserParams {
                first_name: "Admin".to_string(),
                last_name: "Admin".to_string(),
                email: email.clone(),
                password: password.clone(),
            },
            true,
        )
        .await?;

    tracing::info!("Created initial admin user {} ({})", admin.email, admin.id);

    Ok(())
}
