pub mod routes;
pub mod store;
pub mod telemetry;
pub mod time;

use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::dev::{Server, ServiceRequest, ServiceResponse, fn_service};
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use sqlx::PgPool;
use std::net::TcpListener;
use std::path::PathBuf;

use crate::time::TimeSource;

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub async fn build(
    config: &mut Config,
    time_source: TimeSource,
) -> anyhow::Result<Server> {
    let db_pool = web::Data::new(
        PgPool::connect(&config.database_url)
            .await
            .context("Failed to connect to the database")?,
    );
    let time_source = web::Data::new(time_source);

    // Clone config values for use in closure
    let allowed_origins = config.allowed_origins.clone();
    let static_dir = config.static_dir.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.iter().any(|origin| origin == "*") {
            // Allow any origin (for development)
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
        } else {
            let mut cors =
                Cors::default().allow_any_method().allow_any_header();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        let app = App::new()
            .wrap(cors)
            .app_data(routes::json_config())
            .app_data(routes::path_config())
            .configure(routes::api_services)
            .app_data(db_pool.clone())
            .app_data(time_source.clone());

        // The dashboard is served last so API routes take precedence.
        match &static_dir {
            Some(dir) => app.service(dashboard_files(dir.clone())),
            None => app,
        }
    })
    .listen(listener)?
    .run();
    Ok(server)
}

/// Static files for the dashboard. Unknown paths fall back to index.html so
/// client-side routes like /admin survive a page reload.
fn dashboard_files(dir: PathBuf) -> Files {
    let index = dir.join("index.html");
    Files::new("/", dir).index_file("index.html").default_handler(
        fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(index).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            }
        }),
    )
}

pub struct Config {
    pub database_url: String,
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
    /// Directory holding the built dashboard, served at `/` when set.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string()) // Default to allow any origin for development
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let port = match var("PORT") {
            Ok(port) => port.parse().context("PORT must be a valid port")?,
            Err(_) => 8000,
        };

        Ok(Config {
            database_url: var("DATABASE_URL").context("DATABASE_URL not set")?,
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            allowed_origins,
            static_dir: var("STATIC_DIR").ok().map(PathBuf::from),
        })
    }
}
