use std::io;

use actix_web::{web, App, HttpServer};
use castellers::{
    config::Config,
    db::{init_db_pool, AdminStore},
    handlers,
    service::log::{init_logger, LoggerMiddleware},
    state::AppState,
};
use dotenv::dotenv;
use log::{error, info};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    init_logger();

    let config = Config::from_env().map_err(|e| {
        error!("{}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    let pool = init_db_pool(&config.database_url, config.max_connections)
        .await
        .map_err(|e| {
            error!("failed to open database {}: {}", config.database_url, e);
            io::Error::new(io::ErrorKind::Other, e)
        })?;

    if let Some(admin) = &config.bootstrap_admin {
        AdminStore::new(pool.clone())
            .insert(admin)
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        info!("bootstrap admin {} registered", admin);
    }

    let state = web::Data::new(AppState::new(pool));
    info!("listening on {}:{}", config.bind_addr, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(LoggerMiddleware)
            .configure(handlers::config)
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await
}
