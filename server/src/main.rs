use actix_web::{App, HttpServer, middleware};
use clap::Parser;
use log::info;
use server::{Config, configure};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    info!("Listening on {}:{}", config.bind_address, config.port);

    let mut server = HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server
        .bind((config.bind_address.as_str(), config.port))?
        .run()
        .await
}
