//! src/startup.rs
use crate::configuration::Settings;
use crate::repository::{InMemoryUserRepository, UserRepository};
use crate::routes::{health_check, register};
use crate::usecases::RegisterUserOnMailingList;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, std::io::Error> {
    let address = format!("{}:{}", config.application.host, config.application.port);
    let tcp_listener = TcpListener::bind(address).expect("Failed to bind port");
    let port = tcp_listener.local_addr().unwrap().port();

    // The default wiring keeps the mailing list in process memory; a durable
    // store plugs in through the same trait.
    let repository = Arc::new(InMemoryUserRepository::new(Vec::new()));

    let server = run(tcp_listener, repository)?;

    Ok(Application { port, server })
}

pub fn run(
    listener: TcpListener,
    repository: Arc<dyn UserRepository>,
) -> Result<Server, std::io::Error> {
    let usecase = web::Data::new(RegisterUserOnMailingList::new(repository));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/register", web::post().to(register))
            .app_data(usecase.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
