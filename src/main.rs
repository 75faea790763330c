use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use st2py::api::{configure_routes, AppState};
use st2py::banner;
use st2py::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    // A missing .env is fine; the defaults cover local use.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  No .env file loaded: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;
    let bind = (config.host.clone(), config.port);
    let state = AppState::new(config);

    println!("🚀 Starting server...");
    println!("📝 Converter page available at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(bind)?
    .run()
    .await
}
