mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let config = config::AppConfig::from_env();

    log::info!("🚀 Starting Travel Tide Service...");
    log::info!("📊 Database: {}", config.database);

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&config.mongodb_uri, &config.database)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db);

    log::info!("✅ MongoDB connected successfully");

    log::info!(
        "🌐 travel tide version 2.0 server is running on port: {}",
        config.port
    );
    log::info!(
        "📚 Swagger UI available at: http://{}:{}/swagger-ui/",
        config.host,
        config.port
    );
    log::info!(
        "📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json",
        config.host,
        config.port
    );

    // Start HTTP server
    HttpServer::new(move || {
        // CORS liberado para qualquer origem
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Liveness banner
            .route("/", web::get().to(api::health::liveness))
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Tourist spots: Southeast Asia catalog (MongoDB)
            .service(
                web::scope("/tourist-spot")
                    .route("", web::get().to(api::tourist_spots::get_tourist_spots))
                    .route("", web::post().to(api::tourist_spots::create_tourist_spot))
                    .route("/country/{country_name}", web::get().to(api::tourist_spots::get_spots_by_country))
                    .route("/{id}", web::get().to(api::tourist_spots::get_tourist_spot))  // DEVE FICAR POR ÚLTIMO (catch-all)
                    .route("/{id}", web::delete().to(api::tourist_spots::delete_tourist_spot))
            )
            // Countries: Global catalog (READ ONLY)
            .route("/countries", web::get().to(api::countries::get_countries))
            // My list: Spots saved per user, keyed by email
            .service(
                web::scope("/my-list")
                    .route("", web::get().to(api::my_list::get_my_list))
                    .route("/{id}", web::get().to(api::my_list::get_my_list_spot))
                    .route("/{id}", web::put().to(api::my_list::update_my_list_spot))
            )
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
