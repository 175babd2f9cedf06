use crisis_compass_backend::api::{HealthApi, RequestsApi};
use crisis_compass_backend::app_data::AppData;
use crisis_compass_backend::config;
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    if let Err(e) = config::init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Connect to database and bring the schema up to date
    let db = config::init_database()
        .await
        .expect("Failed to connect to database");

    config::migrate_database(&db)
        .await
        .expect("Failed to run migrations");

    let app_data = AppData::init(db);

    let requests_api = RequestsApi::new(app_data.request_store.clone());

    // Create OpenAPI service with API implementation
    let api_service = OpenApiService::new((HealthApi, requests_api), "Item Requests API", "1.0.0")
        .server("http://localhost:3000/api");

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui);

    tracing::info!("Starting server on http://0.0.0.0:3000");
    tracing::info!("Swagger UI available at http://localhost:3000/swagger");

    // Start Poem server with composed routes
    Server::new(TcpListener::bind("0.0.0.0:3000"))
        .run(app)
        .await
}
