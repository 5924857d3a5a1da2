//! Main entry point for the MediCamp backend server.
//! This crate wires the REST API endpoints for the medical camp registration platform.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpResponse, HttpServer, middleware::Logger, web};
use auth_services::middleware::{AuthMiddleware, OrganizerGuard};
use postgres::database::*;
use stripe_api::StripeClient;
use web_handlers::*;

async fn api_index() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "MediCamp server is running",
        "status": "running"
    })))
}

fn cors_from_env() -> Cors {
    let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173".to_string());

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600);

    for origin in allowed_origins.split(',') {
        cors = cors.allowed_origin(origin.trim());
    }

    cors
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("🚀 Starting MediCamp server...");

    // Create database connection pool
    let pool = match create_connection_pool().await {
        Ok(pool) => {
            log::info!("🗃️ Database pool created successfully");

            if let Err(e) = test_connection(&pool).await {
                log::error!("❌ Database connection test failed: {}", e);
            }
            pool
        }
        Err(e) => {
            log::error!("❌ Failed to create database pool: {}", e);
            log::error!("💡 Make sure PostgreSQL is running and DATABASE_URL is set");
            std::process::exit(1);
        }
    };

    // Create payment processor client
    let stripe_client = match StripeClient::from_env() {
        Ok(client) => {
            log::info!("💳 Stripe client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize Stripe client: {}", e);
            log::error!("💡 Set STRIPE_SECRET_KEY in the environment");
            std::process::exit(1);
        }
    };
    let stripe_client = web::Data::new(stripe_client);

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    log::info!("🌐 Server will be available at: http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(stripe_client.clone())
            .wrap(cors_from_env())
            .wrap(Logger::default())
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/auth")
                            .route("/health", web::get().to(auth_health))
                            .route("/token", web::post().to(issue_token))
                            .route("/logout", web::post().to(logout)),
                    )
                    // Public sign-in flow and user routes
                    .service(
                        web::scope("/users")
                            .route("", web::post().to(create_user))
                            .route("/exists", web::get().to(user_exists))
                            .service(
                                web::resource("/{email}")
                                    .wrap(AuthMiddleware)
                                    .route(web::get().to(get_user))
                                    .route(web::put().to(update_profile)),
                            ),
                    )
                    // Public camp browse surface; the join counter requires a token
                    .service(
                        web::scope("/camps")
                            .route("", web::get().to(list_camps))
                            .route("/popular", web::get().to(popular_camps))
                            .route("/upcoming", web::get().to(upcoming_camps))
                            .service(
                                web::resource("/{id}/increment")
                                    .wrap(AuthMiddleware)
                                    .route(web::patch().to(increment_participant_count)),
                            )
                            .route("/{id}", web::get().to(get_camp)),
                    )
                    // Public feedback wall; submissions require a token
                    .route("/feedback", web::get().to(list_feedback))
                    .service(
                        web::scope("/feedback")
                            .wrap(AuthMiddleware)
                            .route("", web::post().to(submit_feedback))
                            .route(
                                "/participant/{email}",
                                web::get().to(participant_feedback),
                            ),
                    )
                    // Registration routes (require authentication)
                    .service(
                        web::scope("/registrations")
                            .wrap(AuthMiddleware)
                            .route("", web::post().to(create_registration))
                            .route(
                                "/participant/{email}",
                                web::get().to(participant_registrations),
                            )
                            .route("/{id}/payment-status", web::put().to(update_payment_status))
                            .route("/{id}", web::get().to(get_registration))
                            .route("/{id}", web::delete().to(cancel_registration)),
                    )
                    .service(
                        web::scope("/analytics")
                            .wrap(AuthMiddleware)
                            .route("/{email}", web::get().to(participant_analytics)),
                    )
                    // Payment routes (require authentication)
                    .service(
                        web::scope("/payments")
                            .wrap(AuthMiddleware)
                            .route("/intent", web::post().to(create_payment_intent))
                            .route("", web::post().to(record_payment))
                            .route("/{email}", web::get().to(payment_history)),
                    )
                    // Organizer dashboard routes (require the organizer role)
                    .service(
                        web::scope("/manage")
                            .wrap(OrganizerGuard)
                            .route("/camps", web::get().to(manage_camps))
                            .route("/camps", web::post().to(create_camp))
                            .route("/camps/{id}", web::put().to(update_camp))
                            .route("/camps/{id}", web::delete().to(delete_camp))
                            .route("/registrations", web::get().to(list_registrations))
                            .route(
                                "/registrations/{id}/confirm",
                                web::put().to(confirm_registration),
                            )
                            .route("/feedback/{id}", web::delete().to(delete_feedback))
                            .route("/users", web::get().to(list_users)),
                    ),
            )
            .route(
                "/health",
                web::get().to(|| async { HttpResponse::Ok().body("OK") }),
            )
            .route("/", web::get().to(api_index))
    })
    .bind(bind_addr)?
    .run()
    .await
}
