use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use assessment_server::{
    app_state::AppState, config::Config, graphql, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    config
        .validate_for_production()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;

    let state = AppState::new(config.clone())
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let schema = graphql::create_schema(state.clone());

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    log::info!(
        "Starting HTTP server on http://{}:{}",
        bind_address.0,
        bind_address.1
    );
    log::info!(
        "GraphiQL playground: http://{}:{}/graphiql",
        bind_address.0,
        bind_address.1
    );

    let allowed_origin = config.cors_allowed_origin.clone();
    HttpServer::new(move || {
        let cors = if allowed_origin == "*" {
            Cors::default().allow_any_origin()
        } else {
            Cors::default().allowed_origin(&allowed_origin)
        };
        let cors = cors
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .expose_headers(vec![header::HeaderName::from_static(
                assessment_server::middleware::REQUEST_ID_HEADER,
            )])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure)
            .configure(graphql::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
