use actix_cors::Cors;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use log::{error, info};

use burnout_predictor::config::AppConfig;
use burnout_predictor::inference::Predictor;
use burnout_predictor::routes::{self, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    info!("🚀 Démarrage du service de prédiction du burnout");

    let config = AppConfig::from_env();

    // Sans modèle le service n'a aucun sens: on s'arrête ici.
    let predictor = match Predictor::load(&config.model_path) {
        Ok(predictor) => {
            info!("✅ Modèle ONNX chargé avec succès");
            predictor
        }
        Err(e) => {
            error!("❌ {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()));
        }
    };

    let state = web::Data::new(AppState::new(predictor, config.static_dir.clone()));
    let bind_address = config.bind_address();

    info!("🌐 Serveur démarré sur: http://{}", bind_address);
    info!("👷 Workers: {}", config.workers);
    info!("📊 Interface disponible sur: http://{}/", bind_address);
    info!("🔧 Endpoints API:");
    info!("   GET  /api/health      - Vérification santé");
    info!("   GET  /api/model-info  - Information modèle");
    info!("   GET  /api/form        - Description du formulaire");
    info!("   POST /api/predict     - Prédiction");

    let static_dir = config.static_dir.clone();
    let origin = format!("http://{}", bind_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&origin)
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(cors)
            .app_data(state.clone())
            .configure(|cfg| routes::configure(cfg, &static_dir))
    })
    .workers(config.workers)
    .bind(&bind_address)?
    .run()
    .await
}
