use actix_files::{Files, NamedFile};
use actix_web::{error::InternalError, web, HttpRequest, HttpResponse, Responder};
use log::{error, info};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::collector;
use crate::inference::Predictor;
use crate::models::{ApiResponse, FormInput, PredictionRequest};
use crate::presenter::{self, RenderedResult};

/// What every user sees when the model misbehaves; details only go to the log.
pub const PREDICTION_FAILED: &str = "Prediction failed";

pub struct AppState {
    pub predictor: Predictor,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(predictor: Predictor, static_dir: impl Into<PathBuf>) -> Self {
        AppState { predictor, static_dir: static_dir.into() }
    }
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub request: PredictionRequest,
    pub result: RenderedResult,
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success("✅ API de prédiction du burnout"))
}

async fn model_info(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(state.predictor.get_model_info()))
}

async fn form_schema() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(collector::form()))
}

async fn predict_burnout(state: web::Data<AppState>, form: web::Json<FormInput>) -> impl Responder {
    let start_time = Instant::now();
    let request = collector::collect(&form.into_inner());
    info!("Nouvelle requête de prédiction: {:?}", request.to_array());

    let predictor = state.predictor.clone();
    let outcome = web::block(move || {
        predictor
            .predict(&request)
            .and_then(|class| presenter::present(class.index()))
    })
    .await;

    match outcome {
        Ok(Ok(result)) => {
            info!("Prédiction réussie: {}", result.label);
            let response = ApiResponse::success(PredictionResponse { request, result });
            HttpResponse::Ok().json(response.timed(start_time))
        }
        Ok(Err(e)) => {
            error!("Erreur de prédiction: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<PredictionResponse>::error(PREDICTION_FAILED).timed(start_time))
        }
        Err(e) => {
            error!("Erreur d'exécution bloquante: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<PredictionResponse>::error(PREDICTION_FAILED).timed(start_time))
        }
    }
}

async fn index(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    match NamedFile::open_async(state.static_dir.join("index.html")).await {
        Ok(file) => file.into_response(&req),
        Err(e) => {
            error!("Erreur chargement interface: {}", e);
            HttpResponse::InternalServerError().body("Erreur chargement interface")
        }
    }
}

async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ApiResponse::<String>::error("Endpoint non trouvé"))
}

pub fn configure(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    let json_config = web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| {
            let message = format!("Requête invalide: {}", err);
            InternalError::from_response(err, HttpResponse::BadRequest().json(ApiResponse::<()>::error(&message)))
                .into()
        });

    cfg.app_data(json_config)
        .route("/api/health", web::get().to(health_check))
        .route("/api/model-info", web::get().to(model_info))
        .route("/api/form", web::get().to(form_schema))
        .route("/api/predict", web::post().to(predict_burnout))
        .route("/", web::get().to(index))
        .service(Files::new("/static", static_dir).prefer_utf8(true))
        .default_service(web::route().to(not_found));
}
