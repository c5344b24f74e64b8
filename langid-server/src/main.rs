use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use serde::{Deserialize, Serialize};

use langid_core::{LangIdError, LangMatcher, ModelParams};

/// HTTP language detection service over one model directory.
#[derive(Parser)]
#[command(name = "langid-server", version, about)]
struct Config {
	/// Model directory named "<n>-<limit>"
	#[arg(short, long, env = "LANGID_MODEL_DIR")]
	model_dir: PathBuf,

	#[arg(long, env = "LANGID_HOST", default_value = "127.0.0.1")]
	host: String,

	#[arg(long, env = "LANGID_PORT", default_value_t = 5000)]
	port: u16,
}

/// Body of the `/v1/score` endpoint
#[derive(Deserialize)]
struct ScoreRequest {
	text: String,
	k_best: Option<usize>,
}

#[derive(Serialize)]
struct ParamsResponse {
	model_dir: String,
	params: ModelParams,
	profiles: usize,
}

/// HTTP GET endpoint `/v1/models`
///
/// Lists the loaded language labels, one per line.
#[get("/v1/models")]
async fn get_models(matcher: web::Data<LangMatcher>) -> impl Responder {
	HttpResponse::Ok().body(matcher.labels().collect::<Vec<_>>().join("\n"))
}

#[get("/v1/params")]
async fn get_params(matcher: web::Data<LangMatcher>) -> impl Responder {
	HttpResponse::Ok().json(ParamsResponse {
		model_dir: matcher.model_dir().display().to_string(),
		params: matcher.params(),
		profiles: matcher.len(),
	})
}

/// HTTP POST endpoint `/v1/score`
///
/// Ranks the posted text against every profile and returns the
/// `k_best` (default 1) best scores as JSON.
#[post("/v1/score")]
async fn post_score(matcher: web::Data<LangMatcher>, request: web::Json<ScoreRequest>) -> impl Responder {
	let k_best = request.k_best.unwrap_or(1);
	match matcher.score(&request.text, k_best) {
		Ok(scores) => HttpResponse::Ok().json(scores),
		Err(e @ LangIdError::EmptyProfile) => HttpResponse::UnprocessableEntity().body(e.to_string()),
		Err(e) => {
			log::error!("Scoring failed: {e}");
			HttpResponse::InternalServerError().body(e.to_string())
		}
	}
}

/// Main entry point for the server.
///
/// Loads the matcher once and shares it read-only between all workers;
/// scoring never mutates it, so no lock is needed.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let config = Config::parse();

	let matcher = LangMatcher::new(&config.model_dir)
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
	let shared_matcher = web::Data::new(matcher);

	log::info!("Serving {} on {}:{}", config.model_dir.display(), config.host, config.port);

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET", "POST"]))
			.app_data(shared_matcher.clone())
			.service(get_models)
			.service(get_params)
			.service(post_score)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
