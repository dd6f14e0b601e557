/// Actix HTTP server for the installer frontend.
use crate::config::Config;
use crate::net_info;
use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::{Data, Json};
use actix_web::{get, post, App, HttpResponse, HttpServer};
use envfile::EnvWriter;
use log::{error, info};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
struct IpResponse {
    ip: String,
}

// Used by the frontend to display the LAN access URL.
#[get("/get-ip")]
async fn get_ip() -> HttpResponse {
    HttpResponse::Ok().json(IpResponse {
        ip: net_info::local_ip(),
    })
}

#[post("/save")]
async fn save(writer: Data<EnvWriter>, record: Json<HashMap<String, String>>) -> HttpResponse {
    let record: Vec<(String, String)> = record.into_inner().into_iter().collect();
    match writer.save(&record) {
        Ok(_) => {
            info!(".env file saved at {}", writer.path().display());
            HttpResponse::Ok()
                .content_type("text/plain")
                .body(".env saved successfully!")
        }
        Err(err) => {
            error!("Error writing .env file: {}", err);
            HttpResponse::InternalServerError()
                .content_type("text/plain")
                .body("Failed to save .env.")
        }
    }
}

pub fn env_writer(config: &Config) -> EnvWriter {
    let mut writer = EnvWriter::new(&config.env.path, config.env.strategy);
    writer.force_set("DATA_DIR", &config.env.data_dir);
    writer
}

pub async fn start(config: &Config) -> std::io::Result<()> {
    let writer = Data::new(env_writer(config));
    let root_path = config.http.root_path.clone();

    info!(
        "Starting installer server from {} on {}:{}",
        root_path, config.general.host, config.general.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(writer.clone())
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(get_ip)
            .service(save)
            .service(Files::new("/", &root_path).index_file("index.html"))
    })
    .bind((config.general.host.as_str(), config.general.port))?
    .run()
    .await
}
