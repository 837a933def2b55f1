use crate::board::Counts;
use crate::board::Field;
use crate::board::Shot;
use crate::player::Player;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::web;
use std::time::Duration;
use std::time::Instant;

/// the player protocol: one endpoint, dispatched on Action.
/// parameter names are fixed by the tournament host.
#[derive(serde::Deserialize)]
pub struct Request {
    #[serde(rename = "Action")]
    action: Option<String>,
    #[serde(rename = "Rows")]
    rows: Option<String>,
    #[serde(rename = "Cols")]
    cols: Option<String>,
    #[serde(rename = "Shots")]
    shots: Option<String>,
    #[serde(rename = "Ships")]
    ships: Option<String>,
}

pub struct Server {
    pub host: String,
    pub port: u16,
    pub route: String,
    pub timeout: Duration,
}

impl Server {
    pub async fn run(self) -> std::io::Result<()> {
        let player = web::Data::new(Player::with_timeout(self.timeout));
        let route = self.route.clone();
        log::info!("serving player on {}:{}{}", self.host, self.port, route);
        HttpServer::new(move || {
            App::new()
                .app_data(player.clone())
                .route(&route, web::get().to(handle))
                .route(&route, web::post().to(handle))
        })
        .bind((self.host.as_str(), self.port))?
        .run()
        .await
    }
}

async fn handle(
    player: web::Data<Player>,
    http: HttpRequest,
    query: web::Query<Request>,
) -> impl Responder {
    let begin = Instant::now();
    let action = query.action.clone().unwrap_or_default();
    let query = query.into_inner();
    let outcome = web::block(move || respond(&player, &query))
        .await
        .expect("player worker");
    let peer = http
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_default();
    match &outcome {
        Ok(response) => log::info!(
            "{} {} ok {:?} {:.3}s",
            peer,
            action,
            response,
            begin.elapsed().as_secs_f64()
        ),
        Err(diagnostic) => log::info!(
            "{} {} failed {} {:.3}s",
            peer,
            action,
            diagnostic,
            begin.elapsed().as_secs_f64()
        ),
    }
    match outcome {
        Ok(response) => HttpResponse::Ok().content_type("text/plain").body(response),
        Err(diagnostic) => HttpResponse::Ok()
            .content_type("text/plain")
            .body(format!("ERROR: {}!\n", diagnostic)),
    }
}

/// bad input answers 200 with a diagnostic body; the
/// tournament host reads the error text, not the status.
/// parse failures stop here and never reach the solver.
fn respond(player: &Player, request: &Request) -> Result<String, String> {
    match request.action.as_deref() {
        None => Err("no Action parameter supplied".to_string()),
        Some("Ships") => Ok(player.setup().notation()),
        Some("Fire") => {
            let rows = request.rows.as_deref().ok_or("no Rows parameter supplied")?;
            let rows = Counts::try_from(rows).map_err(|_| "invalid row count data")?;
            let cols = request.cols.as_deref().ok_or("no Cols parameter supplied")?;
            let cols = Counts::try_from(cols).map_err(|_| "invalid column count data")?;
            let shots = request
                .shots
                .as_deref()
                .ok_or("no Shots parameter supplied")?;
            let shots = Shot::parse_all(shots).map_err(|_| "invalid shot data")?;
            player
                .shoot(&rows, &cols, &shots)
                .map(|coord| coord.to_string())
                .map_err(|e| e.to_string())
        }
        Some("Finished") => {
            let ships = request
                .ships
                .as_deref()
                .ok_or("no Ships parameter supplied")?;
            let field = Field::try_from(ships).map_err(|_| "invalid ship data")?;
            player.finished(&field);
            Ok(String::new())
        }
        Some(_) => Err("unknown Action value supplied".to_string()),
    }
}
