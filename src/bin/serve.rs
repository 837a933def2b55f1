use clap::Parser;
use flotilla::server::Server;

/// HTTP front-end for the battleship player.
#[derive(Parser)]
struct Args {
    /// interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// port to bind
    #[arg(long, default_value_t = 14000)]
    port: u16,
    /// root path for the player endpoint
    #[arg(long, default_value = "/player")]
    route: String,
    /// move timeout in seconds
    #[arg(long, default_value_t = 4.8)]
    timeout: f64,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    flotilla::init();
    let args = Args::parse();
    Server {
        host: args.host,
        port: args.port,
        route: args.route,
        timeout: std::time::Duration::from_secs_f64(args.timeout),
    }
    .run()
    .await
}
