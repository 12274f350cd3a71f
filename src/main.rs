mod handlers;
mod models;
mod routes;
mod utils;

use axum::serve;
use routes::make_app;
use tokio::net::TcpListener;
use utils::config::Config;

#[tokio::main]
async fn main() {
    let config = Config::init();
    let addr = config.bind_addr();
    let base_url = config.public_base_url();

    let app = match make_app(config).await {
        Ok(app) => app,
        Err(err) => {
            eprintln!("Failed to initialize application: {err}");
            std::process::exit(1);
        }
    };

    // Bind to a TCP listener
    let listener = TcpListener::bind(&addr).await;
    println!("Server is running on {base_url}");

    match listener {
        Ok(res) => serve(res, app).await.unwrap(),
        Err(err) => panic!("{}", err),
    }
}
