mod amount;
mod api;
mod db;
mod editor;
mod models;
mod notify;
mod rest;
mod views;

use dioxus::prelude::*;

use views::{BalanceEditor, DeviceCatalog, Navbar};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    DeviceCatalog {},
    #[route("/:device_id")]
    BalanceEditor { device_id: i64 },
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }
        Router::<Route> {}
    }
}

#[cfg(feature = "server")]
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 0)]
    port: u16,
    #[arg(long, default_value_t = String::from("127.0.0.1"))]
    ip: String,
    #[arg(long, default_value_t = String::from("soldesk.db"))]
    db_path: String,
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;

    env_logger::init();

    let args = Args::parse();
    db::set_db_path(&args.db_path);

    let conn = db::open()?;
    db::init_db(&conn)?;
    db::seed_demo_devices(&conn)?;

    let addr: std::net::SocketAddr = if args.port == 0 {
        dioxus_cli_config::fullstack_address_or_localhost()
    } else {
        format!("{}:{}", args.ip, args.port).parse()?
    };

    let router = axum::Router::new()
        .nest("/api/v1/a", rest::router())
        .serve_dioxus_application(ServeConfigBuilder::default(), App);

    log::info!(
        "Welcome on soldesk, access the web interface at {}",
        format!("http://{}", addr)
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use clap::Parser;

    #[test]
    fn test_args_parsing() {
        use super::Args;
        let args = Args::parse_from(vec![
            "my_program",
            "--port",
            "8080",
            "--ip",
            "0.0.0.0",
            "--db-path",
            "/tmp/soldesk-test.db",
        ]);
        assert_eq!(args.port, 8080);
        assert_eq!(args.ip, "0.0.0.0");
        assert_eq!(args.db_path, "/tmp/soldesk-test.db");
    }

    #[test]
    fn test_args_defaults() {
        use super::Args;
        let args = Args::parse_from(vec!["my_program"]);
        assert_eq!(args.port, 0);
        assert_eq!(args.ip, "127.0.0.1");
        assert_eq!(args.db_path, "soldesk.db");
    }

    #[test]
    fn test_editor_routes() {
        use super::Route;
        use std::str::FromStr;

        assert_eq!(Route::from_str("/").unwrap(), Route::DeviceCatalog {});
        assert_eq!(
            Route::from_str("/42").unwrap(),
            Route::BalanceEditor { device_id: 42 }
        );
    }
}
