mod app;

use log::error;

use app::App;

#[tokio::main]
async fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut app = match App::new("charlie").await {
        Ok(app) => app,
        Err(error) => {
            error!("{}", error);
            return;
        }
    };

    tokio::select! {
        _ = app.run() => {}
        _ = tokio::signal::ctrl_c() => {}
    }

    app.stop();
}
