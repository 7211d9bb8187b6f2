mod assets;
mod prelude;
mod server;
mod setup;
mod store;

use self::prelude::*;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ASSETS: &str = "assets";

#[derive(clap::Parser)]
struct Opts {
    /// Port to listen on. Takes priority over the `PORT` variable.
    port: Option<u16>,
}

struct AppConfig {
    port: u16,
    assets_path: PathBuf,
}

impl AppConfig {
    fn from_env(opts: Opts) -> Result<Self> {
        let port = match opts.port {
            Some(port) => port,
            None => match dotenv::var("PORT") {
                Ok(port) => port
                    .parse()
                    .with_context(|| format!("when parsing PORT={:?}", port))?,
                Err(_) => {
                    warn!("PORT environment variable is not set, using default");
                    DEFAULT_PORT
                }
            },
        };

        let assets_path: String = dotenv::var("ASSETS_PATH").unwrap_or_else(|_| {
            warn!("ASSETS_PATH environment variable is not set, using default");
            DEFAULT_ASSETS.to_owned()
        });

        Ok(Self {
            port,
            assets_path: PathBuf::from(assets_path),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let opts: Opts = clap::Parser::parse();

    setup::setup()?;

    let config = AppConfig::from_env(opts)?;
    info!("Assets: {:?}", config.assets_path);

    let assets = assets::Assets::load(&config.assets_path)
        .with_context(|| format!("when loading assets from {:?}", config.assets_path))?;

    server::run(config.port, assets)
        .await
        .context("server error")
}
