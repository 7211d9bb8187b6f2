mod auth;
mod dashboard;
mod download;
mod error;
mod recipe;


use self::{auth::Identity, error::RequestResult as Result};

use crate::{assets::*, prelude::*, store::CredentialStore};

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, MethodRouter},
    Form,
};
use tower_http::trace::TraceLayer;

type Router = axum::Router<Arc<App>>;

pub struct App {
    pub assets: Assets,
}

impl App {
    fn render(&self, template: &str, context: impl Serialize) -> Result<Html<String>> {
        let html = self.assets.templates.get_template(template)?.render(context)?;
        Ok(Html(html))
    }

    fn not_found(&self) -> Response {
        (StatusCode::NOT_FOUND, Html(self.assets.not_found.clone())).into_response()
    }
}

/// `302 Found` pointing at `location`.
fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

pub async fn run(port: u16, assets: Assets) -> color_eyre::Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    info!("Server starting on http://localhost:{}", port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("when binding a tcp listener")?;

    axum::serve(listener, app(Arc::new(App { assets }))).await?;
    Ok(())
}

fn app(app: Arc<App>) -> axum::Router {
    let router = Router::new();
    let router = auth::route(router);
    let router = dashboard::route(router);
    let router = recipe::route(router);
    let router = download::route(router);
    router.layer(TraceLayer::new_for_http()).with_state(app)
}
