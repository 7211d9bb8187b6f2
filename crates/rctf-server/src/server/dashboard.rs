use super::*;

pub fn route(router: Router) -> Router {
    router.route("/dashboard", get(dashboard))
}

async fn dashboard(
    Identity(identity): Identity,
    State(app): State<Arc<App>>,
) -> Result<Html<String>> {
    app.render(DASHBOARD_TEMPLATE, Dashboard::for_identity(&identity))
}
