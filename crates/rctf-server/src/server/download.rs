use super::*;

pub fn route(router: Router) -> Router {
    router
        .route("/download/", get(download))
        .route("/download/*filename", get(download))
}

async fn download(
    _: Identity,
    State(app): State<Arc<App>>,
    filename: Option<Path<String>>,
) -> Response {
    let filename = filename.map(|Path(name)| name).unwrap_or_default();
    if filename != REWARD_FILENAME {
        debug!("Download {:?} not found", filename);
        return app.not_found();
    }

    info!("Serving {}", REWARD_FILENAME);
    let reward = &app.assets.reward;
    (
        [
            (header::CONTENT_TYPE, "application/zip".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", REWARD_FILENAME),
            ),
            (header::CONTENT_LENGTH, reward.len().to_string()),
        ],
        reward.clone(),
    )
        .into_response()
}
