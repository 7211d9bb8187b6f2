use super::*;

pub fn route(router: Router) -> Router {
    router
        .route("/recipe/", get(recipe))
        .route("/recipe/*recipe_id", get(recipe))
}

/// Any identity can see any recipe, including ones missing from
/// its dashboard.
///
/// Everything after `/recipe/` is taken as the id, so an empty or
/// multi-segment remainder is just an unknown recipe.
async fn recipe(
    _: Identity,
    State(app): State<Arc<App>>,
    recipe_id: Option<Path<String>>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Response> {
    let recipe_id = recipe_id.map(|Path(id)| id).unwrap_or_default();
    let recipe = recipe_id
        .parse::<Id>()
        .ok()
        .and_then(|id| app.assets.recipes.get(id));
    let Some(recipe) = recipe else {
        debug!("Recipe {:?} not found", recipe_id);
        return Ok(app.not_found());
    };

    // The first `format` wins
    let format = query
        .iter()
        .find(|(key, _)| key == "format")
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();
    if format.contains("image") {
        return Ok((
            [(header::CONTENT_TYPE, recipe.content_type.clone())],
            recipe.image.clone(),
        )
            .into_response());
    }

    let Some(detail) = app.assets.recipes.detail(recipe.id) else {
        return Ok(app.not_found());
    };
    Ok(app.render(RECIPE_TEMPLATE, detail)?.into_response())
}
