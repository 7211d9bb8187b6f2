use super::*;

pub type RequestResult<T, E = RequestError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("Template Error")]
    Template(#[from] minijinja::Error),
    #[error("Database Error")]
    Sql(#[from] sqlx::Error),
}

impl RequestError {
    fn status(&self) -> StatusCode {
        match self {
            RequestError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RequestError::Sql(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        error!("Responding with an error: {:?}", self);
        let body = format!("{}", self);
        (self.status(), body).into_response()
    }
}
