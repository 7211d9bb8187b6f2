use super::*;

use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar};

/// The cookie carrying the caller's identity.
pub const USER_COOKIE: &str = "user";

pub fn route(router: Router) -> Router {
    router
        .route("/", login_routes())
        .route("/login", login_routes())
        .fallback(login_routes())
}

/// Other methods get an empty `200 OK`.
fn login_routes() -> MethodRouter<Arc<App>> {
    get(login_page)
        .post(login)
        .fallback(|| async { StatusCode::OK })
}

/// Whoever the `user` cookie says the caller is.
///
/// Only the presence of the cookie is checked. Requests without it are
/// redirected to the login form.
pub struct Identity(pub String);

#[axum::async_trait]
impl<S: Send + Sync> axum::extract::FromRequestParts<S> for Identity {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        match jar.get(USER_COOKIE) {
            Some(cookie) => Ok(Self(cookie.value().to_owned())),
            None => {
                debug!("No `{}` cookie, redirecting to login", USER_COOKIE);
                Err(found("/"))
            }
        }
    }
}

async fn login_page(State(app): State<Arc<App>>) -> Result<Html<String>> {
    app.render(LOGIN_TEMPLATE, LoginPage::default())
}

async fn login(
    State(app): State<Arc<App>>,
    jar: CookieJar,
    form: Option<Form<Credentials>>,
) -> Result<Response> {
    // Unreadable bodies count as empty fields
    let creds = form.map(|Form(creds)| creds).unwrap_or_default();
    let store = CredentialStore::open(&app.assets.users).await?;
    let users = store.find(&creds).await;
    store.close().await;
    let users = users?;

    match users.as_slice() {
        [] => {
            debug!("Invalid credentials for {:?}", creds.username);
            Ok(app.render(LOGIN_TEMPLATE, LoginPage::failed())?.into_response())
        }
        [user] => {
            info!("Logged in as {:?}", user.username);
            let cookie = Cookie::build((USER_COOKIE, user.username.clone())).path("/");
            Ok((jar.add(cookie), found("/dashboard")).into_response())
        }
        users => {
            warn!(
                "Login query for {:?} matched {} rows, listing them all",
                creds.username,
                users.len()
            );
            Ok(Html(credential_table(users)).into_response())
        }
    }
}

/// Values are written as-is, without escaping.
fn credential_table(users: &[Credentials]) -> String {
    let mut html = String::from(
        "<h1>全ユーザー情報</h1><table border='1'><tr><th>ユーザー名</th><th>パスワード</th></tr>",
    );
    for user in users {
        html += &format!("<tr><td>{}</td><td>{}</td></tr>", user.username, user.password);
    }
    html += "</table>";
    html
}
