use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use uuid::Uuid;

use kernel::prelude::entity::SessionId;

pub const SESSION_COOKIE: &str = "sessionid";

const SESSION_MAX_AGE: Duration = Duration::weeks(2);

/// Anonymous visitor session keyed by the `sessionid` cookie.
///
/// A fresh id is minted when the cookie is missing or unreadable; the returned jar then
/// carries the cookie so it reaches the client with the response.
pub struct VisitorSession {
    id: SessionId,
    jar: CookieJar,
}

impl VisitorSession {
    pub fn into_parts(self) -> (SessionId, CookieJar) {
        (self.id, self.jar)
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for VisitorSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state).await?;
        let existing = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());
        match existing {
            Some(id) => Ok(Self {
                id: SessionId::new(id),
                jar,
            }),
            None => {
                let id = Uuid::new_v4();
                tracing::debug!("new visitor session {id}");
                let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .max_age(SESSION_MAX_AGE);
                Ok(Self {
                    id: SessionId::new(id),
                    jar: jar.add(cookie),
                })
            }
        }
    }
}
