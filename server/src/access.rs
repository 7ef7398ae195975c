use std::collections::HashSet;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use kernel::prelude::entity::UserId;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_PERMISSIONS_HEADER: &str = "x-user-permissions";

/// Staff permission for the loan desk: renewing and listing every loan.
pub const CAN_MARK_RETURNED: &str = "catalog.can_mark_returned";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenied {
    AuthenticationRequired,
    PermissionDenied(&'static str),
}

impl IntoResponse for AccessDenied {
    fn into_response(self) -> Response {
        match self {
            AccessDenied::AuthenticationRequired => StatusCode::UNAUTHORIZED.into_response(),
            AccessDenied::PermissionDenied(permission) => {
                tracing::debug!("missing permission {permission}");
                StatusCode::FORBIDDEN.into_response()
            }
        }
    }
}

/// Caller identity as asserted by the upstream gateway.
#[derive(Debug, Clone)]
pub struct Identity {
    user_id: UserId,
    permissions: HashSet<String>,
}

impl Identity {
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn require(self, permission: &'static str) -> Result<Self, AccessDenied> {
        if self.permissions.contains(permission) {
            Ok(self)
        } else {
            Err(AccessDenied::PermissionDenied(permission))
        }
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AccessDenied;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok())
            .map(UserId::new)
            .ok_or(AccessDenied::AuthenticationRequired)?;
        let permissions = parts
            .headers
            .get(USER_PERMISSIONS_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|permission| !permission.is_empty())
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        Ok(Self {
            user_id,
            permissions,
        })
    }
}

/// Identity holding [`CAN_MARK_RETURNED`].
#[derive(Debug, Clone)]
pub struct Librarian(Identity);

impl Librarian {
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Librarian
where
    S: Send + Sync,
{
    type Rejection = AccessDenied;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let identity = Identity::from_request_parts(parts, state).await?;
        identity.require(CAN_MARK_RETURNED).map(Self)
    }
}
