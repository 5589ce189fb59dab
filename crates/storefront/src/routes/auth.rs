//! Auth route handlers.
//!
//! Accounts are session-only: signing in or registering builds a
//! [`CurrentUser`] from the submitted form and stores it in the
//! session. The admin role is derived from the email address.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Multipart, State},
    response::{IntoResponse, Redirect, Response},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use handora_core::{Email, Role, UserId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::routes::cart::cart_count;
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub error: Option<String>,
}

/// Render the login page.
#[instrument(skip_all)]
pub async fn login_page(session: Session) -> impl IntoResponse {
    LoginTemplate {
        user: None,
        cart_count: cart_count(&session).await,
        error: None,
    }
}

/// Login form payload.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    #[allow(dead_code)]
    pub password: String,
}

/// Handle a login submission.
///
/// Admins land on the dashboard, shoppers on the home page. A bad
/// email re-renders the form with the validation message.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let email = match Email::parse(&form.email) {
        Ok(email) => email,
        Err(e) => {
            return Ok(LoginTemplate {
                user: None,
                cart_count: cart_count(&session).await,
                error: Some(e.to_string()),
            }
            .into_response());
        }
    };

    let role = derive_role(state.config(), &email);
    let name = default_name(role).to_string();
    let user = CurrentUser {
        id: UserId::generate(),
        avatar: placeholder_avatar(&name),
        email,
        name,
        phone: None,
        role,
    };

    set_current_user(&session, &user)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    Ok(post_login_redirect(role).into_response())
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub error: Option<String>,
}

/// Render the register page.
#[instrument(skip_all)]
pub async fn register_page(session: Session) -> impl IntoResponse {
    RegisterTemplate {
        user: None,
        cart_count: cart_count(&session).await,
        error: None,
    }
}

/// Handle a registration submission.
///
/// Multipart because of the optional avatar upload; the image is
/// inlined as a data URL, matching the stored profile format.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<Response> {
    let form = parse_registration(multipart).await?;

    let email = match Email::parse(&form.email) {
        Ok(email) => email,
        Err(e) => {
            return Ok(RegisterTemplate {
                user: None,
                cart_count: cart_count(&session).await,
                error: Some(e.to_string()),
            }
            .into_response());
        }
    };

    let role = derive_role(state.config(), &email);
    let name = if form.name.is_empty() {
        default_name(role).to_string()
    } else {
        form.name
    };
    let avatar = form
        .avatar
        .unwrap_or_else(|| placeholder_avatar(&name));

    let user = CurrentUser {
        id: UserId::generate(),
        email,
        name,
        phone: form.phone.filter(|p| !p.is_empty()),
        avatar,
        role,
    };

    set_current_user(&session, &user)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    Ok(post_login_redirect(role).into_response())
}

/// Handle logout.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;
    Ok(Redirect::to("/"))
}

struct Registration {
    email: String,
    name: String,
    phone: Option<String>,
    avatar: Option<String>,
}

async fn parse_registration(mut multipart: Multipart) -> Result<Registration> {
    let mut email = String::new();
    let mut name = String::new();
    let mut phone = None;
    let mut avatar = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid form data: {e}")))?
    {
        let Some(field_name) = field.name().map(ToString::to_string) else {
            continue;
        };
        match field_name.as_str() {
            "email" => {
                email = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("invalid form data: {e}")))?;
            }
            "name" => {
                name = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("invalid form data: {e}")))?;
            }
            "phone" => {
                phone = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(format!("invalid form data: {e}")))?,
                );
            }
            "avatar" => {
                let mime = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("invalid form data: {e}")))?;
                if !bytes.is_empty() {
                    avatar = Some(format!("data:{mime};base64,{}", STANDARD.encode(&bytes)));
                }
            }
            _ => {}
        }
    }

    Ok(Registration {
        email,
        name,
        phone,
        avatar,
    })
}

/// Admin when the email's local part contains the configured marker.
fn derive_role(config: &crate::config::HandoraConfig, email: &Email) -> Role {
    if config.grants_admin(email) {
        Role::Admin
    } else {
        Role::User
    }
}

const fn default_name(role: Role) -> &'static str {
    match role {
        Role::Admin => "Administrator",
        Role::User => "Customer",
    }
}

/// Generated-initials avatar for profiles without an upload.
fn placeholder_avatar(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=4a7c59&color=fff",
        urlencoding::encode(name)
    )
}

fn post_login_redirect(role: Role) -> Redirect {
    match role {
        Role::Admin => Redirect::to("/admin"),
        Role::User => Redirect::to("/"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_avatar_encodes_name() {
        let url = placeholder_avatar("Mai Tran");
        assert_eq!(
            url,
            "https://ui-avatars.com/api/?name=Mai%20Tran&background=4a7c59&color=fff"
        );
    }

    #[test]
    fn test_default_name_by_role() {
        assert_eq!(default_name(Role::Admin), "Administrator");
        assert_eq!(default_name(Role::User), "Customer");
    }
}
