use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use tracing::{info, instrument, warn};

use crate::auth::password::hash_password;
use crate::error::AppError;
use crate::state::AppState;
use crate::users::dto::UserForm;
use crate::users::repo::{self, User};
use crate::validation::FieldError;
use crate::views::{self, escape};

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let users = repo::find_all(&state.db).await?;
    let mut rows = String::new();
    for user in &users {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{username}</td><td>{fullname}</td><td>{role}</td>\
             <td><a href=\"/user/update/{id}\">Edit</a> \
             <a href=\"/user/delete/{id}\">Delete</a></td></tr>\n",
            id = user.id,
            username = escape(&user.username),
            fullname = escape(&user.fullname),
            role = escape(&user.role),
        ));
    }
    Ok(views::page(
        "Users",
        &format!(
            "<h1>Users</h1>\n<p><a href=\"/user/add\">Add user</a></p>\n\
             <table>\n<tr><th>Id</th><th>Username</th><th>Full name</th>\
             <th>Role</th><th></th></tr>\n{rows}</table>"
        ),
    ))
}

pub async fn add_form() -> Html<String> {
    render_form("Add user", "/user/validate", &UserForm::default(), &[])
}

#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<Response, AppError> {
    let new_user = match form.validate_new() {
        Ok(valid) => valid,
        Err(errors) => {
            warn!(username = %form.username, "user form rejected");
            return Ok(render_form("Add user", "/user/validate", &form, &errors).into_response());
        }
    };

    if state
        .credentials
        .find_by_username(&new_user.username)
        .await
        .map_err(AppError::Store)?
        .is_some()
    {
        let errors = vec![FieldError::new("username", "Username is already taken")];
        return Ok(render_form("Add user", "/user/validate", &form, &errors).into_response());
    }

    let password_hash = hash_password(&new_user.password).map_err(AppError::Hash)?;
    let user = state
        .credentials
        .create(
            &new_user.username,
            &password_hash,
            &new_user.fullname,
            new_user.role.as_str(),
        )
        .await
        .map_err(AppError::Store)?;
    info!(user_id = user.id, username = %user.username, "user created");
    Ok(views::redirect_to("/user/list"))
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let user = repo::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("user"))?;
    // The form is prefilled from the record, password field left blank.
    let form = UserForm {
        username: user.username,
        fullname: user.fullname,
        password: String::new(),
        role: user.role,
    };
    Ok(render_update_form(id, &form, &[]))
}

#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<UserForm>,
) -> Result<Response, AppError> {
    let changes = match form.validate_update() {
        Ok(valid) => valid,
        Err(errors) => {
            warn!(user_id = id, "user form rejected");
            return Ok(render_update_form(id, &form, &errors).into_response());
        }
    };

    let owner = repo::find_by_username(&state.db, &changes.username).await?;
    if username_taken_by_other(owner.as_ref(), id) {
        let errors = vec![FieldError::new("username", "Username is already taken")];
        return Ok(render_update_form(id, &form, &errors).into_response());
    }

    let existing = repo::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("user"))?;

    // A resubmitted password is always re-hashed; plaintext never reaches
    // the row. A blank field keeps the stored digest.
    let password_hash = match &changes.password {
        Some(plain) => hash_password(plain).map_err(AppError::Hash)?,
        None => existing.password_hash,
    };

    repo::update(
        &state.db,
        id,
        &changes.username,
        &password_hash,
        &changes.fullname,
        changes.role.as_str(),
    )
    .await?
    .ok_or(AppError::NotFound("user"))?;
    info!(user_id = id, "user updated");
    Ok(views::redirect_to("/user/list"))
}

#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    repo::delete(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("user"))?;
    info!(user_id = id, "user deleted");
    Ok(views::redirect_to("/user/list"))
}

/// A rename collides only when the username belongs to a different row;
/// keeping one's own username is not a conflict.
fn username_taken_by_other(existing: Option<&User>, id: i32) -> bool {
    existing.is_some_and(|other| other.id != id)
}

fn render_update_form(id: i32, form: &UserForm, errors: &[FieldError]) -> Html<String> {
    let action = format!("/user/update/{id}");
    render_form("Edit user", &action, form, errors)
}

/// The password input is always rendered empty; neither the submitted
/// plaintext nor the stored digest is ever echoed back.
fn render_form(
    title: &str,
    action: &str,
    form: &UserForm,
    errors: &[FieldError],
) -> Html<String> {
    views::page(
        title,
        &format!(
            "<h1>{title}</h1>\n{errors}\
             <form method=\"post\" action=\"{action}\">\n\
             <label>Username <input type=\"text\" name=\"username\" value=\"{username}\"></label>\n\
             <label>Full name <input type=\"text\" name=\"fullname\" value=\"{fullname}\"></label>\n\
             <label>Password <input type=\"password\" name=\"password\" value=\"\"></label>\n\
             <label>Role <select name=\"role\">\
             <option value=\"USER\"{user_sel}>USER</option>\
             <option value=\"ADMIN\"{admin_sel}>ADMIN</option>\
             </select></label>\n\
             <button type=\"submit\">Save</button>\n\
             </form>\n<p><a href=\"/user/list\">Back to list</a></p>",
            title = escape(title),
            errors = views::error_list(errors),
            action = escape(action),
            username = escape(&form.username),
            fullname = escape(&form.fullname),
            user_sel = if form.role == "USER" { " selected" } else { "" },
            admin_sel = if form.role == "ADMIN" { " selected" } else { "" },
        ),
    )
}
