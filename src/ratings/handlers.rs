use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use tracing::{info, instrument};

use crate::error::AppError;
use crate::ratings::dto::RatingForm;
use crate::ratings::repo;
use crate::state::AppState;
use crate::validation::FieldError;
use crate::views::{self, escape};

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let ratings = repo::find_all(&state.db).await?;
    let mut rows = String::new();
    for rating in &ratings {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{moodys}</td><td>{sandp}</td><td>{fitch}</td><td>{order}</td>\
             <td><a href=\"/rating/update/{id}\">Edit</a> \
             <a href=\"/rating/delete/{id}\">Delete</a></td></tr>\n",
            id = rating.id,
            moodys = escape(&rating.moodys_rating),
            sandp = escape(&rating.sandp_rating),
            fitch = escape(&rating.fitch_rating),
            order = rating.order_number,
        ));
    }
    Ok(views::page(
        "Ratings",
        &format!(
            "<h1>Ratings</h1>\n<p><a href=\"/rating/add\">Add rating</a></p>\n\
             <table>\n<tr><th>Id</th><th>Moody's</th><th>S&amp;P</th><th>Fitch</th>\
             <th>Order</th><th></th></tr>\n{rows}</table>"
        ),
    ))
}

pub async fn add_form() -> Html<String> {
    render_form("Add rating", "/rating/validate", &RatingForm::default(), &[])
}

#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<RatingForm>,
) -> Result<Response, AppError> {
    let rating = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            return Ok(render_form("Add rating", "/rating/validate", &form, &errors).into_response())
        }
    };
    let created = repo::create(
        &state.db,
        &rating.moodys_rating,
        &rating.sandp_rating,
        &rating.fitch_rating,
        rating.order_number,
    )
    .await?;
    info!(rating_id = created.id, "rating created");
    Ok(views::redirect_to("/rating/list"))
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let rating = repo::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("rating"))?;
    let form = RatingForm {
        moodys_rating: rating.moodys_rating,
        sandp_rating: rating.sandp_rating,
        fitch_rating: rating.fitch_rating,
        order_number: rating.order_number.to_string(),
    };
    Ok(render_form(
        "Edit rating",
        &format!("/rating/update/{id}"),
        &form,
        &[],
    ))
}

#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<RatingForm>,
) -> Result<Response, AppError> {
    let rating = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            let action = format!("/rating/update/{id}");
            return Ok(render_form("Edit rating", &action, &form, &errors).into_response());
        }
    };
    repo::update(
        &state.db,
        id,
        &rating.moodys_rating,
        &rating.sandp_rating,
        &rating.fitch_rating,
        rating.order_number,
    )
    .await?
    .ok_or(AppError::NotFound("rating"))?;
    info!(rating_id = id, "rating updated");
    Ok(views::redirect_to("/rating/list"))
}

#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    repo::delete(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("rating"))?;
    info!(rating_id = id, "rating deleted");
    Ok(views::redirect_to("/rating/list"))
}

fn render_form(title: &str, action: &str, form: &RatingForm, errors: &[FieldError]) -> Html<String> {
    views::page(
        title,
        &format!(
            "<h1>{title}</h1>\n{errors}\
             <form method=\"post\" action=\"{action}\">\n\
             <label>Moody's rating <input type=\"text\" name=\"moodysRating\" value=\"{moodys}\"></label>\n\
             <label>S&amp;P rating <input type=\"text\" name=\"sandPRating\" value=\"{sandp}\"></label>\n\
             <label>Fitch rating <input type=\"text\" name=\"fitchRating\" value=\"{fitch}\"></label>\n\
             <label>Order number <input type=\"text\" name=\"orderNumber\" value=\"{order}\"></label>\n\
             <button type=\"submit\">Save</button>\n\
             </form>\n<p><a href=\"/rating/list\">Back to list</a></p>",
            title = escape(title),
            errors = views::error_list(errors),
            action = escape(action),
            moodys = escape(&form.moodys_rating),
            sandp = escape(&form.sandp_rating),
            fitch = escape(&form.fitch_rating),
            order = escape(&form.order_number),
        ),
    )
}
