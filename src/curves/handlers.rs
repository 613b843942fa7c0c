use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use tracing::{info, instrument};

use crate::curves::dto::CurvePointForm;
use crate::curves::repo;
use crate::error::AppError;
use crate::state::AppState;
use crate::validation::FieldError;
use crate::views::{self, escape};

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let points = repo::find_all(&state.db).await?;
    let mut rows = String::new();
    for point in &points {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{term}</td><td>{value}</td>\
             <td><a href=\"/curvePoint/update/{id}\">Edit</a> \
             <a href=\"/curvePoint/delete/{id}\">Delete</a></td></tr>\n",
            id = point.id,
            term = point.term,
            value = point.value,
        ));
    }
    Ok(views::page(
        "Curve points",
        &format!(
            "<h1>Curve points</h1>\n<p><a href=\"/curvePoint/add\">Add curve point</a></p>\n\
             <table>\n<tr><th>Id</th><th>Term</th><th>Value</th><th></th></tr>\n{rows}</table>"
        ),
    ))
}

pub async fn add_form() -> Html<String> {
    render_form(
        "Add curve point",
        "/curvePoint/validate",
        &CurvePointForm::default(),
        &[],
    )
}

#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CurvePointForm>,
) -> Result<Response, AppError> {
    let point = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            return Ok(
                render_form("Add curve point", "/curvePoint/validate", &form, &errors)
                    .into_response(),
            )
        }
    };
    let created = repo::create(&state.db, point.term, point.value).await?;
    info!(curve_point_id = created.id, "curve point created");
    Ok(views::redirect_to("/curvePoint/list"))
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let point = repo::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("curve point"))?;
    let form = CurvePointForm {
        term: point.term.to_string(),
        value: point.value.to_string(),
    };
    Ok(render_form(
        "Edit curve point",
        &format!("/curvePoint/update/{id}"),
        &form,
        &[],
    ))
}

#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<CurvePointForm>,
) -> Result<Response, AppError> {
    let point = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            let action = format!("/curvePoint/update/{id}");
            return Ok(render_form("Edit curve point", &action, &form, &errors).into_response());
        }
    };
    repo::update(&state.db, id, point.term, point.value)
        .await?
        .ok_or(AppError::NotFound("curve point"))?;
    info!(curve_point_id = id, "curve point updated");
    Ok(views::redirect_to("/curvePoint/list"))
}

#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    repo::delete(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("curve point"))?;
    info!(curve_point_id = id, "curve point deleted");
    Ok(views::redirect_to("/curvePoint/list"))
}

fn render_form(
    title: &str,
    action: &str,
    form: &CurvePointForm,
    errors: &[FieldError],
) -> Html<String> {
    views::page(
        title,
        &format!(
            "<h1>{title}</h1>\n{errors}\
             <form method=\"post\" action=\"{action}\">\n\
             <label>Term <input type=\"text\" name=\"term\" value=\"{term}\"></label>\n\
             <label>Value <input type=\"text\" name=\"value\" value=\"{value}\"></label>\n\
             <button type=\"submit\">Save</button>\n\
             </form>\n<p><a href=\"/curvePoint/list\">Back to list</a></p>",
            title = escape(title),
            errors = views::error_list(errors),
            action = escape(action),
            term = escape(&form.term),
            value = escape(&form.value),
        ),
    )
}
