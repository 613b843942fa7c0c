use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use tracing::{info, instrument};

use crate::error::AppError;
use crate::rules::dto::RuleNameForm;
use crate::rules::repo;
use crate::state::AppState;
use crate::validation::FieldError;
use crate::views::{self, escape};

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let rules = repo::find_all(&state.db).await?;
    let mut rows = String::new();
    for rule in &rules {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{name}</td><td>{description}</td>\
             <td><a href=\"/ruleName/update/{id}\">Edit</a> \
             <a href=\"/ruleName/delete/{id}\">Delete</a></td></tr>\n",
            id = rule.id,
            name = escape(&rule.name),
            description = escape(&rule.description),
        ));
    }
    Ok(views::page(
        "Rules",
        &format!(
            "<h1>Rules</h1>\n<p><a href=\"/ruleName/add\">Add rule</a></p>\n\
             <table>\n<tr><th>Id</th><th>Name</th><th>Description</th><th></th></tr>\n\
             {rows}</table>"
        ),
    ))
}

pub async fn add_form() -> Html<String> {
    render_form("Add rule", "/ruleName/validate", &RuleNameForm::default(), &[])
}

#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<RuleNameForm>,
) -> Result<Response, AppError> {
    let rule = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            return Ok(render_form("Add rule", "/ruleName/validate", &form, &errors).into_response())
        }
    };
    let created = repo::create(
        &state.db,
        &rule.name,
        &rule.description,
        &rule.json,
        &rule.template,
        &rule.sql_str,
        &rule.sql_part,
    )
    .await?;
    info!(rule_id = created.id, "rule created");
    Ok(views::redirect_to("/ruleName/list"))
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let rule = repo::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("rule"))?;
    let form = RuleNameForm {
        name: rule.name,
        description: rule.description,
        json: rule.json,
        template: rule.template,
        sql_str: rule.sql_str,
        sql_part: rule.sql_part,
    };
    Ok(render_form(
        "Edit rule",
        &format!("/ruleName/update/{id}"),
        &form,
        &[],
    ))
}

#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<RuleNameForm>,
) -> Result<Response, AppError> {
    let rule = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            let action = format!("/ruleName/update/{id}");
            return Ok(render_form("Edit rule", &action, &form, &errors).into_response());
        }
    };
    repo::update(
        &state.db,
        id,
        &rule.name,
        &rule.description,
        &rule.json,
        &rule.template,
        &rule.sql_str,
        &rule.sql_part,
    )
    .await?
    .ok_or(AppError::NotFound("rule"))?;
    info!(rule_id = id, "rule updated");
    Ok(views::redirect_to("/ruleName/list"))
}

#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    repo::delete(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("rule"))?;
    info!(rule_id = id, "rule deleted");
    Ok(views::redirect_to("/ruleName/list"))
}

fn render_form(
    title: &str,
    action: &str,
    form: &RuleNameForm,
    errors: &[FieldError],
) -> Html<String> {
    views::page(
        title,
        &format!(
            "<h1>{title}</h1>\n{errors}\
             <form method=\"post\" action=\"{action}\">\n\
             <label>Name <input type=\"text\" name=\"name\" value=\"{name}\"></label>\n\
             <label>Description <input type=\"text\" name=\"description\" value=\"{description}\"></label>\n\
             <label>Json <input type=\"text\" name=\"json\" value=\"{json}\"></label>\n\
             <label>Template <input type=\"text\" name=\"template\" value=\"{template}\"></label>\n\
             <label>SQL string <input type=\"text\" name=\"sqlStr\" value=\"{sql_str}\"></label>\n\
             <label>SQL part <input type=\"text\" name=\"sqlPart\" value=\"{sql_part}\"></label>\n\
             <button type=\"submit\">Save</button>\n\
             </form>\n<p><a href=\"/ruleName/list\">Back to list</a></p>",
            title = escape(title),
            errors = views::error_list(errors),
            action = escape(action),
            name = escape(&form.name),
            description = escape(&form.description),
            json = escape(&form.json),
            template = escape(&form.template),
            sql_str = escape(&form.sql_str),
            sql_part = escape(&form.sql_part),
        ),
    )
}
