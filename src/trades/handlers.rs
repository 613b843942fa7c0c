use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use tracing::{info, instrument};

use crate::error::AppError;
use crate::state::AppState;
use crate::trades::dto::TradeForm;
use crate::trades::repo;
use crate::validation::FieldError;
use crate::views::{self, escape};

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let trades = repo::find_all(&state.db).await?;
    let mut rows = String::new();
    for trade in &trades {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{account}</td><td>{trade_type}</td><td>{quantity}</td>\
             <td><a href=\"/trade/update/{id}\">Edit</a> \
             <a href=\"/trade/delete/{id}\">Delete</a></td></tr>\n",
            id = trade.id,
            account = escape(&trade.account),
            trade_type = escape(&trade.trade_type),
            quantity = trade.buy_quantity,
        ));
    }
    Ok(views::page(
        "Trades",
        &format!(
            "<h1>Trades</h1>\n<p><a href=\"/trade/add\">Add trade</a></p>\n\
             <table>\n<tr><th>Id</th><th>Account</th><th>Type</th>\
             <th>Buy quantity</th><th></th></tr>\n{rows}</table>"
        ),
    ))
}

pub async fn add_form() -> Html<String> {
    render_form("Add trade", "/trade/validate", &TradeForm::default(), &[])
}

#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<TradeForm>,
) -> Result<Response, AppError> {
    let trade = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            return Ok(render_form("Add trade", "/trade/validate", &form, &errors).into_response())
        }
    };
    let created = repo::create(&state.db, &trade.account, &trade.trade_type, trade.buy_quantity)
        .await?;
    info!(trade_id = created.id, "trade created");
    Ok(views::redirect_to("/trade/list"))
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let trade = repo::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("trade"))?;
    let form = TradeForm {
        account: trade.account,
        trade_type: trade.trade_type,
        buy_quantity: trade.buy_quantity.to_string(),
    };
    Ok(render_form(
        "Edit trade",
        &format!("/trade/update/{id}"),
        &form,
        &[],
    ))
}

#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<TradeForm>,
) -> Result<Response, AppError> {
    let trade = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            let action = format!("/trade/update/{id}");
            return Ok(render_form("Edit trade", &action, &form, &errors).into_response());
        }
    };
    repo::update(&state.db, id, &trade.account, &trade.trade_type, trade.buy_quantity)
        .await?
        .ok_or(AppError::NotFound("trade"))?;
    info!(trade_id = id, "trade updated");
    Ok(views::redirect_to("/trade/list"))
}

#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    repo::delete(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("trade"))?;
    info!(trade_id = id, "trade deleted");
    Ok(views::redirect_to("/trade/list"))
}

fn render_form(title: &str, action: &str, form: &TradeForm, errors: &[FieldError]) -> Html<String> {
    views::page(
        title,
        &format!(
            "<h1>{title}</h1>\n{errors}\
             <form method=\"post\" action=\"{action}\">\n\
             <label>Account <input type=\"text\" name=\"account\" value=\"{account}\"></label>\n\
             <label>Type <input type=\"text\" name=\"type\" value=\"{trade_type}\"></label>\n\
             <label>Buy quantity <input type=\"text\" name=\"buyQuantity\" value=\"{quantity}\"></label>\n\
             <button type=\"submit\">Save</button>\n\
             </form>\n<p><a href=\"/trade/list\">Back to list</a></p>",
            title = escape(title),
            errors = views::error_list(errors),
            action = escape(action),
            account = escape(&form.account),
            trade_type = escape(&form.trade_type),
            quantity = escape(&form.buy_quantity),
        ),
    )
}
