use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use tracing::{info, instrument};

use crate::bids::dto::BidForm;
use crate::bids::repo;
use crate::error::AppError;
use crate::state::AppState;
use crate::validation::FieldError;
use crate::views::{self, escape};

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let bids = repo::find_all(&state.db).await?;
    let mut rows = String::new();
    for bid in &bids {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{account}</td><td>{bid_type}</td><td>{quantity}</td>\
             <td><a href=\"/bidList/update/{id}\">Edit</a> \
             <a href=\"/bidList/delete/{id}\">Delete</a></td></tr>\n",
            id = bid.id,
            account = escape(&bid.account),
            bid_type = escape(&bid.bid_type),
            quantity = bid.bid_quantity,
        ));
    }
    Ok(views::page(
        "Bid lists",
        &format!(
            "<h1>Bid lists</h1>\n<p><a href=\"/bidList/add\">Add bid</a></p>\n\
             <table>\n<tr><th>Id</th><th>Account</th><th>Type</th>\
             <th>Bid quantity</th><th></th></tr>\n{rows}</table>"
        ),
    ))
}

pub async fn add_form() -> Html<String> {
    render_form("Add bid", "/bidList/validate", &BidForm::default(), &[])
}

#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<BidForm>,
) -> Result<Response, AppError> {
    let bid = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            return Ok(render_form("Add bid", "/bidList/validate", &form, &errors).into_response())
        }
    };
    let created = repo::create(&state.db, &bid.account, &bid.bid_type, bid.bid_quantity).await?;
    info!(bid_id = created.id, "bid created");
    Ok(views::redirect_to("/bidList/list"))
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let bid = repo::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("bid"))?;
    let form = BidForm {
        account: bid.account,
        bid_type: bid.bid_type,
        bid_quantity: bid.bid_quantity.to_string(),
    };
    Ok(render_form("Edit bid", &format!("/bidList/update/{id}"), &form, &[]))
}

#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<BidForm>,
) -> Result<Response, AppError> {
    let bid = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            let action = format!("/bidList/update/{id}");
            return Ok(render_form("Edit bid", &action, &form, &errors).into_response());
        }
    };
    repo::update(&state.db, id, &bid.account, &bid.bid_type, bid.bid_quantity)
        .await?
        .ok_or(AppError::NotFound("bid"))?;
    info!(bid_id = id, "bid updated");
    Ok(views::redirect_to("/bidList/list"))
}

#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    repo::delete(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("bid"))?;
    info!(bid_id = id, "bid deleted");
    Ok(views::redirect_to("/bidList/list"))
}

fn render_form(title: &str, action: &str, form: &BidForm, errors: &[FieldError]) -> Html<String> {
    views::page(
        title,
        &format!(
            "<h1>{title}</h1>\n{errors}\
             <form method=\"post\" action=\"{action}\">\n\
             <label>Account <input type=\"text\" name=\"account\" value=\"{account}\"></label>\n\
             <label>Type <input type=\"text\" name=\"type\" value=\"{bid_type}\"></label>\n\
             <label>Bid quantity <input type=\"text\" name=\"bidQuantity\" value=\"{quantity}\"></label>\n\
             <button type=\"submit\">Save</button>\n\
             </form>\n<p><a href=\"/bidList/list\">Back to list</a></p>",
            title = escape(title),
            errors = views::error_list(errors),
            action = escape(action),
            account = escape(&form.account),
            bid_type = escape(&form.bid_type),
            quantity = escape(&form.bid_quantity),
        ),
    )
}
