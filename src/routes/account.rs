use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::Method,
    routing::get,
    Json, Router,
};
use tracing::info;
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{CreateAccountRequest, Message},
        Account, Error,
    },
    AppState,
};

/// Defines the OpenAPI spec for account endpoints
#[derive(OpenApi)]
#[openapi(paths(
    list_accounts_handler,
    create_account_handler,
    get_account_handler,
    delete_account_handler
))]
pub struct AccountsApi;

/// Used to group account endpoints together in the OpenAPI documentation
pub const ACCOUNT_API_GROUP: &str = "ACCOUNT";

/// Builds a router for account routes
pub fn account_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/account",
            get(list_accounts_handler)
                .post(create_account_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/account/:id",
            get(get_account_handler)
                .delete(delete_account_handler)
                .fallback(method_not_allowed_handler),
        )
}

async fn method_not_allowed_handler(method: Method) -> Error {
    Error::MethodNotAllowed(method)
}

/// List accounts handler function
#[utoipa::path(
    get,
    path = "/account",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "All stored accounts", body = [Account]),
        (status = 500, description = "Storage failure", body = ErrorMessage),
    )
)]
pub async fn list_accounts_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Account>>, Error> {
    let accounts = state.db.list_accounts().await?;
    Ok(Json(accounts))
}

/// Create account handler function
#[utoipa::path(
    post,
    path = "/account",
    tag = ACCOUNT_API_GROUP,
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Account successfully created", body = Account),
        (status = 400, description = "Malformed request body", body = ErrorMessage),
    )
)]
pub async fn create_account_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<Json<Account>, Error> {
    let Json(body) = body?;
    let new_account = Account::new(&body.first_name, &body.last_name);

    let account = state.db.create_account(&new_account).await?;
    info!("Created account {} ({})", account.id, account.number);

    Ok(Json(account))
}

/// Get account handler function
#[utoipa::path(
    get,
    path = "/account/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "Account found", body = Account),
        (status = 404, description = "Account not found", body = ErrorMessage),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn get_account_handler(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Account>, Error> {
    let Path(id) = id?;
    let account = state.db.get_account_by_id(id).await?;
    Ok(Json(account))
}

/// Delete account handler function
#[utoipa::path(
    delete,
    path = "/account/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "Account deleted", body = Message),
        (status = 404, description = "Account not found", body = ErrorMessage),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn delete_account_handler(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, Error> {
    let Path(id) = id?;
    state.db.delete_account(id).await?;
    info!("Deleted account {}", id);
    Ok(Json(Message::new("Account deleted")))
}
