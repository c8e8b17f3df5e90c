use crate::modules::invoices::controller::{
    create_invoice, delete_invoice, get_invoice, list_invoices, update_invoice,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_invoices_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_invoice).get(list_invoices))
        .route(
            "/{id}",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
}
