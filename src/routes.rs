use crate::{
    routes::{
        create::{get_create_form, post_create},
        delete::{delete_student, refuse_head_delete},
        details::get_details,
        edit::{get_edit_form, post_edit},
        index::get_index_route,
    },
    state::MahasiswaState,
};
use axum::{Router, routing::get};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub mod create;
pub mod delete;
pub mod details;
pub mod edit;
pub mod index;

///four short text fields never need more than this
const MAX_FORM_BYTES: usize = 16 * 1024;

pub fn router(state: MahasiswaState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/create", get(get_create_form).post(post_create))
        .route("/edit/{id}", get(get_edit_form).post(post_edit))
        .route(
            "/delete/{id}",
            get(delete_student)
                .post(delete_student)
                .head(refuse_head_delete),
        )
        .route("/details/{id}", get(get_details))
        .layer(RequestBodyLimitLayer::new(MAX_FORM_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
