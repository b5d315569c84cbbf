use crate::{
    data::student::StudentForm,
    error::{InvalidFormSnafu, MahasiswaResult},
    state::MahasiswaState,
    views::{FormMode, form_view},
};
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Redirect,
};
use maud::Markup;
use snafu::ResultExt;

pub async fn get_create_form() -> Markup {
    form_view(&FormMode::Create)
}

pub async fn post_create(
    State(state): State<MahasiswaState>,
    form: Result<Form<StudentForm>, FormRejection>,
) -> MahasiswaResult<Redirect> {
    let Form(form) = form.context(InvalidFormSnafu)?;

    let id = state.insert(form).await?;
    info!(%id, "Added student");

    Ok(Redirect::to("/"))
}
