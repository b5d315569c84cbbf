use crate::{
    data::student::{StudentForm, StudentId},
    error::{InvalidFormSnafu, MahasiswaResult},
    state::MahasiswaState,
    views::{FormMode, form_view},
};
use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    response::Redirect,
};
use maud::Markup;
use snafu::ResultExt;

pub async fn get_edit_form(
    State(state): State<MahasiswaState>,
    Path(id): Path<String>,
) -> MahasiswaResult<Markup> {
    let id = StudentId::parse(id)?;
    let student = state.get_existing(id).await?;

    Ok(form_view(&FormMode::Edit(student)))
}

pub async fn post_edit(
    State(state): State<MahasiswaState>,
    Path(id): Path<String>,
    form: Result<Form<StudentForm>, FormRejection>,
) -> MahasiswaResult<Redirect> {
    let id = StudentId::parse(id)?;
    let Form(form) = form.context(InvalidFormSnafu)?;

    //last write wins, and a vanished row is not an error for the browser
    if state.update_by_id(id, form).await? {
        info!(%id, "Updated student");
    } else {
        warn!(%id, "Tried to update a student that doesn't exist");
    }

    Ok(Redirect::to("/"))
}
