use crate::{data::student::StudentId, error::MahasiswaResult, state::MahasiswaState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
};

/// Mounted on GET as well as POST so the list page's plain links keep working.
pub async fn delete_student(
    State(state): State<MahasiswaState>,
    Path(id): Path<String>,
) -> MahasiswaResult<Redirect> {
    let id = StudentId::parse(id)?;

    if state.delete_by_id(id).await? {
        info!(%id, "Deleted student");
    } else {
        warn!(%id, "Tried to delete a student that doesn't exist");
    }

    Ok(Redirect::to("/"))
}

/// axum answers HEAD with the GET handler unless told otherwise, and link checkers send HEAD.
pub async fn refuse_head_delete() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
