use crate::{
    data::student::StudentId, error::MahasiswaResult, state::MahasiswaState, views::detail_view,
};
use axum::extract::{Path, State};
use maud::Markup;

pub async fn get_details(
    State(state): State<MahasiswaState>,
    Path(id): Path<String>,
) -> MahasiswaResult<Markup> {
    let id = StudentId::parse(id)?;
    let student = state.get_existing(id).await?;

    Ok(detail_view(&student))
}
