use crate::{error::MahasiswaResult, state::MahasiswaState, views::list_view};
use axum::extract::State;
use maud::Markup;

pub async fn get_index_route(State(state): State<MahasiswaState>) -> MahasiswaResult<Markup> {
    let students = state.get_all().await?;
    Ok(list_view(&students))
}
