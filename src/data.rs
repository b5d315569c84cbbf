use crate::{
    data::student::{Student, StudentForm, StudentId},
    error::{MahasiswaResult, MissingStudentSnafu},
};
use async_trait::async_trait;
use snafu::OptionExt;
use std::fmt::Debug;

#[cfg(test)]
pub mod memory;
pub mod mysql;
pub mod student;

/// Storage for student records. Every call goes to storage, nothing is cached between requests.
#[async_trait]
pub trait StudentStore: Debug + Send + Sync {
    /// All rows, in whatever order storage hands them back.
    async fn get_all(&self) -> MahasiswaResult<Vec<Student>>;

    async fn get_by_id(&self, id: StudentId) -> MahasiswaResult<Option<Student>>;

    async fn insert(&self, to_be_added: StudentForm) -> MahasiswaResult<StudentId>;

    /// Replaces all four fields wholesale. Returns whether a row had that id.
    async fn update_by_id(&self, id: StudentId, replacement: StudentForm) -> MahasiswaResult<bool>;

    /// Returns whether a row had that id.
    async fn delete_by_id(&self, id: StudentId) -> MahasiswaResult<bool>;

    async fn close(&self) {}

    async fn get_existing(&self, id: StudentId) -> MahasiswaResult<Student> {
        self.get_by_id(id).await?.context(MissingStudentSnafu { id })
    }
}
