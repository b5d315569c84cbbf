use crate::error::{InvalidStudentIdSnafu, MahasiswaResult};
use serde::Deserialize;
use snafu::ResultExt;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(pub i64);

impl StudentId {
    /// Ids arrive as path text; anything that isn't an integer can't name a row.
    pub fn parse(original: String) -> MahasiswaResult<Self> {
        let parsed = original.trim().parse();
        parsed.map(Self).context(InvalidStudentIdSnafu { original })
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub student_number: String,
    pub class: String,
    pub interest: String,
}

/// Everything about a student except the id, which the database hands out.
///
/// Serde names are the form input names the pages use.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StudentForm {
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "npm")]
    pub student_number: String,
    #[serde(rename = "kelas")]
    pub class: String,
    #[serde(rename = "minat")]
    pub interest: String,
}

impl Student {
    pub fn from_form(id: StudentId, form: StudentForm) -> Self {
        let StudentForm {
            name,
            student_number,
            class,
            interest,
        } = form;

        Self {
            id,
            name,
            student_number,
            class,
            interest,
        }
    }
}
