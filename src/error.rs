use crate::data::student::StudentId;
use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use snafu::Snafu;
use std::num::ParseIntError;

pub type MahasiswaResult<T> = Result<T, MahasiswaError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum MahasiswaError {
    #[snafu(display("Error opening database: {source}"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error getting db connection: {source}"))]
    GetDatabaseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query: {source}"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Env var `{}` is set but empty", name))]
    EmptyEnvVar { name: &'static str },
    #[snafu(display("Env var `{}` must be at least 1", name))]
    ZeroEnvVar { name: &'static str },
    #[snafu(display("Unable to parse env var `{}` as a number", name))]
    ParseEnvVar {
        source: ParseIntError,
        name: &'static str,
    },
    #[snafu(display("Unable to find student with ID: {}", id))]
    MissingStudent { id: StudentId },
    #[snafu(display("Database handed out an id that doesn't fit: {}", raw))]
    IdOutOfRange { raw: u64 },
    #[snafu(display("Unable to find student with ID: {:?}", original))]
    InvalidStudentId {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Malformed form input: {source}"))]
    InvalidForm { source: FormRejection },
    #[snafu(display("Unable to set up tracing"))]
    Tracing {
        source: tracing::subscriber::SetGlobalDefaultError,
    },
    #[snafu(display("Unable to listen on {}", addr))]
    BindListener {
        source: std::io::Error,
        addr: String,
    },
    #[snafu(display("Error serving app"))]
    Serve { source: std::io::Error },
}

impl MahasiswaError {
    pub fn status_code(&self) -> StatusCode {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        match self {
            Self::OpenDatabase { .. } | Self::GetDatabaseConnection { .. } => ISE,
            Self::MakeQuery { source } => match source {
                sqlx::Error::RowNotFound => NF,
                _ => ISE,
            },
            Self::IdOutOfRange { .. } => ISE,
            Self::BadEnvVar { .. }
            | Self::EmptyEnvVar { .. }
            | Self::ZeroEnvVar { .. }
            | Self::ParseEnvVar { .. } => ISE,
            Self::MissingStudent { .. } | Self::InvalidStudentId { .. } => NF,
            Self::InvalidForm { source } => match source {
                // an oversize body stays a 413, everything else about the form is bad input
                FormRejection::BytesRejection(bytes) => bytes.status(),
                _ => BI,
            },
            Self::Tracing { .. } | Self::BindListener { .. } | Self::Serve { .. } => ISE,
        }
    }
}

impl IntoResponse for MahasiswaError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            error!(?self, "Error!");
        } else {
            warn!(?self, "Request rejected");
        }

        (status_code, self.to_string()).into_response()
    }
}
