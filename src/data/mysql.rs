use crate::{
    config::DbConfig,
    data::{
        StudentStore,
        student::{Student, StudentForm, StudentId},
    },
    error::{
        GetDatabaseConnectionSnafu, IdOutOfRangeSnafu, MahasiswaResult, MakeQuerySnafu,
        OpenDatabaseSnafu,
    },
};
use async_trait::async_trait;
use snafu::{OptionExt, ResultExt};
use sqlx::{Connection, MySql, MySqlPool, mysql::MySqlPoolOptions, pool::PoolConnection};

type StudentRow = (i64, String, String, String, String);

//`ID` may be declared UNSIGNED, which sqlx won't decode into i64 without the cast
const SELECT_ALL: &str =
    "SELECT CAST(ID AS SIGNED) AS ID, Nama, NPM, Kelas, Minat FROM mahasiswa";
const SELECT_BY_ID: &str =
    "SELECT CAST(ID AS SIGNED) AS ID, Nama, NPM, Kelas, Minat FROM mahasiswa WHERE ID = ?";

fn row_to_student((id, name, student_number, class, interest): StudentRow) -> Student {
    Student {
        id: StudentId(id),
        name,
        student_number,
        class,
        interest,
    }
}

/// The pre-existing `mahasiswa` table: `ID`, `Nama`, `NPM`, `Kelas`, `Minat`.
#[derive(Clone, Debug)]
pub struct MySqlStudentStore {
    pool: MySqlPool,
}

impl MySqlStudentStore {
    /// Opens the pool and pings it once, so a dead database fails startup rather than the first request.
    pub async fn connect(options: MySqlPoolOptions, db_config: &DbConfig) -> MahasiswaResult<Self> {
        let pool = options
            .connect_with(db_config.connect_options())
            .await
            .context(OpenDatabaseSnafu)?;

        let mut conn = pool.acquire().await.context(OpenDatabaseSnafu)?;
        conn.ping().await.context(OpenDatabaseSnafu)?;
        drop(conn);

        Ok(Self { pool })
    }

    pub async fn get_connection(&self) -> MahasiswaResult<PoolConnection<MySql>> {
        self.pool
            .acquire()
            .await
            .context(GetDatabaseConnectionSnafu)
    }
}

#[async_trait]
impl StudentStore for MySqlStudentStore {
    async fn get_all(&self) -> MahasiswaResult<Vec<Student>> {
        let mut conn = self.get_connection().await?;

        let rows: Vec<StudentRow> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&mut *conn)
            .await
            .context(MakeQuerySnafu)?;

        Ok(rows.into_iter().map(row_to_student).collect())
    }

    async fn get_by_id(&self, id: StudentId) -> MahasiswaResult<Option<Student>> {
        let mut conn = self.get_connection().await?;

        let row: Option<StudentRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.0)
            .fetch_optional(&mut *conn)
            .await
            .context(MakeQuerySnafu)?;

        Ok(row.map(row_to_student))
    }

    async fn insert(&self, to_be_added: StudentForm) -> MahasiswaResult<StudentId> {
        let StudentForm {
            name,
            student_number,
            class,
            interest,
        } = to_be_added;
        let mut conn = self.get_connection().await?;

        let raw = sqlx::query("INSERT INTO mahasiswa (Nama, NPM, Kelas, Minat) VALUES (?, ?, ?, ?)")
            .bind(name)
            .bind(student_number)
            .bind(class)
            .bind(interest)
            .execute(&mut *conn)
            .await
            .context(MakeQuerySnafu)?
            .last_insert_id();

        i64::try_from(raw)
            .ok()
            .map(StudentId)
            .context(IdOutOfRangeSnafu { raw })
    }

    async fn update_by_id(&self, id: StudentId, replacement: StudentForm) -> MahasiswaResult<bool> {
        let StudentForm {
            name,
            student_number,
            class,
            interest,
        } = replacement;
        let mut conn = self.get_connection().await?;

        //sqlx connects with CLIENT_FOUND_ROWS, so an unchanged row still counts as affected
        let affected =
            sqlx::query("UPDATE mahasiswa SET Nama = ?, NPM = ?, Kelas = ?, Minat = ? WHERE ID = ?")
                .bind(name)
                .bind(student_number)
                .bind(class)
                .bind(interest)
                .bind(id.0)
                .execute(&mut *conn)
                .await
                .context(MakeQuerySnafu)?
                .rows_affected();

        Ok(affected > 0)
    }

    async fn delete_by_id(&self, id: StudentId) -> MahasiswaResult<bool> {
        let mut conn = self.get_connection().await?;

        let affected = sqlx::query("DELETE FROM mahasiswa WHERE ID = ?")
            .bind(id.0)
            .execute(&mut *conn)
            .await
            .context(MakeQuerySnafu)?
            .rows_affected();

        Ok(affected > 0)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
