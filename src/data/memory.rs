use crate::{
    data::{
        StudentStore,
        student::{Student, StudentForm, StudentId},
    },
    error::{MahasiswaError, MahasiswaResult},
};
use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

/// Stand-in for the `mahasiswa` table so handlers can be driven without a database.
#[derive(Debug, Default)]
pub struct InMemoryStudentStore {
    rows: Mutex<Rows>,
    broken: bool,
}

#[derive(Debug, Default)]
struct Rows {
    last_id: i64,
    by_id: BTreeMap<StudentId, Student>,
}

impl InMemoryStudentStore {
    /// Every call fails like a database that went away mid-run.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    fn rows(&self) -> MahasiswaResult<MutexGuard<'_, Rows>> {
        if self.broken {
            return Err(MahasiswaError::MakeQuery {
                source: sqlx::Error::PoolClosed,
            });
        }
        Ok(self.rows.lock().expect("in-memory store poisoned"))
    }
}

#[async_trait]
impl StudentStore for InMemoryStudentStore {
    async fn get_all(&self) -> MahasiswaResult<Vec<Student>> {
        Ok(self.rows()?.by_id.values().cloned().collect())
    }

    async fn get_by_id(&self, id: StudentId) -> MahasiswaResult<Option<Student>> {
        Ok(self.rows()?.by_id.get(&id).cloned())
    }

    async fn insert(&self, to_be_added: StudentForm) -> MahasiswaResult<StudentId> {
        let mut rows = self.rows()?;
        rows.last_id += 1;
        let id = StudentId(rows.last_id);
        rows.by_id.insert(id, Student::from_form(id, to_be_added));
        Ok(id)
    }

    async fn update_by_id(&self, id: StudentId, replacement: StudentForm) -> MahasiswaResult<bool> {
        let mut rows = self.rows()?;
        Ok(match rows.by_id.get_mut(&id) {
            Some(existing) => {
                *existing = Student::from_form(id, replacement);
                true
            }
            None => false,
        })
    }

    async fn delete_by_id(&self, id: StudentId) -> MahasiswaResult<bool> {
        Ok(self.rows()?.by_id.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, student_number: &str, class: &str, interest: &str) -> StudentForm {
        StudentForm {
            name: name.into(),
            student_number: student_number.into(),
            class: class.into(),
            interest: interest.into(),
        }
    }

    #[tokio::test]
    async fn inserted_fields_come_back_exactly() {
        let store = InMemoryStudentStore::default();
        let tuples = [
            form("Ani", "12345", "TI-1", "AI"),
            form("", "", "", ""),
            form("<script>alert(1)</script>", "&amp;", "\"quoted\"", "línea\nbaru"),
        ];

        for tuple in tuples {
            let id = store.insert(tuple.clone()).await.unwrap();
            let fetched = store.get_existing(id).await.unwrap();

            assert_eq!(fetched.id, id);
            assert_eq!(fetched.name, tuple.name);
            assert_eq!(fetched.student_number, tuple.student_number);
            assert_eq!(fetched.class, tuple.class);
            assert_eq!(fetched.interest, tuple.interest);
        }
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let store = InMemoryStudentStore::default();
        let first = store.insert(form("a", "1", "x", "y")).await.unwrap();
        let second = store.insert(form("a", "1", "x", "y")).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn second_update_wins_completely() {
        let store = InMemoryStudentStore::default();
        let id = store.insert(form("Ani", "1", "TI-1", "AI")).await.unwrap();

        assert!(store.update_by_id(id, form("A", "2", "TI-2", "Web")).await.unwrap());
        assert!(store.update_by_id(id, form("B", "3", "TI-3", "")).await.unwrap());

        let fetched = store.get_existing(id).await.unwrap();
        assert_eq!(fetched, Student::from_form(id, form("B", "3", "TI-3", "")));
    }

    #[tokio::test]
    async fn delete_twice_is_quiet() {
        let store = InMemoryStudentStore::default();
        let id = store.insert(form("Ani", "1", "TI-1", "AI")).await.unwrap();

        assert!(store.delete_by_id(id).await.unwrap());
        assert!(!store.delete_by_id(id).await.unwrap());
        assert!(store.get_by_id(id).await.unwrap().is_none());
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let store = InMemoryStudentStore::default();
        let id = store.insert(form("Ani", "1", "TI-1", "AI")).await.unwrap();
        store.delete_by_id(id).await.unwrap();

        for gone in [id, StudentId(999)] {
            let err = store.get_existing(gone).await.unwrap_err();
            assert!(matches!(err, MahasiswaError::MissingStudent { id } if id == gone));
        }
        assert!(!store.update_by_id(StudentId(999), form("x", "x", "x", "x")).await.unwrap());
    }
}
