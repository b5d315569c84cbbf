use crate::{
    data::student::Student,
    maud_conveniences::{
        ButtonColour, PAGE_TITLE, confirm_link_button, form_submit_button, link_button, page,
        render_table, simple_form_element, title,
    },
};
use maud::{Markup, html};

/// Which way the add/edit form points.
#[derive(Debug, Clone)]
pub enum FormMode {
    Create,
    Edit(Student),
}

impl FormMode {
    fn action(&self) -> String {
        match self {
            Self::Create => "/create".to_string(),
            Self::Edit(student) => format!("/edit/{}", student.id),
        }
    }

    const fn heading(&self) -> &'static str {
        match self {
            Self::Create => "Tambah Mahasiswa",
            Self::Edit(_) => "Edit Mahasiswa",
        }
    }

    const fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Tambah",
            Self::Edit(_) => "Simpan",
        }
    }

    const fn existing(&self) -> Option<&Student> {
        match self {
            Self::Create => None,
            Self::Edit(student) => Some(student),
        }
    }
}

pub fn list_view(students: &[Student]) -> Markup {
    let rows = students
        .iter()
        .map(|student| {
            let id = student.id;
            [
                html! {(id)},
                html! {(student.name)},
                html! {(student.student_number)},
                html! {(student.class)},
                html! {(student.interest)},
                html! {
                    (link_button(&format!("/details/{id}"), ButtonColour::Green, "Details"))
                    (link_button(&format!("/edit/{id}"), ButtonColour::Yellow, "Edit"))
                    (confirm_link_button(
                        &format!("/delete/{id}"),
                        "Delete",
                        "Are you sure you want to delete this?",
                    ))
                },
            ]
        })
        .collect();

    page(html! {
        (title(PAGE_TITLE))
        div class="mb-2.5" {
            (link_button("/create", ButtonColour::Blue, "Tambah"))
        }
        (render_table(
            ["Id", "Nama", "NPM", "Kelas", "Minat", "Actions"],
            rows,
            "Belum ada data mahasiswa.",
        ))
    })
}

pub fn form_view(mode: &FormMode) -> Markup {
    let existing = mode.existing();

    page(html! {
        (title(mode.heading()))
        form method="post" action=(mode.action()) {
            (simple_form_element("nama", "Nama", true, existing.map(|s| s.name.as_str())))
            (simple_form_element("npm", "NPM", true, existing.map(|s| s.student_number.as_str())))
            (simple_form_element("kelas", "Kelas", true, existing.map(|s| s.class.as_str())))
            (simple_form_element("minat", "Minat", true, existing.map(|s| s.interest.as_str())))

            div class="flex flex-row items-center space-x-2" {
                (form_submit_button(mode.submit_label()))
                (link_button("/", ButtonColour::Grey, "Kembali"))
            }
        }
    })
}

pub fn detail_view(student: &Student) -> Markup {
    let fields = [
        ("Id", student.id.to_string()),
        ("Nama", student.name.clone()),
        ("NPM", student.student_number.clone()),
        ("Kelas", student.class.clone()),
        ("Minat", student.interest.clone()),
    ];

    page(html! {
        (title("Detail Mahasiswa"))
        dl class="grid grid-cols-[max-content_1fr] gap-x-6 gap-y-2 mb-6" {
            @for (key, value) in fields {
                dt class="font-semibold text-gray-700" {(key)}
                dd {(value)}
            }
        }
        div {
            (link_button("/", ButtonColour::Grey, "Kembali"))
            (link_button(&format!("/edit/{}", student.id), ButtonColour::Yellow, "Edit"))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::student::StudentId;

    fn student(id: i64, name: &str) -> Student {
        Student {
            id: StudentId(id),
            name: name.into(),
            student_number: "12345".into(),
            class: "TI-1".into(),
            interest: "AI".into(),
        }
    }

    const NASTY: &str = "<script>alert(1)</script>";

    #[test]
    fn list_escapes_field_values() {
        let html = list_view(&[student(1, NASTY)]).into_string();

        assert!(!html.contains(NASTY));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn detail_escapes_field_values() {
        let mut s = student(1, NASTY);
        s.interest = "Tom & \"Jerry\"".into();
        let html = detail_view(&s).into_string();

        assert!(!html.contains(NASTY));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
    }

    #[test]
    fn edit_form_escapes_prefilled_values() {
        let mut s = student(3, "x");
        s.class = "\"><script>".into();
        let html = form_view(&FormMode::Edit(s)).into_string();

        assert!(!html.contains("value=\"\"><script>"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
    }

    #[test]
    fn list_links_every_row() {
        let html = list_view(&[student(4, "Ani"), student(9, "Budi")]).into_string();

        for id in [4, 9] {
            assert!(html.contains(&format!("href=\"/details/{id}\"")));
            assert!(html.contains(&format!("href=\"/edit/{id}\"")));
            assert!(html.contains(&format!("href=\"/delete/{id}\"")));
        }
        assert!(html.contains("href=\"/create\""));
        assert!(!html.contains("Belum ada data mahasiswa."));
    }

    #[test]
    fn empty_list_says_so() {
        let html = list_view(&[]).into_string();

        assert!(html.contains("Belum ada data mahasiswa."));
        assert!(html.contains("href=\"/create\""));
    }

    #[test]
    fn create_form_is_blank_and_posts_to_create() {
        let html = form_view(&FormMode::Create).into_string();

        assert!(html.contains("action=\"/create\""));
        assert!(html.contains("Tambah"));
        for field in ["nama", "npm", "kelas", "minat"] {
            assert!(html.contains(&format!("name=\"{field}\"")));
        }
        assert!(!html.contains("value="));
    }

    #[test]
    fn edit_form_is_prefilled_and_posts_to_edit() {
        let html = form_view(&FormMode::Edit(student(0, "Ani"))).into_string();

        //an id of zero is still edit mode
        assert!(html.contains("action=\"/edit/0\""));
        assert!(html.contains("Simpan"));
        assert!(html.contains("value=\"Ani\""));
        assert!(html.contains("value=\"12345\""));
        assert!(html.contains("value=\"TI-1\""));
        assert!(html.contains("value=\"AI\""));
    }

    #[test]
    fn detail_shows_fields_and_links() {
        let html = detail_view(&student(5, "Ani")).into_string();

        for value in ["Ani", "12345", "TI-1", "AI"] {
            assert!(html.contains(&format!("<dd>{value}</dd>")));
        }
        assert!(html.contains("href=\"/edit/5\""));
        assert!(html.contains("href=\"/\""));
    }
}
