use maud::{DOCTYPE, Markup, Render, html};

pub const PAGE_TITLE: &str = "Data Minat Mahasiswa";

/// Full HTML document around a page body.
pub fn page(body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8" {}
                meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                title { (PAGE_TITLE) }
            }
            body class="bg-gray-100 font-sans p-5 text-gray-900" {
                div class="bg-white p-5 rounded-md max-w-4xl mx-auto shadow-md" {
                    (body)
                }
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h2 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn render_table<const N: usize>(
    titles: [&'static str; N],
    items: Vec<[Markup; N]>,
    when_empty: &'static str,
) -> Markup {
    html! {
        div class="overflow-x-auto" {
            table class="w-full border-collapse" {
                thead class="border-b-2 border-gray-700 text-gray-700 text-left" {
                    tr {
                        @for title in titles {
                            th class="p-2.5" {(title)}
                        }
                    }
                }
                tbody {
                    @if items.is_empty() {
                        tr {
                            td colspan=(N) class="p-2.5 italic text-gray-500 text-center" {(when_empty)}
                        }
                    }
                    @for row in items {
                        tr class="border-b border-gray-300 last:border-b-0" {
                            @for col in row {
                                td class="p-2.5" {(col)}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub enum ButtonColour {
    Blue,
    Green,
    Yellow,
    Red,
    Grey,
}

impl ButtonColour {
    const fn classes(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-600 hover:bg-blue-800 text-white",
            Self::Green => "bg-green-600 hover:bg-green-800 text-white",
            Self::Yellow => "bg-yellow-400 hover:bg-yellow-500 text-black",
            Self::Red => "bg-red-600 hover:bg-red-800 text-white",
            Self::Grey => "bg-gray-500 hover:bg-gray-700 text-white",
        }
    }
}

pub fn link_button(href: &str, colour: ButtonColour, text: &str) -> Markup {
    html! {
        a href=(href) class={"inline-block py-1 px-2.5 mr-1 rounded text-sm no-underline " (colour.classes())} {(text)}
    }
}

/// Red link that only follows through once the browser's confirm dialog says yes.
pub fn confirm_link_button(href: &str, text: &str, question: &'static str) -> Markup {
    html! {
        a href=(href) class={"inline-block py-1 px-2.5 mr-1 rounded text-sm no-underline " (ButtonColour::Red.classes())} onclick={"return confirm('" (question) "')"} {(text)}
    }
}

pub fn form_element(id: &'static str, label: &'static str, input: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-gray-700 text-sm font-bold mb-2" {(label)}
            (input)
        }
    }
}

pub fn simple_form_element(
    id: &'static str,
    label: &'static str,
    required: bool,
    current_value: Option<&str>,
) -> Markup {
    form_element(
        id,
        label,
        html! {
            input type="text" id=(id) name=(id) value=[current_value] required[required] class="shadow appearance-none border border-gray-300 rounded w-full py-2 px-3 leading-tight focus:outline-none focus:ring focus:ring-blue-500";
        },
    )
}

pub fn form_submit_button(text: &str) -> Markup {
    html! {
        button type="submit" class="bg-blue-600 hover:bg-blue-800 text-white font-bold py-2 px-4 rounded" {(text)}
    }
}
