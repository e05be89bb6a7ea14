use axum::response::Html;
use shelf_http::html::{document, escape};

/// Which navigation entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Catalog,
    Admin,
}

/// Commits the search box after a quiet period, replacing the current URL.
const SEARCH_SCRIPT: &str = r#"<script>
document.querySelectorAll('form[data-debounce-ms]').forEach(function (form) {
  var input = form.querySelector('input[name="search"]');
  var delay = parseInt(form.dataset.debounceMs, 10);
  var timer = null;
  input.addEventListener('input', function () {
    clearTimeout(timer);
    timer = setTimeout(function () {
      var params = new URLSearchParams(new FormData(form));
      if (!input.value) { params.delete('search'); }
      params.set('page', '0');
      window.location.replace(form.action + '?' + params.toString());
    }, delay);
  });
  if (input.value) {
    input.focus();
    input.setSelectionRange(input.value.length, input.value.length);
  }
});
</script>"#;

fn navbar(section: Section) -> String {
    let link = |href: &str, label: &str, active: bool| {
        format!(
            "<a href=\"{href}\"{class}>{label}</a>",
            class = if active { " class=\"active\"" } else { "" }
        )
    };
    let caption = match section {
        Section::Catalog => "Customer View",
        Section::Admin => "Admin Panel",
    };
    format!(
        "<nav>\n<a href=\"/\"><strong>&#128218; Bookstore</strong></a>\n{}\n{}\n<span class=\"caption\">{}</span>\n</nav>",
        link("/books", "Browse Books", section == Section::Catalog),
        link("/admin/books", "Manage Books", section == Section::Admin),
        caption,
    )
}

/// Full page: navigation bar, the given main content, and the search script.
pub fn page(title: &str, section: Section, main: &str) -> Html<String> {
    let body = format!("{}\n<main>\n{}\n</main>\n{}", navbar(section), main, SEARCH_SCRIPT);
    Html(document(title, "", &body))
}

/// Outcome shown above a page's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Notice(String),
    Error(String),
}

impl Message {
    pub fn render(&self) -> String {
        match self {
            Message::Notice(text) => banner("notice", text),
            Message::Error(text) => banner("error", text),
        }
    }
}

/// `error` or `notice` message box.
pub fn banner(kind: &str, message: &str) -> String {
    format!(
        "<div class=\"banner {kind}\" role=\"{role}\">{}</div>",
        escape(message),
        role = if kind == "error" { "alert" } else { "status" },
    )
}
