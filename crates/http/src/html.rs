//! Minimal HTML building blocks shared by every page.

use std::borrow::Cow;

/// Escape text for use in element content and quoted attribute values.
pub fn escape(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }

    let mut escaped = String::with_capacity(raw.len() + 8);
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

const STYLE: &str = r#"
body{margin:0;font-family:system-ui,sans-serif;background:#f9fafb;color:#111827}
main{max-width:80rem;margin:0 auto;padding:1rem 2rem}
nav{background:#fff;border-bottom:1px solid #e5e7eb;padding:0 2rem;display:flex;gap:2rem;align-items:center;height:4rem}
nav a{color:#374151;text-decoration:none;padding:.5rem .75rem;border-radius:.375rem}
nav a.active{background:#dbeafe;color:#1d4ed8}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(16rem,1fr));gap:1.5rem}
.card{background:#fff;border-radius:.5rem;box-shadow:0 1px 3px rgba(0,0,0,.1);overflow:hidden}
.card .body{padding:1rem}
.cover{height:12rem;background:#e5e7eb;display:flex;align-items:center;justify-content:center;font-size:2.5rem}
.cover img{width:100%;height:100%;object-fit:cover}
.badge{font-size:.8rem;padding:.2rem .5rem;border-radius:999px}
.in-stock{background:#dcfce7;color:#166534}.out-of-stock{background:#fee2e2;color:#991b1b}
.genre{background:#dbeafe;color:#1e40af}
.banner{padding:1rem;border-radius:.375rem;margin-bottom:1.5rem}
.banner.error{background:#fef2f2;border:1px solid #fecaca;color:#b91c1c}
.banner.notice{background:#f0fdf4;border:1px solid #bbf7d0;color:#166534}
.pagination{display:flex;gap:.25rem;justify-content:center;margin:2rem 0}
.pagination a,.pagination span{padding:.5rem .75rem;border:1px solid #d1d5db;border-radius:.375rem;text-decoration:none;color:#6b7280;background:#fff}
.pagination .current{background:#2563eb;color:#fff}
.pagination .disabled,.pagination .ellipsis{opacity:.5;border-color:transparent}
.button{display:inline-block;padding:.5rem 1rem;border-radius:.375rem;border:0;background:#2563eb;color:#fff;text-decoration:none;cursor:pointer}
.button.buy{background:#16a34a}.button.danger{background:#dc2626}.button.muted{background:#e5e7eb;color:#1f2937}
.button[disabled]{background:#9ca3af;cursor:not-allowed}
table{width:100%;border-collapse:collapse;background:#fff}
th,td{text-align:left;padding:.5rem;border-bottom:1px solid #e5e7eb}
"#;

/// Wrap a page body in a complete HTML document.
pub fn document(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n{head_extra}</head>\n\
         <body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}
