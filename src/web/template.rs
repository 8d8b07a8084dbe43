//! Inline HTML for the form page and result/error views.
//!
//! One static page, no templating engine: the UI is two forms and a result
//! box. Model output is HTML-escaped before interpolation so prose containing
//! angle brackets renders literally.

/// Escape text for safe interpolation into HTML.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const PAGE_STYLE: &str = r#"
    body { background-color: #f7f3ea; color: #000; font-family: "Segoe UI", sans-serif;
           max-width: 860px; margin: 2rem auto; padding: 0 1rem; }
    h1, h2 { color: #000; }
    textarea { width: 100%; height: 180px; background-color: #fffdf8;
               border: 1px solid #c5c1b6; border-radius: 8px; padding: 0.6rem; }
    input[type="file"] { background-color: #fffdf8; border: 1px dashed #b7b2a3;
                         border-radius: 8px; padding: 0.75rem; width: 100%; }
    button { background-color: #6b705c; color: #fff; border: none; border-radius: 8px;
             padding: 0.6rem 1.5rem; font-weight: 500; cursor: pointer; }
    button:hover { background-color: #5a5f4b; }
    form { background-color: #efe8d8; border-radius: 10px; padding: 1.5rem; margin-bottom: 2rem; }
    .result-box { background-color: #fff; padding: 1.2rem; border-radius: 10px;
                  border-left: 4px solid #6b705c; margin-top: 1rem; white-space: pre-wrap; }
    .error-box { background-color: #fff; padding: 1.2rem; border-radius: 10px;
                 border-left: 4px solid #a23b3b; margin-top: 1rem; white-space: pre-wrap; }
    .caption { color: #2f2f2f; font-size: 0.85rem; }
"#;

/// Render the index page with both mode forms.
pub fn render_index() -> String {
    page(
        r#"
<h1>Research Assistant</h1>
<p>Identify relevant research papers, or generate structured academic reports
from a topic and/or an uploaded PDF.</p>

<h2>Research Paper Finder</h2>
<form action="/find" method="post" enctype="multipart/form-data">
  <p><label>Research topic or statement</label><br>
  <textarea name="text" placeholder="Enter a research topic or academic statement"></textarea></p>
  <p><label>Upload reference PDF (optional)</label><br>
  <input type="file" name="pdf" accept="application/pdf"></p>
  <button type="submit">Find Research Paper</button>
</form>

<h2>Research Report Generator</h2>
<form action="/report" method="post" enctype="multipart/form-data">
  <p><label>Research topic (optional)</label><br>
  <textarea name="text" placeholder="Enter a research topic"></textarea></p>
  <p><label>Upload research paper PDF</label><br>
  <input type="file" name="pdf" accept="application/pdf"></p>
  <button type="submit">Generate Research Report (PDF)</button>
</form>

<p class="caption">Designed for academic, examination, and research use.</p>
"#,
    )
}

/// Render a finder result below a link back to the form.
pub fn render_result(result: &str) -> String {
    page(&format!(
        r#"<h1>Result</h1>
<div class="result-box">{}</div>
<p><a href="/">&larr; Back</a></p>"#,
        escape_html(result)
    ))
}

/// Render an error message.
pub fn render_error(message: &str) -> String {
    page(&format!(
        r#"<h1>Error</h1>
<div class="error-box">{}</div>
<p><a href="/">&larr; Back</a></p>"#,
        escape_html(message)
    ))
}

fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Research Assistant</title>
<style>{PAGE_STYLE}</style>
</head>
<body>
{body}
</body>
</html>"#
    )
}
