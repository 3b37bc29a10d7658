//! Markdown to styled HTML conversion.

use pulldown_cmark::{html, Options, Parser};

/// Convert summary Markdown to an HTML fragment. Tables and fenced code
/// blocks are enabled to match what the model is asked to produce.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Wrap an HTML fragment in the fixed document shell and style sheet.
pub fn wrap_document(body: &str) -> String {
    format!(
        r#"<html>
<head>
    <style>
        body {{
            font-family: Arial, sans-serif;
            font-size: 18px;
            line-height: 1.5;
            margin: 20px;
        }}
        h2 {{
            font-size: 24px;
            color: #2a3d66;
        }}
        table, th, td {{
            border: 1px solid #444444;
            border-collapse: collapse;
            padding: 4px;
        }}
        pre {{
            background-color: #f4f4f4;
            padding: 8px;
        }}
    </style>
</head>
<body>
    <h2>Detailed Notes:</h2>
    {body}
</body>
</html>
"#
    )
}

/// Full conversion: Markdown in, renderable HTML document out.
pub fn render_html(markdown: &str) -> String {
    wrap_document(&to_html(markdown))
}
