use html_escape::encode_text;

/// Renders the answer document shown after a successful query.
///
/// The answer text itself stays plain; only this rendering converts its
/// newlines to `<br>` markup. User-controlled strings are escaped before
/// they reach the document.
pub fn render_response_panel(model: &str, question: &str, answer: &str) -> String {
    let model = encode_text(model);
    let question = encode_text(question);
    let answer = encode_text(answer).replace('\n', "<br>");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Lilypad Response</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            padding: 20px;
            background: #121212;
            color: #e0e0e0;
        }}
        .container {{
            max-width: 800px;
            margin: auto;
        }}
        .query-container, .response-container {{
            background: #1e1e1e;
            padding: 15px;
            border-radius: 6px;
            margin-bottom: 20px;
            border: 1px solid #333;
        }}
        h3 {{
            margin-top: 0;
            color: #ffffff;
        }}
        pre {{
            background: #2d2d2d;
            color: #d4d4d4;
            padding: 12px;
            border-radius: 4px;
            white-space: pre-wrap;
            word-wrap: break-word;
            overflow: auto;
        }}
        code {{
            font-family: 'Courier New', monospace;
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="query-container">
            <h3>Selected Model: {model}</h3>
            <p><strong>Your Query:</strong> {question}</p>
        </div>
        <div class="response-container">
            <h3>Lilypad Response</h3>
            <pre><code>{answer}</code></pre>
        </div>
    </div>
</body>
</html>
"#
    )
}
