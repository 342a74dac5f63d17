//! Self-contained HTML page that replays the typing in a browser.
//!
//! The page embeds the text and a small script using the same delay
//! model as the animator. Highlighting is delegated to highlight.js.

use anyhow::{Context, Result};

use super::ExportSettings;
use crate::animator::SourceText;
use crate::samples::display_name;
use crate::theme::traffic_lights;

const HIGHLIGHT_VERSION: &str = "11.9.0";

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for a JavaScript template literal inside a `<script>`.
pub fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
        .replace("</", "<\\/")
}

/// Quoted JavaScript string literal, safe inside a `<script>`.
fn js_string_literal(text: &str) -> Result<String> {
    let quoted = serde_json::to_string(text).context("Failed to encode string for script")?;
    Ok(quoted
        .replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

/// Fill `__NAME__` placeholders in one pass over `template`.
///
/// Substituted values are written once and never scanned again.
fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("__") {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        match values.iter().find(|(token, _)| rest.starts_with(*token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                out.push_str("__");
                rest = &rest[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Render the page.
pub fn render(source: &SourceText, settings: &ExportSettings) -> Result<String> {
    let theme = &settings.theme;
    let body_size = match settings.aspect_ratio.css() {
        Some(ratio) => format!("aspect-ratio: {};", ratio),
        None => "min-height: 300px; max-height: 500px;".to_string(),
    };
    let line_number_display = if settings.show_line_numbers {
        "inline-block"
    } else {
        "none"
    };

    let replacements = [
        ("__HLJS__", HIGHLIGHT_VERSION.to_string()),
        ("__BG_TERTIARY__", theme.bg_tertiary.css()),
        ("__BORDER__", theme.border.css()),
        ("__TEXT_SECONDARY__", theme.text_secondary.css()),
        ("__TERMINAL_BG__", theme.terminal_bg.css()),
        ("__TERMINAL_TEXT__", theme.terminal_text.css()),
        ("__ACCENT__", theme.accent.css()),
        ("__CLOSE__", traffic_lights::CLOSE.css()),
        ("__MINIMIZE__", traffic_lights::MINIMIZE.css()),
        ("__MAXIMIZE__", traffic_lights::MAXIMIZE.css()),
        ("__BODY_SIZE__", body_size),
        ("__LINE_NUMBER_DISPLAY__", line_number_display.to_string()),
        ("__TITLE__", escape_html(&settings.title)),
        ("__LANGUAGE_DISPLAY__", escape_html(&display_name(&settings.language))),
        ("__LANGUAGE__", js_string_literal(&settings.language)?),
        ("__SPEED__", format_speed(settings.animator.speed_ms)),
        ("__SHOW_LINE_NUMBERS__", settings.show_line_numbers.to_string()),
        ("__CODE__", escape_template_literal(&source.text())),
    ];

    Ok(fill_template(PAGE_TEMPLATE, &replacements))
}

fn format_speed(speed_ms: f64) -> String {
    if speed_ms.fract() == 0.0 {
        format!("{}", speed_ms as i64)
    } else {
        format!("{}", speed_ms)
    }
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>__TITLE__</title>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/__HLJS__/styles/atom-one-dark.min.css">
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            line-height: 1.6;
        }

        .terminal-section { display: inline-block; min-width: 800px; }

        @media (max-width: 800px) {
            .terminal-section { min-width: 100%; }
        }

        .terminal-header {
            background-color: __BG_TERTIARY__;
            padding: 0.5rem 0.625rem;
            display: flex;
            align-items: center;
            gap: 0.75rem;
            border: 1px solid __BORDER__;
            border-radius: 8px 8px 0 0;
        }

        .terminal-buttons { display: flex; gap: 0.375rem; }

        .terminal-button {
            width: 10px;
            height: 10px;
            border-radius: 50%;
            display: inline-block;
        }

        .terminal-button.close { background-color: __CLOSE__; }
        .terminal-button.minimize { background-color: __MINIMIZE__; }
        .terminal-button.maximize { background-color: __MAXIMIZE__; }

        .terminal-title {
            font-size: 0.8rem;
            color: __TEXT_SECONDARY__;
            font-weight: 600;
            flex: 1;
        }

        .terminal-language {
            font-size: 0.8rem;
            color: __TEXT_SECONDARY__;
            margin-left: auto;
        }

        .terminal-body {
            background-color: __TERMINAL_BG__;
            padding: 1.5rem;
            __BODY_SIZE__
            overflow: auto;
            font-family: 'Courier New', Courier, monospace;
            font-size: 1rem;
            line-height: 1.4;
            tab-size: 4;
            border: 1px solid __BORDER__;
            border-top: none;
            border-radius: 0 0 8px 8px;
        }

        .terminal-line {
            color: __TERMINAL_TEXT__;
            margin-bottom: 0.25rem;
            white-space: nowrap;
        }

        .code-content { white-space: pre; display: inline; }

        .line-number {
            display: __LINE_NUMBER_DISPLAY__;
            color: __TEXT_SECONDARY__;
            opacity: 0.5;
            margin-right: 0.75rem;
            white-space: pre;
            user-select: none;
        }

        .cursor {
            display: inline-block;
            color: __ACCENT__;
            animation: blink 1s infinite;
            margin-left: 2px;
            font-weight: bold;
        }

        @keyframes blink {
            0%, 50% { opacity: 1; }
            51%, 100% { opacity: 0; }
        }

        .terminal-body .hljs-comment { font-style: normal !important; }
    </style>
</head>
<body>
    <div class="terminal-section">
        <div class="terminal-header">
            <div class="terminal-buttons">
                <span class="terminal-button close"></span>
                <span class="terminal-button minimize"></span>
                <span class="terminal-button maximize"></span>
            </div>
            <div class="terminal-title">__TITLE__</div>
            <div class="terminal-language">__LANGUAGE_DISPLAY__</div>
        </div>
        <div class="terminal-body" id="terminal"></div>
    </div>

    <script src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/__HLJS__/highlight.min.js"></script>
    <script>
        function animateTerminal(code, language, typingSpeed, showLineNumbers) {
            const terminal = document.getElementById('terminal');
            if (!terminal) return;

            const lines = code.split('\n');
            let currentLine = 0;
            let currentChar = 0;
            terminal.innerHTML = '';

            function between(lo, hi) {
                return lo + Math.random() * (hi - lo);
            }

            function typingDelay(ch) {
                const base = typingSpeed * between(0.5, 1.5);
                if ('.!?;'.includes(ch)) return base * between(3.5, 5.5);
                if (' ,:)}]>'.includes(ch)) return base * between(2.0, 3.5);
                if ('({['.includes(ch)) return base * between(1.8, 2.8);
                return base;
            }

            function highlight(lineElement) {
                const span = lineElement.querySelector('.code-content');
                if (!span || language === 'plaintext' || typeof hljs === 'undefined') return;
                try {
                    span.innerHTML = hljs.highlight(span.textContent, { language: language }).value;
                } catch (e) {
                    console.warn('Highlighting failed:', e);
                }
            }

            function cursor() {
                const el = document.createElement('span');
                el.className = 'cursor';
                el.textContent = '|';
                return el;
            }

            function step() {
                if (currentLine >= lines.length) {
                    const last = terminal.lastElementChild;
                    if (last) last.appendChild(cursor());
                    return;
                }

                const text = lines[currentLine];
                if (currentChar === 0) {
                    const line = document.createElement('div');
                    line.className = 'terminal-line';
                    const number = document.createElement('span');
                    number.className = 'line-number';
                    number.textContent = String(currentLine + 1).padStart(3, ' ');
                    line.appendChild(number);
                    const span = document.createElement('span');
                    span.className = 'code-content';
                    line.appendChild(span);
                    line.appendChild(cursor());
                    terminal.appendChild(line);
                }

                const line = terminal.lastElementChild;
                const span = line.querySelector('.code-content');
                if (currentChar < text.length) {
                    const ch = text[currentChar];
                    span.textContent += ch;
                    currentChar++;
                    terminal.scrollTop = terminal.scrollHeight;
                    setTimeout(step, typingDelay(ch));
                } else {
                    const c = line.querySelector('.cursor');
                    if (c) c.remove();
                    highlight(line);
                    currentLine++;
                    currentChar = 0;
                    setTimeout(step, typingSpeed * between(3, 5));
                }
            }

            step();
        }

        const embeddedCode = `__CODE__`;
        setTimeout(() => animateTerminal(embeddedCode, __LANGUAGE__, __SPEED__, __SHOW_LINE_NUMBERS__), 500);
    </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::settings;
    use crate::export::AspectRatio;
    use crate::theme::Theme;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn escapes_template_literal_breakers() {
        assert_eq!(
            escape_template_literal(r"`${x}` \n </script>"),
            r"\`\${x}\` \\n <\/script>"
        );
    }

    #[test]
    fn page_embeds_theme_title_and_code() {
        let mut settings = settings();
        settings.title = "<Demo>".to_string();
        settings.theme = Theme::nord();
        let page = render(&SourceText::new("let s = `${a}`;"), &settings).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<div class=\"terminal-title\">&lt;Demo&gt;</div>"));
        assert!(page.contains("<div class=\"terminal-language\">Rust</div>"));
        assert!(page.contains("background-color: #2e3440;"));
        assert!(page.contains(r"const embeddedCode = `let s = \`\${a}\`;`;"));
        assert!(page.contains("animateTerminal(embeddedCode, \"rust\", 40, true)"));
        assert!(page.contains("min-height: 300px; max-height: 500px;"));
        assert!(!page.contains("__"), "unexpanded placeholder left in page");
    }

    #[test]
    fn aspect_ratio_and_hidden_line_numbers() {
        let mut settings = settings();
        settings.aspect_ratio = AspectRatio::Classic;
        settings.show_line_numbers = false;
        let page = render(&SourceText::new("x"), &settings).unwrap();

        assert!(page.contains("aspect-ratio: 3 / 2;"));
        assert!(page.contains("display: none;"));
        assert!(page.contains(", 40, false)"));
    }

    #[test]
    fn placeholder_text_in_code_is_left_alone() {
        let page = render(&SourceText::new("__TITLE__"), &settings()).unwrap();
        assert!(page.contains("const embeddedCode = `__TITLE__`;"));
    }

    #[test]
    fn placeholder_text_in_title_is_not_expanded() {
        let mut settings = settings();
        settings.title = "__CODE__ __LANGUAGE__".to_string();
        let page = render(&SourceText::new("<img src=x onerror=alert(1)>"), &settings).unwrap();

        let title_line = page
            .lines()
            .find(|line| line.contains("<title>"))
            .unwrap();
        assert_eq!(title_line.trim(), "<title>__CODE__ __LANGUAGE__</title>");
        assert!(page.contains("<div class=\"terminal-title\">__CODE__ __LANGUAGE__</div>"));
        assert_eq!(page.matches("<img").count(), 1);
    }

    #[test]
    fn fill_template_writes_each_value_once() {
        let values = [("__A__", "__B__".to_string()), ("__B__", "b".to_string())];
        assert_eq!(fill_template("__A__/__B__/__C__", &values), "__B__/b/__C__");
    }

    #[test]
    fn language_literal_survives_line_breaks() {
        let mut settings = settings();
        settings.language = "ru\nst'\u{2028}</script>".to_string();
        let page = render(&SourceText::new("x"), &settings).unwrap();

        let call = page
            .lines()
            .find(|line| line.contains("animateTerminal(embeddedCode"))
            .unwrap();
        assert_eq!(
            call.trim(),
            r#"setTimeout(() => animateTerminal(embeddedCode, "ru\nst'\u2028<\/script>", 40, true), 500);"#
        );
    }

    #[test]
    fn fractional_speed_is_kept() {
        assert_eq!(format_speed(40.0), "40");
        assert_eq!(format_speed(12.5), "12.5");
    }
}
