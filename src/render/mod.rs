//! Page rendering module
//!
//! Builds the HTML for every page from a shared context bag plus
//! page-specific data. Rendering is plain string assembly; the context
//! carries the values every page needs (application metadata, author
//! credit, navigation).

pub mod pages;

use crate::models::App;

/// One navigation menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub caption: &'static str,
    pub href: &'static str,
}

/// Return the navigation menu entries, in display order.
pub fn build_navigation() -> Vec<NavItem> {
    vec![
        NavItem { caption: "Home", href: "/" },
        NavItem { caption: "Users", href: "/users" },
        NavItem { caption: "Currencies", href: "/currencies" },
        NavItem { caption: "About", href: "/author" },
    ]
}

/// Values shared by every page.
pub struct PageContext<'a> {
    pub app_name: &'a str,
    pub app_version: &'a str,
    pub author_name: &'a str,
    pub group: &'a str,
    pub navigation: Vec<NavItem>,
}

impl<'a> PageContext<'a> {
    /// Build the context from the validated application record.
    pub fn new(app: &'a App) -> Self {
        Self {
            app_name: app.name(),
            app_version: app.version(),
            author_name: app.author().name(),
            group: app.author().group(),
            navigation: build_navigation(),
        }
    }
}

/// Escape text content for embedding in HTML.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Wrap a page body with the shared document shell: header with
/// navigation, main content area, footer with the author credit.
fn layout(ctx: &PageContext<'_>, title: &str, body: &str) -> String {
    let nav_items: String = ctx
        .navigation
        .iter()
        .map(|item| format!("<li><a href=\"{}\">{}</a></li>", item.href, item.caption))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - {app_name}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f5f5f5;
            color: #333;
        }}
        nav ul {{
            list-style: none;
            padding: 0;
        }}
        nav li {{
            display: inline-block;
            margin-right: 15px;
        }}
        a {{
            color: #667eea;
            text-decoration: none;
        }}
        a:hover {{
            text-decoration: underline;
        }}
        table {{
            width: 100%;
            border-collapse: collapse;
            margin: 20px 0;
            background: white;
        }}
        th, td {{
            border: 1px solid #ddd;
            padding: 12px;
            text-align: left;
        }}
        th {{
            background: #667eea;
            color: white;
        }}
        footer {{
            margin-top: 30px;
            font-size: 0.9em;
            opacity: 0.7;
        }}
    </style>
</head>
<body>
    <header>
        <h1>{app_name}</h1>
        <nav><ul>{nav_items}</ul></nav>
    </header>
    <main>
{body}
    </main>
    <footer>
        <p>{app_name} v{app_version}, maintained by {author} ({group})</p>
    </footer>
</body>
</html>"#,
        title = escape_html(title),
        app_name = escape_html(ctx.app_name),
        app_version = escape_html(ctx.app_version),
        author = escape_html(ctx.author_name),
        group = escape_html(ctx.group),
        nav_items = nav_items,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{App, Author};

    fn test_app() -> App {
        let author = Author::new("Test Author", "P3123").unwrap();
        App::new("TestApp", "1.0.0", author).unwrap()
    }

    #[test]
    fn test_navigation_order() {
        let nav = build_navigation();
        assert_eq!(nav.len(), 4);
        let hrefs: Vec<&str> = nav.iter().map(|item| item.href).collect();
        assert_eq!(hrefs, ["/", "/users", "/currencies", "/author"]);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_layout_carries_context() {
        let app = test_app();
        let ctx = PageContext::new(&app);
        let html = layout(&ctx, "Title", "<p>body</p>");
        assert!(html.contains("TestApp"));
        assert!(html.contains("1.0.0"));
        assert!(html.contains("Test Author"));
        assert!(html.contains("P3123"));
        assert!(html.contains("<p>body</p>"));
        // All four navigation entries are rendered
        for item in build_navigation() {
            assert!(html.contains(item.href));
        }
    }
}
