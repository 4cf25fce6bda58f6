//! Page template module
//!
//! One function per page. Each takes the shared context and the data
//! the page displays, and returns a complete HTML document.

use super::{escape_html, layout, PageContext};
use crate::models::{Currency, User};

/// Home page: application summary.
pub fn home_page(ctx: &PageContext<'_>) -> String {
    let body = format!(
        r#"        <h2>Welcome</h2>
        <p>{app_name} tracks a small set of currency quotes for its users.</p>
        <ul>
            <li>Application: {app_name}</li>
            <li>Version: {app_version}</li>
            <li>Maintainer: {author} ({group})</li>
        </ul>"#,
        app_name = escape_html(ctx.app_name),
        app_version = escape_html(ctx.app_version),
        author = escape_html(ctx.author_name),
        group = escape_html(ctx.group),
    );
    layout(ctx, "Home", &body)
}

/// User list page.
pub fn users_page(ctx: &PageContext<'_>, users: &[User]) -> String {
    let rows: String = users
        .iter()
        .map(|user| {
            format!(
                "            <tr><td>{id}</td><td><a href=\"/user?id={id}\">{name}</a></td></tr>\n",
                id = user.id(),
                name = escape_html(user.name()),
            )
        })
        .collect();
    let body = format!(
        r#"        <h2>Users</h2>
        <table>
            <tr><th>Id</th><th>Name</th></tr>
{rows}        </table>"#
    );
    layout(ctx, "Users", &body)
}

/// Currency list page.
pub fn currencies_page(ctx: &PageContext<'_>, currencies: &[Currency]) -> String {
    let body = format!(
        r#"        <h2>Currencies</h2>
        <table>
            <tr><th>Code</th><th>Name</th><th>Num code</th><th>Nominal</th><th>Rate</th></tr>
{rows}        </table>"#,
        rows = currency_rows(currencies),
    );
    layout(ctx, "Currencies", &body)
}

/// User detail page: the user plus the currencies they subscribe to.
pub fn user_detail_page(
    ctx: &PageContext<'_>,
    user: &User,
    subscriptions: &[Currency],
) -> String {
    let subscription_block = if subscriptions.is_empty() {
        "        <p>No currency subscriptions.</p>".to_string()
    } else {
        format!(
            r#"        <table>
            <tr><th>Code</th><th>Name</th><th>Num code</th><th>Nominal</th><th>Rate</th></tr>
{rows}        </table>"#,
            rows = currency_rows(subscriptions),
        )
    };
    let body = format!(
        r#"        <h2>{name}</h2>
        <p>User id: {id}</p>
        <h3>Subscriptions</h3>
{subscription_block}"#,
        name = escape_html(user.name()),
        id = user.id(),
    );
    layout(ctx, user.name(), &body)
}

/// Author page: who built the application.
pub fn author_page(ctx: &PageContext<'_>) -> String {
    let body = format!(
        r#"        <h2>About the author</h2>
        <p>{author}, group {group}.</p>
        <p>Author of {app_name} version {app_version}.</p>"#,
        author = escape_html(ctx.author_name),
        group = escape_html(ctx.group),
        app_name = escape_html(ctx.app_name),
        app_version = escape_html(ctx.app_version),
    );
    layout(ctx, "About", &body)
}

/// Standalone page for unknown paths.
pub fn not_found_page() -> String {
    String::from(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>404</title></head>
<body><h1>404 Not Found</h1><p>The requested page does not exist.</p></body>
</html>"#,
    )
}

/// Minimal body for request-level errors (bad or missing parameters,
/// unknown user).
pub fn error_page(message: &str) -> String {
    format!("<h1>Error: {}</h1>", escape_html(message))
}

fn currency_rows(currencies: &[Currency]) -> String {
    currencies
        .iter()
        .map(|currency| {
            format!(
                "            <tr><td>{code}</td><td>{name}</td><td>{num}</td><td>{nominal}</td><td>{value}</td></tr>\n",
                code = escape_html(currency.char_code()),
                name = escape_html(currency.name()),
                num = currency.num_code(),
                nominal = currency.nominal(),
                value = currency.value(),
            )
        })
        .collect()
}
