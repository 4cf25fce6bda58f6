//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, path
//! dispatch to the page handlers, and access logging.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode, Version};

use crate::config::AppState;
use crate::data;
use crate::handler::query::{self, IdParam};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::render::{pages, PageContext};

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    // 1. Log headers if enabled
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // 2. Produce the response (method check, body-size check, dispatch)
    let response = respond(&req, &state);

    // 3. Access log with the final status and size
    let access_log = state.cached_access_log.load(Ordering::Relaxed);
    if access_log {
        let entry = access_entry(&req, peer_addr, &response, &started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Run the request through the checks and the page dispatch.
fn respond(req: &Request<hyper::body::Incoming>, state: &AppState) -> Response<Full<Bytes>> {
    let method = req.method();
    let is_head = *method == Method::HEAD;

    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return resp;
    }

    if let Some(resp) = check_body_size(req, state.config.http.max_body_size) {
        return resp;
    }

    dispatch(req.uri().path(), req.uri().query(), is_head, state)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Dispatch a request to its page handler based on the URI path.
pub fn dispatch(
    path: &str,
    query: Option<&str>,
    is_head: bool,
    state: &AppState,
) -> Response<Full<Bytes>> {
    match path {
        "/" => serve_home(state, is_head),
        "/users" => serve_users(state, is_head),
        "/currencies" => serve_currencies(state, is_head),
        "/author" => serve_author(state, is_head),
        "/user" => serve_user_detail(state, query, is_head),
        _ => http::build_page_response(StatusCode::NOT_FOUND, pages::not_found_page(), is_head),
    }
}

fn serve_home(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let ctx = PageContext::new(&state.app);
    http::build_html_response(pages::home_page(&ctx), is_head)
}

fn serve_users(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let ctx = PageContext::new(&state.app);
    http::build_html_response(pages::users_page(&ctx, &state.users), is_head)
}

fn serve_currencies(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let currencies = data::get_currencies();
    let ctx = PageContext::new(&state.app);
    http::build_html_response(pages::currencies_page(&ctx, &currencies), is_head)
}

fn serve_author(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let ctx = PageContext::new(&state.app);
    http::build_html_response(pages::author_page(&ctx), is_head)
}

/// Serve the user detail page: `/user?id=<n>`.
///
/// A missing or non-integer id is a 400; an id with no matching user is
/// a 404.
fn serve_user_detail(
    state: &AppState,
    raw_query: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let user_id = match query::parse_user_id(raw_query) {
        IdParam::Missing => {
            return http::build_page_response(
                StatusCode::BAD_REQUEST,
                pages::error_page("id parameter is missing"),
                is_head,
            )
        }
        IdParam::Malformed => {
            return http::build_page_response(
                StatusCode::BAD_REQUEST,
                pages::error_page("id must be an integer"),
                is_head,
            )
        }
        IdParam::Id(id) => id,
    };

    let Some(user) = data::find_user_by_id(&state.users, user_id) else {
        return http::build_page_response(
            StatusCode::NOT_FOUND,
            pages::error_page("user not found"),
            is_head,
        );
    };

    let subscriptions =
        data::subscribed_currencies(&state.subscriptions, user.id(), data::get_currencies());
    let ctx = PageContext::new(&state.app);
    http::build_html_response(pages::user_detail_page(&ctx, user, &subscriptions), is_head)
}

/// Build the access log entry for a finished request.
fn access_entry(
    req: &Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    response: &Response<Full<Bytes>>,
    started: &Instant,
) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.protocol = version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = content_length_of(response);
    entry.referer = header_text(req, "referer");
    entry.user_agent = header_text(req, "user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

fn header_text(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Advertised body size of a response, from its Content-Length header.
fn content_length_of(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
