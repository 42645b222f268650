use crate::clock::Clock;
use crate::proxy::server::ProxyServerConfig;
use http_body_util::Full;
use hourglass_core::AdminCommand;
use hyper::body::Bytes;
use hyper::header::{self, HeaderValue};
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use tracing::{debug, info, warn};

/// Dispatch a request to the admin endpoint or the forwarding path
///
/// Admin requests are recognized by path so they work whether the client
/// sends origin-form or absolute-form URIs.
pub async fn route<B>(
    req: Request<B>,
    config: ProxyServerConfig,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path();

    let response = if path == "/admin" || path.starts_with("/admin/") {
        handle_admin(&req, &config)
    } else {
        handle_proxy(&req, &config).await
    };

    Ok(response)
}

/// Apply an admin command against the shared block list
fn handle_admin<B>(req: &Request<B>, config: &ProxyServerConfig) -> Response<Full<Bytes>> {
    let path = req.uri().path();
    debug!("Admin request: {}", path);

    match AdminCommand::parse(path) {
        Ok(command) => {
            let message = command.apply(config.engine.list());
            info!("{}", message);
            text_response(StatusCode::OK, format!("{message}\n"))
        }
        Err(e) => {
            warn!("Admin request rejected: {}", e);
            text_response(StatusCode::BAD_REQUEST, format!("{e}\n"))
        }
    }
}

/// Forward a request unless the admission engine refuses it
async fn handle_proxy<B>(req: &Request<B>, config: &ProxyServerConfig) -> Response<Full<Bytes>> {
    if req.method() == Method::CONNECT {
        debug!("Refusing CONNECT for {:?}", req.uri());
        return text_response(StatusCode::NOT_IMPLEMENTED, "CONNECT is not supported\n");
    }

    let Some(host) = request_host(req) else {
        return text_response(StatusCode::BAD_REQUEST, "No target host in request\n");
    };

    let now = config.clock.now();
    if !config.engine.should_forward(&host, &now) {
        info!("Blocked {} inside window {}", host, config.engine.window());
        return text_response(StatusCode::FORBIDDEN, "Forbidden");
    }

    let target = target_url(req, &host);
    debug!("Forwarding to {}", target);

    match fetch(&config.client, &target).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Forwarding to {} failed: {}", target, e);
            text_response(StatusCode::BAD_GATEWAY, "Upstream request failed\n")
        }
    }
}

/// Fetch the target and relay status, content type, and body
async fn fetch(client: &reqwest::Client, target: &str) -> reqwest::Result<Response<Full<Bytes>>> {
    let upstream = client.get(target).send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let body = upstream.bytes().await?;

    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;
    if let Some(value) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    Ok(response)
}

/// The host the request targets: the URI authority for absolute-form
/// requests, else the Host header
fn request_host<B>(req: &Request<B>) -> Option<String> {
    if let Some(host) = req.uri().host() {
        return Some(match req.uri().port_u16() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        });
    }

    req.headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Absolute URL to fetch on the client's behalf
fn target_url<B>(req: &Request<B>, host: &str) -> String {
    let uri = req.uri();
    if uri.scheme().is_some() && uri.authority().is_some() {
        return uri.to_string();
    }

    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    format!("http://{host}{path_and_query}")
}

fn text_response(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(body.into()));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}
