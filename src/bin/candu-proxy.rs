//! Local relay for the classifier endpoint.
//!
//! Exposes `POST /predict` on a fixed local address, forwards the request
//! body to the remote endpoint configured in `config.toml`, and relays the
//! upstream status and body verbatim. Local forwarding failures become a
//! `500` with an `{ "error": ... }` body.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use candu::{config, http_client, logging};

const LISTEN_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8787);
const MAX_RELAY_RESPONSE_BYTES: usize = 256 * 1024;

type HttpBody = Full<Bytes>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = config::load_or_default()?;
    let endpoint = Arc::new(config.predictor.endpoint_url);

    let addr: SocketAddr = LISTEN_ADDR.into();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Relay listening on http://{addr}, forwarding to {endpoint}");

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let endpoint = endpoint.clone();
        tokio::task::spawn(async move {
            let service = service_fn(move |req| handle_request(endpoint.clone(), req));
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::warn!("Connection error: {err}");
            }
        });
    }
}

async fn handle_request(
    endpoint: Arc<String>,
    req: Request<Incoming>,
) -> Result<Response<HttpBody>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    if method == Method::POST && path == "/predict" {
        let body = match req.into_body().collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(err) => {
                return Ok(error_response(
                    StatusCode::BAD_REQUEST,
                    &format!("failed to read request body: {err}"),
                ));
            }
        };
        let forwarded =
            tokio::task::spawn_blocking(move || forward(&endpoint, &body)).await;
        match forwarded {
            Ok(Ok(upstream)) => Ok(relay_response(upstream)),
            Ok(Err(err)) => Ok(error_response(StatusCode::INTERNAL_SERVER_ERROR, &err)),
            Err(err) => Ok(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("relay task failed: {err}"),
            )),
        }
    } else if method == Method::GET && path == "/health" {
        Ok(json_response(
            StatusCode::OK,
            Bytes::from_static(b"{\"status\":\"ok\"}"),
        ))
    } else {
        Ok(error_response(StatusCode::NOT_FOUND, "not found"))
    }
}

struct UpstreamReply {
    status: u16,
    content_type: String,
    body: Vec<u8>,
}

/// Forward the request body to the remote endpoint on the shared agent.
/// Upstream error statuses are relayed, not treated as failures.
fn forward(endpoint: &str, body: &[u8]) -> Result<UpstreamReply, String> {
    let request = http_client::agent()
        .post(endpoint)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");
    let response = match request.send_bytes(body) {
        Ok(response) => response,
        Err(ureq::Error::Status(_code, response)) => response,
        Err(ureq::Error::Transport(err)) => return Err(err.to_string()),
    };
    let status = response.status();
    let content_type = response.content_type().to_string();
    let body = http_client::read_response_bytes(response, MAX_RELAY_RESPONSE_BYTES)
        .map_err(|err| err.to_string())?;
    Ok(UpstreamReply {
        status,
        content_type,
        body,
    })
}

fn relay_response(reply: UpstreamReply) -> Response<HttpBody> {
    let mut response = Response::new(Full::from(Bytes::from(reply.body)));
    *response.status_mut() =
        StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    if let Ok(value) = hyper::header::HeaderValue::from_str(&reply.content_type) {
        response
            .headers_mut()
            .insert(hyper::header::CONTENT_TYPE, value);
    }
    response
}

fn error_response(status: StatusCode, message: &str) -> Response<HttpBody> {
    let body = serde_json::json!({ "error": message }).to_string();
    json_response(status, Bytes::from(body))
}

fn json_response(status: StatusCode, body: Bytes) -> Response<HttpBody> {
    let mut response = Response::new(Full::from(body));
    *response.status_mut() = status;
    response.headers_mut().insert(
        hyper::header::CONTENT_TYPE,
        hyper::header::HeaderValue::from_static("application/json"),
    );
    response
}
