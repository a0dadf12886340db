//! HTTP server
//!
//! Socket handling and routing around the JSON API. Synchronous by
//! construction: every accepted request is handled to completion on its
//! own worker thread, and the only state shared between workers is the
//! switch service.

use std::io::Read;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::thread;

use thiserror::Error;
use tiny_http::{Header, Method, Request, Response, Server};

use crate::api::{self, ApiResponse};
use crate::config::MAX_REQUEST_BODY_BYTES;
use crate::hal::gpio::OutputLine;
use crate::switch::SwitchService;

/// Failure to bring up the HTTP listener
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen socket could not be bound
    #[error("cannot bind http listener on {addr}")]
    Bind {
        /// The address that failed to bind
        addr: SocketAddr,
        /// Underlying socket error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Bind the listener and serve requests until the process exits
///
/// Each accepted request runs on its own spawned thread; the handlers
/// block only for the duration of the switch's critical sections.
pub fn run<L>(
    port: u16,
    service: Arc<SwitchService<L>>,
    page: Arc<String>,
) -> Result<(), ServerError>
where
    L: OutputLine + Send + 'static,
{
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let server = Server::http(addr).map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!(%addr, "server listening");

    for request in server.incoming_requests() {
        let service = Arc::clone(&service);
        let page = Arc::clone(&page);
        thread::spawn(move || handle(request, &service, &page));
    }

    Ok(())
}

fn handle<L: OutputLine>(mut request: Request, service: &SwitchService<L>, page: &str) {
    let reply = route(&mut request, service, page);
    respond(request, reply);
}

fn route<L: OutputLine>(
    request: &mut Request,
    service: &SwitchService<L>,
    page: &str,
) -> ApiResponse {
    // Queries are not part of the surface; match on the bare path.
    let path = request
        .url()
        .split('?')
        .next()
        .unwrap_or_default()
        .to_owned();
    let method = request.method().clone();

    match (method, path.as_str()) {
        (_, "/") => api::index(page),
        (_, "/api/state") => api::state(service),
        (Method::Post, "/api/toggle") => match read_body(request) {
            Some(body) => api::toggle(service, &body),
            None => api::invalid_request(),
        },
        (_, "/api/toggle") => api::method_not_allowed(),
        _ => api::not_found(),
    }
}

fn read_body(request: &mut Request) -> Option<String> {
    let mut body = String::new();
    let mut reader = request.as_reader().take(MAX_REQUEST_BODY_BYTES);
    match reader.read_to_string(&mut body) {
        Ok(_) => Some(body),
        Err(err) => {
            tracing::debug!(%err, "failed reading request body");
            None
        }
    }
}

fn respond(request: Request, reply: ApiResponse) {
    let mut response = Response::from_string(reply.body).with_status_code(reply.status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes()) {
        response = response.with_header(header);
    }
    if let Err(err) = request.respond(response) {
        tracing::debug!(%err, "client went away before the response");
    }
}
