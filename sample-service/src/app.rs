//! Request routing and the HTTP server loop.

use std::net::SocketAddr;

use http::{Method, Request, Response};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::customers;
use crate::customers::Body;

/// Routes a request to its handler. The request body is never read.
pub fn route<B>(req: &Request<B>) -> Response<Body> {
    let path = req.uri().path();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (req.method(), segments.as_slice()) {
        (&Method::GET, ["customers", id]) => match id.parse() {
            Ok(id) => customers::get_customer(id),
            Err(_) => customers::not_found(),
        },
        (&Method::GET, ["customers", id, "greeting"]) => match id.parse() {
            Ok(id) => customers::get_greeting(id),
            Err(_) => customers::not_found(),
        },
        (&Method::POST, ["customers"]) => customers::create_customer(),
        _ => customers::not_found(),
    }
}

/// Serves connections from `listener` until `shutdown` fires.
pub async fn run(listener: TcpListener, mut shutdown: oneshot::Receiver<()>) {
    loop {
        tokio::select! {
            result = listener.accept() => {
                match result {
                    Ok((stream, peer)) => {
                        tracing::debug!(%peer, "accepted connection");
                        let io = TokioIo::new(stream);

                        tokio::spawn(async move {
                            let service = service_fn(|req: Request<Incoming>| async move {
                                let response = route(&req);
                                tracing::info!(
                                    method = %req.method(),
                                    path = req.uri().path(),
                                    status = %response.status(),
                                    "handled request"
                                );
                                Ok::<_, std::convert::Infallible>(response)
                            });

                            if let Err(error) = http1::Builder::new().serve_connection(io, service).await {
                                tracing::debug!(%error, "connection closed with error");
                            }
                        });
                    }
                    Err(error) => {
                        tracing::warn!(%error, "accept failed");
                        break;
                    }
                }
            }
            _ = &mut shutdown => break,
        }
    }
}

/// Handle to a service spawned on an ephemeral port. Dropping it shuts the
/// server down.
pub struct SpawnedService {
    addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl SpawnedService {
    /// The address the service is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

/// Spawns the service on a random local port, for tests.
pub async fn spawn() -> std::io::Result<SpawnedService> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    tokio::spawn(run(listener, shutdown_rx));

    Ok(SpawnedService {
        addr,
        _shutdown: shutdown_tx,
    })
}
