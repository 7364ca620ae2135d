// One-time bootstrap of the JSON reference service for integration tests.
use std::{
    // `Arc` lets the server thread and the waiting test share the URL slot.
    sync::{Arc, OnceLock},
    // Poll intervals for the readiness loops below.
    time::Duration,
};

// Base URL of the running service, set once the listener is bound.
static SERVICE_URL: OnceLock<String> = OnceLock::new();
// Guard so only the first caller in a test binary starts the service.
static SERVICE_STARTED: OnceLock<()> = OnceLock::new();

// Start the service if needed and return its base URL.
pub fn ensure_server() -> &'static str {
    SERVICE_STARTED.get_or_init(|| {
        // Slot the service thread fills with the address it actually bound.
        let bound_url = Arc::new(OnceLock::<String>::new());
        let bound_url_writer = Arc::clone(&bound_url);
        // A dedicated OS thread keeps the service alive across the separate
        // runtimes that each `#[tokio::test]` creates and drops.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("service runtime");
            runtime.block_on(async move {
                // Port 0 asks the OS for a free port.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral port");
                let addr = listener.local_addr().expect("read bound address");
                // Publish before serving so the waiting side can start probing.
                let _ = bound_url_writer.set(format!("http://{addr}"));
                // Serves until the test process exits.
                restful::run(listener).await.expect("service failed");
            });
        });
        wait_until_accepting(bound_url);
    });

    // Every test in this binary shares the same service.
    SERVICE_URL
        .get()
        .expect("service url should be set")
        .as_str()
}

// Block until the URL is published and the socket accepts connections.
fn wait_until_accepting(bound_url: Arc<OnceLock<String>>) {
    // The service thread may not have bound yet.
    let base_url = loop {
        if let Some(url) = bound_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVICE_URL.set(base_url.clone());

    // Raw TCP probes need host:port without the scheme.
    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // About two seconds of connect attempts before giving up.
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("service did not start accepting connections in time");
}
