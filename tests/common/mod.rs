//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use freightgate::carriers::CarrierRegistry;
use freightgate::config::{CanadaPostConfig, GatewayConfig};
use freightgate::gateway::CarrierGateway;
use freightgate::storage::PickupStore;
use freightgate::HttpServer;

/// Canned Canada Post pickup success document.
pub const PICKUP_SUCCESS_XML: &str = r#"<pickup-request-info xmlns="http://www.canadapost.ca/ws/pickuprequest">
    <pickup-request-header>
        <request-id>0074698052</request-id>
        <next-pickup-date>2015-01-28</next-pickup-date>
        <pickup-type>OnDemand</pickup-type>
    </pickup-request-header>
    <pickup-request-price>
        <hst-amount>2.50</hst-amount>
        <due-amount>10.00</due-amount>
    </pickup-request-price>
</pickup-request-info>"#;

/// Start a mock carrier endpoint that answers every request with a fixed
/// body. Reads the request headers (and drains what it can of the body)
/// before responding so clients never see a reset.
pub async fn start_mock_carrier(response: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 8192];
                        let mut read = 0;
                        // Read until the header terminator shows up.
                        while read < buf.len() {
                            match socket.read(&mut buf[read..]).await {
                                Ok(0) => break,
                                Ok(n) => {
                                    read += n;
                                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                                        break;
                                    }
                                }
                                Err(_) => return,
                            }
                        }

                        let response_str = format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            response.len(),
                            response
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Gateway config wired to a mock Canada Post endpoint.
pub fn test_config(carrier_addr: SocketAddr) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.carriers.canadapost = Some(CanadaPostConfig {
        username: "username".to_string(),
        password: "password".to_string(),
        customer_number: "2004381".to_string(),
        contract_id: None,
        test_mode: true,
        carrier_id: "canadapost".to_string(),
        endpoint_url: Some(format!("http://{}", carrier_addr)),
    });
    config.retries.enabled = false;
    config
}

/// Boot the gateway on an ephemeral port and return its base URL.
pub async fn start_gateway(config: GatewayConfig) -> String {
    let registry = Arc::new(CarrierRegistry::from_config(&config.carriers));
    let gateway = CarrierGateway::new(config.retries.clone()).unwrap();
    let store = PickupStore::new(None);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(&config, registry, gateway, store);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    // Give the server a beat to start accepting.
    tokio::time::sleep(Duration::from_millis(50)).await;

    format!("http://{}", addr)
}
