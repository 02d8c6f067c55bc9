//! Remote CSV loading.

use crate::constituency::{parse_constituency_csv, ConstituencyRecord};
use crate::error::{GedError, Result};
use log::info;
use reqwest::Client;

/// Aggregate constituency statistics published alongside the dashboard.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/muhammad5251/DataVisualization/data/aggregate_data_2023-01-08.csv";

/// Download the CSV at `url` and return its body.
///
/// No retry and no timeout beyond the client's own; a failure here is
/// meant to stop startup.
pub async fn fetch_csv(client: &Client, url: &str) -> Result<String> {
    info!("Fetching constituency data from {}", url);
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(GedError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}

/// Download and parse the constituency table at `url`.
pub async fn fetch_constituencies(client: &Client, url: &str) -> Result<Vec<ConstituencyRecord>> {
    let body = fetch_csv(client, url).await?;
    let records = parse_constituency_csv(&body)?;
    info!("Loaded {} constituencies", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a local port and return its URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "{}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{}/aggregate.csv", addr)
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    #[cfg(not(target_family = "wasm"))]
    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let url = serve_once("HTTP/1.1 404 Not Found", "missing");
        let err = fetch_csv(&local_client(), &url).await.unwrap_err();
        match err {
            GedError::HttpStatus { url: failed, status } => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[cfg(not(target_family = "wasm"))]
    #[tokio::test]
    async fn body_without_required_column_is_rejected() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            "PARLIAMENTARY NAME,TOTAL ELECTORS,MALAY (%)\nBANGI,303430,48.43\n",
        );
        let err = fetch_constituencies(&local_client(), &url).await.unwrap_err();
        assert!(matches!(err, GedError::MissingColumn(ref c) if c == "CHINESE (%)"));
    }

    #[cfg(not(target_family = "wasm"))]
    #[tokio::test]
    async fn success_returns_parsed_records() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            "STATE,PARLIAMENTARY NAME,TOTAL ELECTORS,MALAY (%),CHINESE (%)\nSELANGOR,KLANG,208913,26.65,52.77\n",
        );
        let records = fetch_constituencies(&local_client(), &url).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "KLANG");
        assert_eq!(records[0].total_electors, 208913);
    }
}
