// Shared test helpers

use vnstat_backup::models::StatisticsDocument;

/// A vnStat-shaped export: two interfaces, several granularities, data for
/// 2024-05-19 / 2024-05-20 plus older months and years.
pub const SAMPLE_JSON: &str = r#"{
  "vnstatversion": "2.12",
  "jsonversion": "2",
  "interfaces": [
    {
      "name": "eth0",
      "alias": "WAN",
      "traffic": {
        "fiveminute": [
          {"id": 1, "date": {"year": 2024, "month": 5, "day": 20}, "time": {"hour": 0, "minute": 5}, "rx": 11, "tx": 12},
          {"id": 2, "date": {"year": 2024, "month": 5, "day": 19}, "time": {"hour": 23, "minute": 55}, "rx": 13, "tx": 14}
        ],
        "hour": [
          {"id": 3, "date": {"year": 2024, "month": 5, "day": 20}, "time": {"hour": 1}, "rx": 21, "tx": 22}
        ],
        "day": [
          {"id": 4, "date": {"year": 2024, "month": 5, "day": 19}, "rx": 31, "tx": 32},
          {"id": 5, "date": {"year": 2024, "month": 5, "day": 20}, "rx": 33, "tx": 34}
        ],
        "month": [
          {"id": 6, "date": {"year": 2024, "month": 4}, "rx": 41, "tx": 42},
          {"id": 7, "date": {"year": 2024, "month": 5}, "rx": 43, "tx": 44}
        ],
        "year": [
          {"id": 8, "date": {"year": 2023}, "rx": 51, "tx": 52},
          {"id": 9, "date": {"year": 2024}, "rx": 53, "tx": 54}
        ],
        "top": [
          {"id": 10, "date": {"year": 2024, "month": 5, "day": 20}, "rx": 61, "tx": 62},
          {"id": 11, "date": {"year": 2024, "month": 1, "day": 2}, "rx": 63, "tx": 64}
        ]
      }
    },
    {
      "name": "eth1",
      "traffic": {
        "year": [
          {"id": 12, "date": {"year": 2023}, "rx": 71, "tx": 72}
        ]
      }
    }
  ]
}"#;

#[allow(dead_code)]
pub fn sample_document() -> StatisticsDocument {
    serde_json::from_str(SAMPLE_JSON).expect("sample JSON parses")
}

/// Serve exactly one HTTP response on an ephemeral port; returns the URL.
#[allow(dead_code)]
pub async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        // drain the request head before answering
        let mut buf = [0u8; 4096];
        let _ = stream.read(&mut buf).await;
        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
    });
    format!("http://{}/json.cgi", addr)
}
