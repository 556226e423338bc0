//! 抽出APIクライアントの統合テスト
//!
//! ローカルの使い捨てHTTPサーバーに対して送信し、
//! multipartの内容・ステータス処理・レスポンス検証を確認する

use std::time::Duration;

use docparser::{DocParserError, ExtractionClient};
use docparser_common::{ApiConfig, CancelToken, DataPoint, Error};
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

const PDF_BYTES: &[u8] = b"%PDF-1.4\n%test document\n";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 1回だけ応答するサーバーを起動し、(ベースURL, 受信リクエスト) を返す
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().expect("アドレス取得失敗");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept失敗");
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.expect("送信失敗");
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{}", addr), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.expect("受信失敗");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn client_for(base_url: &str) -> ExtractionClient {
    ExtractionClient::new(ApiConfig::new(base_url).expect("設定失敗"))
}

fn extraction_error(err: DocParserError) -> Error {
    match err {
        DocParserError::Extraction(e) => e,
        other => panic!("Extractionエラーを期待: {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_success() {
    init_logger();
    let body = r##"{"markdown": "# H", "data_points": [{"field": "Name", "value": "Jo \"J\" Doe"}]}"##;
    let (base_url, server) = serve_once("200 OK", body).await;

    let result = client_for(&base_url)
        .upload_bytes("invoice.pdf", PDF_BYTES.to_vec(), "Extract the name", &CancelToken::new())
        .await
        .expect("アップロード失敗");

    assert_eq!(result.markdown, "# H");
    assert_eq!(result.data_points, vec![DataPoint::new("Name", "Jo \"J\" Doe")]);

    let request = server.await.expect("サーバー異常終了");
    assert!(request.starts_with("POST /api/upload/ HTTP/1.1"), "{}", request);
    assert!(request.contains("multipart/form-data"));
    assert!(request.contains("name=\"file\"; filename=\"invoice.pdf\""));
    assert!(request.contains("%PDF-1.4"));
    assert!(request.contains("name=\"description\""));
    assert!(request.contains("Extract the name"));
}

#[tokio::test]
async fn test_upload_file_from_disk() {
    init_logger();
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("resume.pdf");
    std::fs::write(&path, PDF_BYTES).unwrap();

    let (base_url, server) = serve_once("200 OK", r#"{"markdown": "", "data_points": []}"#).await;

    let result = client_for(&base_url)
        .upload_file(&path, "contact information", &CancelToken::new())
        .await
        .expect("アップロード失敗");
    assert!(result.data_points.is_empty());

    let request = server.await.expect("サーバー異常終了");
    assert!(request.contains("filename=\"resume.pdf\""));
}

#[tokio::test]
async fn test_upload_server_error_status() {
    init_logger();
    let (base_url, _server) =
        serve_once("500 Internal Server Error", r#"{"error": "Processing failed: OCR timeout"}"#).await;

    let err = client_for(&base_url)
        .upload_bytes("a.pdf", PDF_BYTES.to_vec(), "totals", &CancelToken::new())
        .await
        .unwrap_err();

    match extraction_error(err) {
        Error::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Processing failed: OCR timeout");
        }
        other => panic!("Statusを期待: {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_malformed_response() {
    init_logger();
    let (base_url, _server) = serve_once("200 OK", r##"{"markdown": "# H"}"##).await;

    let err = client_for(&base_url)
        .upload_bytes("a.pdf", PDF_BYTES.to_vec(), "totals", &CancelToken::new())
        .await
        .unwrap_err();

    let err = extraction_error(err);
    assert!(matches!(err, Error::MalformedResponse(_)), "{:?}", err);
    assert_eq!(err.alert_message(), Some(docparser_common::UPLOAD_FAILED_ALERT));
}

#[tokio::test]
async fn test_upload_connection_refused() {
    init_logger();
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().expect("アドレス取得失敗");
    drop(listener);

    let err = client_for(&format!("http://{}", addr))
        .upload_bytes("a.pdf", PDF_BYTES.to_vec(), "totals", &CancelToken::new())
        .await
        .unwrap_err();

    assert!(matches!(extraction_error(err), Error::Network(_)));
}

#[tokio::test]
async fn test_blank_description_sends_nothing() {
    init_logger();
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().expect("アドレス取得失敗");

    let err = client_for(&format!("http://{}", addr))
        .upload_bytes("a.pdf", PDF_BYTES.to_vec(), " \n\t", &CancelToken::new())
        .await
        .unwrap_err();
    assert!(matches!(extraction_error(err), Error::BlankDescription));

    // 接続は一度も来ない
    let accepted = tokio::time::timeout(Duration::from_millis(200), listener.accept()).await;
    assert!(accepted.is_err());
}

#[tokio::test]
async fn test_cancelled_token_sends_nothing() {
    init_logger();
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().expect("アドレス取得失敗");

    let cancel = CancelToken::new();
    cancel.cancel();

    let err = client_for(&format!("http://{}", addr))
        .upload_bytes("a.pdf", PDF_BYTES.to_vec(), "totals", &cancel)
        .await
        .unwrap_err();
    assert!(matches!(extraction_error(err), Error::Cancelled));

    let accepted = tokio::time::timeout(Duration::from_millis(200), listener.accept()).await;
    assert!(accepted.is_err());
}

#[tokio::test]
async fn test_missing_file() {
    init_logger();
    let client = client_for("http://127.0.0.1:9");
    let err = client
        .upload_file(
            std::path::Path::new("/nonexistent/path/12345.pdf"),
            "totals",
            &CancelToken::new(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DocParserError::FileNotFound(_)));
}
