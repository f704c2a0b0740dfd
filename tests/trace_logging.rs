mod common;

use axum::http::StatusCode;
use common::{app, send};
use serde_json::json;
use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn lines_containing<'a>(lines: &'a [String], needle: &str) -> Vec<&'a String> {
    lines.iter().filter(|line| line.contains(needle)).collect()
}

#[tokio::test]
async fn each_request_writes_exactly_one_log_line() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);
    let app = app();

    let (status, _) = send(&app, "GET", "/trace-example/123", None).await;
    assert_eq!(status, StatusCode::OK);

    let lines = logs.lines();
    assert_eq!(lines.len(), 1, "captured: {:#?}", lines);
    let traced = lines_containing(&lines, "123");
    assert_eq!(traced.len(), 1, "captured: {:#?}", lines);
    assert!(traced[0].contains("user_id=123"));
    assert!(traced[0].contains("Tracing request for user"));
    assert!(traced[0].contains("request completed"));
    assert!(traced[0].contains("/trace-example/:user_id"));
    assert!(traced[0].contains("status=200"));

    // handler fields, validation failures and unmatched routes all land on the single line
    send(&app, "PUT", "/items/77", Some(json!({"name": "X", "price": 1}))).await;
    send(&app, "POST", "/items/", Some(json!({"name": "X"}))).await;
    send(&app, "GET", "/nowhere", None).await;

    let lines = logs.lines();
    assert_eq!(lines.len(), 4, "captured: {:#?}", lines);

    let updated = lines_containing(&lines, "item_id=77");
    assert_eq!(updated.len(), 1, "captured: {:#?}", lines);
    assert!(updated[0].contains("Updating item -> X"));

    let rejected = lines_containing(&lines, "status=422");
    assert_eq!(rejected.len(), 1, "captured: {:#?}", lines);
    assert!(rejected[0].contains("Item rejected: 1 field error(s)"));

    let unmatched = lines_containing(&lines, "route=unmatched");
    assert_eq!(unmatched.len(), 1, "captured: {:#?}", lines);
    assert!(unmatched[0].contains("status=404"));
}
