//! Minimal HTTP stub standing in for the report backend

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub struct StubServer {
    pub base_url: String,
    handle: JoinHandle<Vec<String>>,
}

impl StubServer {
    /// Answer one connection per canned `(status, body)`, in order
    pub fn serve(responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let mut request_lines = Vec::new();
            for (status, body) in responses {
                let (stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                request_lines.push(request_line.trim_end().to_string());

                loop {
                    let mut header = String::new();
                    let read = reader.read_line(&mut header).unwrap();
                    if read == 0 || header == "\r\n" {
                        break;
                    }
                }

                let reason = if status < 400 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let mut stream = stream;
                stream.write_all(response.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
            request_lines
        });

        Self { base_url, handle }
    }

    /// Request lines received, e.g. "GET /api/reports/1/2024-03 HTTP/1.1"
    pub fn finish(self) -> Vec<String> {
        self.handle.join().unwrap()
    }
}

pub const MARCH_BODY: &str = r#"{"month":"2024-03","total_income":5000,"total_expenses":3000,"total_savings":1000,"balance":1000}"#;
pub const APRIL_BODY: &str = r#"{"month":"2024-04","total_income":4200,"total_expenses":3900,"total_savings":0,"balance":300}"#;
pub const YEAR_BODY: &str = r#"{"year":2023,"total_income":60000,"total_expenses":50000,"total_savings":5000,"balance":5000}"#;
