//! Drives `HttpBackend` against a single-shot HTTP fixture on loopback.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use medsearch::{HttpBackend, QueryBackend, QueryError, QueryRequest, QueryStatus, run_once};
use serde_json::{Value, json};

/// What the fixture saw on the wire.
struct CapturedRequest {
	request_line: String,
	headers: Vec<(String, String)>,
	body: Vec<u8>,
}

impl CapturedRequest {
	fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	fn json_body(&self) -> Value {
		serde_json::from_slice(&self.body).expect("request body is JSON")
	}
}

/// Accept one connection, record the request and answer with `status` and `body`.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<CapturedRequest>) {
	let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture");
	let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
	let handle = thread::spawn(move || {
		let (stream, _) = listener.accept().expect("accept");
		handle_connection(stream, status, body)
	});
	(base_url, handle)
}

fn handle_connection(stream: TcpStream, status: &str, body: &str) -> CapturedRequest {
	let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

	let mut request_line = String::new();
	reader.read_line(&mut request_line).expect("request line");

	let mut headers = Vec::new();
	loop {
		let mut line = String::new();
		reader.read_line(&mut line).expect("header line");
		let line = line.trim_end();
		if line.is_empty() {
			break;
		}
		if let Some((key, value)) = line.split_once(':') {
			headers.push((key.trim().to_string(), value.trim().to_string()));
		}
	}

	let length = headers
		.iter()
		.find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
		.and_then(|(_, value)| value.parse::<usize>().ok())
		.unwrap_or(0);
	let mut request_body = vec![0; length];
	reader.read_exact(&mut request_body).expect("request body");

	let mut stream = stream;
	write!(
		stream,
		"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
		body.len()
	)
	.expect("write response");
	stream.flush().expect("flush response");

	CapturedRequest {
		request_line: request_line.trim_end().to_string(),
		headers,
		body: request_body,
	}
}

const ANSWER: &str = r#"{"question":"q","answer":"Beta blockers reduce mortality.","num_sources":2,"sources":[{"rank":1,"file":"trial.pdf","relevance":"high"},{"rank":2,"file":"review.pdf","relevance":"moderate"}]}"#;

#[test]
fn posts_json_to_query_path() {
	let (base_url, server) = serve_once("200 OK", ANSWER);
	let backend = HttpBackend::new(&base_url).expect("client");

	let response = backend
		.query(&QueryRequest::new("Do beta blockers help?"))
		.expect("answer");
	let captured = server.join().expect("fixture thread");

	assert_eq!(captured.request_line, "POST /api/query HTTP/1.1");
	assert_eq!(captured.header("content-type"), Some("application/json"));
	assert_eq!(
		captured.json_body(),
		json!({ "question": "Do beta blockers help?", "top_k": 3 })
	);

	assert_eq!(response.answer, "Beta blockers reduce mortality.");
	assert_eq!(response.num_sources, 2);
	assert_eq!(response.sources[1].file, "review.pdf");
	assert_eq!(response.sources[1].relevance, "moderate");
}

#[test]
fn run_once_sends_question_untrimmed() {
	let (base_url, server) = serve_once("200 OK", ANSWER);
	let backend = HttpBackend::new(&base_url).expect("client");

	let state = run_once(&backend, "  statins?  ");
	let captured = server.join().expect("fixture thread");

	assert_eq!(captured.json_body()["question"], "  statins?  ");
	assert!(matches!(state.status(), QueryStatus::Success(_)));
}

#[test]
fn error_status_maps_to_generic_message() {
	let (base_url, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#);
	let backend = HttpBackend::new(&base_url).expect("client");

	let err = backend
		.query(&QueryRequest::new("anything"))
		.expect_err("server error");
	server.join().expect("fixture thread");

	assert_eq!(err, QueryError::Status(500));
	assert_eq!(err.to_string(), "Failed to get answer");
}

#[test]
fn malformed_body_is_a_decode_error() {
	let (base_url, server) = serve_once("200 OK", "not json");
	let backend = HttpBackend::new(&base_url).expect("client");

	let err = backend
		.query(&QueryRequest::new("anything"))
		.expect_err("decode failure");
	server.join().expect("fixture thread");

	assert!(matches!(err, QueryError::Decode(_)));
	assert!(!err.to_string().is_empty());
}

#[test]
fn refused_connection_is_a_transport_error() {
	let base_url = {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
		format!("http://{}", listener.local_addr().expect("local addr"))
	};
	let backend = HttpBackend::new(&base_url).expect("client");

	let err = backend
		.query(&QueryRequest::new("anything"))
		.expect_err("nothing listening");

	assert!(matches!(err, QueryError::Transport(_)));
	assert!(!err.to_string().is_empty());
}
