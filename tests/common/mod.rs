//! Minimal HTTP/1.1 server for integration tests.
//!
//! Routes by path: `/image.webp` serves a WebP-looking body, `/echo-agent`
//! returns the request's User-Agent, `/broken` answers 500, anything else 404.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

pub const IMAGE_BODY: &[u8] = b"RIFF\x1a\x00\x00\x00WEBPVP8 flavor-image-bytes";

/// Starts the server in a background thread and returns its base URL
/// without a trailing slash (e.g. "http://127.0.0.1:12345").
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]).to_string();
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let (status, body): (&str, Vec<u8>) = match path.as_str() {
        "/image.webp" => ("200 OK", IMAGE_BODY.to_vec()),
        "/echo-agent" => ("200 OK", user_agent(&request).into_bytes()),
        "/broken" => ("500 Internal Server Error", b"boom".to_vec()),
        _ => ("404 Not Found", b"not found".to_vec()),
    };

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
    let _ = stream.flush();
}

fn user_agent(request: &str) -> String {
    request
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.trim()
                .eq_ignore_ascii_case("user-agent")
                .then(|| value.trim().to_string())
        })
        .unwrap_or_default()
}
