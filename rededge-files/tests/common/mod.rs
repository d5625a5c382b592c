//! A minimal HTTP server standing in for the camera.

#![allow(dead_code)] // not every test binary uses every helper

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
struct Route {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

#[derive(Debug, Default)]
struct State {
    routes: HashMap<String, Route>,
    requests: Vec<String>,
}

/// Serves fixed responses per path on `127.0.0.1`, answers 404 for everything else.
#[derive(Debug, Clone)]
pub struct FakeCamera {
    host: String,
    state: Arc<Mutex<State>>,
}

impl FakeCamera {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake camera");
        let host = listener.local_addr().expect("local addr").to_string();
        let state = Arc::new(Mutex::new(State::default()));

        let server_state = Arc::clone(&state);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let state = Arc::clone(&server_state);
                thread::spawn(move || handle_connection(stream, &state));
            }
        });

        Self { host, state }
    }

    /// `ip:port` of the server, usable as camera host.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn json(&self, path: &str, body: &str) -> &Self {
        self.route(path, 200, "application/json", body.as_bytes().to_vec())
    }

    pub fn file(&self, path: &str, body: &[u8]) -> &Self {
        self.route(path, 200, "application/octet-stream", body.to_vec())
    }

    pub fn status(&self, path: &str, status: u16) -> &Self {
        self.route(path, status, "text/plain", b"error".to_vec())
    }

    fn route(&self, path: &str, status: u16, content_type: &'static str, body: Vec<u8>) -> &Self {
        self.state.lock().unwrap().routes.insert(
            path.to_string(),
            Route {
                status,
                content_type,
                body,
            },
        );
        self
    }

    /// Paths requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }
}

fn handle_connection(mut stream: TcpStream, state: &Mutex<State>) {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // drain the headers, requests from the client never carry a body
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) if line == "\r\n" || line == "\n" => break,
            Ok(_) => continue,
            Err(_) => return,
        }
    }

    let path = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();

    let route = {
        let mut state = state.lock().unwrap();
        state.requests.push(path.clone());
        state.routes.get(&path).cloned()
    };
    let route = route.unwrap_or(Route {
        status: 404,
        content_type: "text/plain",
        body: b"not found".to_vec(),
    });

    let header = format!(
        "HTTP/1.1 {} Fake\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        route.status,
        route.content_type,
        route.body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(&route.body);
    let _ = stream.flush();
}

/// Byte content which differs per file name, so swapped files are noticed.
pub fn content_for(name: &str) -> Vec<u8> {
    let seed = name.bytes().fold(0u8, |acc, b| acc.wrapping_add(b));
    (0..4096).map(|i| seed.wrapping_add((i % 251) as u8)).collect()
}
