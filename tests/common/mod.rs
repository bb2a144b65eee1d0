//! Shared test fixtures for the job-salaries integration tests.
//!
//! Provides vacancy constructors that go through the real serde wire types,
//! `ScriptedSource`, an in-memory `VacancySource` serving canned pages, and
//! `StubServer`, a local HTTP endpoint for exercising the real clients.

#![allow(dead_code)]

use job_salaries::models::{HhVacancy, SjVacancy};
use job_salaries::{Page, Result, SalaryListing, VacancySource};
use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Build a HeadHunter vacancy with a salary object.
pub fn hh_vacancy(from: Option<f64>, to: Option<f64>, currency: &str) -> HhVacancy {
    serde_json::from_value(json!({
        "id": "100500",
        "name": "Программист",
        "salary": {"from": from, "to": to, "currency": currency, "gross": false},
        "alternate_url": "https://hh.ru/vacancy/100500"
    }))
    .unwrap()
}

/// Build a HeadHunter vacancy whose `salary` is `null`.
pub fn hh_vacancy_without_salary() -> HhVacancy {
    serde_json::from_value(json!({"id": "100501", "name": "Программист", "salary": null})).unwrap()
}

/// Build a SuperJob vacancy; `0` stands for "not given" as on the wire.
pub fn sj_vacancy(payment_from: f64, payment_to: f64, currency: &str) -> SjVacancy {
    serde_json::from_value(json!({
        "id": 33000001,
        "profession": "Python developer",
        "payment_from": payment_from,
        "payment_to": payment_to,
        "currency": currency,
        "link": "https://www.superjob.ru/vakansii/python-developer-33000001.html"
    }))
    .unwrap()
}

pub fn page<V>(vacancies: Vec<V>, found: u64, has_more: bool) -> Page<V> {
    Page {
        vacancies,
        found,
        has_more,
    }
}

/// In-memory source serving scripted pages per keyword.
///
/// Unknown keywords get a single empty final page. Requests past the end of a
/// script, and the page set with `fail_at`, fail with a JSON decode error as if
/// the API had answered with an HTML error body.
pub struct ScriptedSource<V> {
    name: String,
    pages: HashMap<String, Vec<Page<V>>>,
    fail_at: Option<(String, u32)>,
    requests: RefCell<Vec<(String, u32)>>,
}

impl<V: Clone + SalaryListing> ScriptedSource<V> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            pages: HashMap::new(),
            fail_at: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_pages(mut self, keyword: &str, pages: Vec<Page<V>>) -> Self {
        self.pages.insert(keyword.to_string(), pages);
        self
    }

    pub fn fail_at(mut self, keyword: &str, page: u32) -> Self {
        self.fail_at = Some((keyword.to_string(), page));
        self
    }

    /// Every `(keyword, page)` requested so far, in order.
    pub fn requests(&self) -> Vec<(String, u32)> {
        self.requests.borrow().clone()
    }
}

fn bad_gateway() -> job_salaries::SalaryError {
    serde_json::from_str::<serde_json::Value>("<html>502 Bad Gateway</html>")
        .unwrap_err()
        .into()
}

impl<V: Clone + SalaryListing> VacancySource for ScriptedSource<V> {
    type Vacancy = V;

    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_page(&self, keyword: &str, page: u32) -> Result<Page<V>> {
        self.requests
            .borrow_mut()
            .push((keyword.to_string(), page));

        if self
            .fail_at
            .as_ref()
            .is_some_and(|(k, p)| k == keyword && *p == page)
        {
            return Err(bad_gateway());
        }

        match self.pages.get(keyword) {
            Some(pages) => pages.get(page as usize).cloned().ok_or_else(bad_gateway),
            None => Ok(Page {
                vacancies: Vec::new(),
                found: 0,
                has_more: false,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// StubServer — local HTTP endpoint serving canned responses
// ---------------------------------------------------------------------------

/// Serves one scripted `(status, body)` response per connection, in order,
/// then stops listening. Raw request heads are recorded.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl StubServer {
    pub fn start(path: &str, responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}{}", listener.local_addr().unwrap(), path);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        let handle = thread::spawn(move || {
            for (status, body) in responses {
                let (stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let mut reader = BufReader::new(stream);
                let mut head = String::new();
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                        break;
                    }
                    head.push_str(&line);
                }
                seen.lock().unwrap().push(head);

                let reason = if status == 200 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let mut stream = reader.into_inner();
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self {
            base_url,
            requests,
            handle: Some(handle),
        }
    }

    /// Request heads received so far, lowercased for header matching.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.to_lowercase())
            .collect()
    }

    /// Wait for every scripted response to be served.
    pub fn finish(mut self) -> Vec<String> {
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
        self.requests()
    }
}

/// HTTP client that never goes through a proxy, for talking to `StubServer`.
pub fn direct_http_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap()
}
