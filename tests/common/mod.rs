#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use neo_risk_analyzer::catalog::{
    CatalogFetcher, CatalogReply, CatalogTransport, RetryPolicy, Sleeper, TransportFailure,
};

/// Transport replaying a fixed script of replies, one per request.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<CatalogReply, TransportFailure>>>,
    calls: Cell<u32>,
    designations: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Result<CatalogReply, TransportFailure>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }

    pub fn designations(&self) -> Vec<String> {
        self.designations.borrow().clone()
    }
}

impl CatalogTransport for ScriptedTransport {
    fn get(&self, designation: &str) -> Result<CatalogReply, TransportFailure> {
        self.calls.set(self.calls.get() + 1);
        self.designations.borrow_mut().push(designation.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportFailure("script exhausted".into())))
    }
}

/// Sleeper that records requested delays instead of blocking.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    slept: RefCell<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.borrow().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.slept.borrow_mut().push(duration);
    }
}

pub fn reply(status: u16, body: &str) -> Result<CatalogReply, TransportFailure> {
    Ok(CatalogReply {
        status,
        reason: reason(status).to_string(),
        body: body.to_string(),
    })
}

pub fn network_failure(message: &str) -> Result<CatalogReply, TransportFailure> {
    Err(TransportFailure(message.to_string()))
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "",
    }
}

pub fn scripted_fetcher(
    replies: Vec<Result<CatalogReply, TransportFailure>>,
) -> CatalogFetcher<ScriptedTransport, RecordingSleeper> {
    CatalogFetcher::new(
        ScriptedTransport::new(replies),
        RecordingSleeper::default(),
        RetryPolicy::default(),
    )
}

/// Catalog body in the shape the impact-monitoring service returns (numbers as strings).
pub fn sentry_body(
    fullname: &str,
    ip: &str,
    energy: &str,
    diameter: &str,
    v_inf: &str,
    approaches: &[(&str, &str)],
) -> String {
    let data: Vec<String> = approaches
        .iter()
        .map(|(date, ip)| format!(r#"{{"date":"{date}","ip":"{ip}","energy":"{energy}","ps":"-3.0","ts":"0"}}"#))
        .collect();
    format!(
        r#"{{"signature":{{"source":"NASA/JPL Sentry Data API","version":"2.0"}},"summary":{{"fullname":"{fullname}","ip":"{ip}","energy":"{energy}","diameter":"{diameter}","v_inf":"{v_inf}","n_imp":{n}}},"data":[{data}]}}"#,
        n = approaches.len(),
        data = data.join(",")
    )
}
