#![cfg(test)]
use std::io::{self, Write};
use std::net::{Ipv4Addr, TcpListener};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use netprobe_common::config::Config;
use netprobe_common::network::interface::InterfaceRecord;
use netprobe_common::network::reachability::Reachability;
use netprobe_common::system::ReachabilityProber;
use netprobe_core::diagnostics;
use netprobe_core::report::ReportStyle;
use pnet::util::MacAddr;

use crate::utils::{self, FakeHost};

/// One non-loopback interface on a reachable network.
#[tokio::test]
async fn single_interface_with_internet() {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    let host = FakeHost::default()
        .entry(utils::lo())
        .entry(utils::v4("eth0", 192, 168, 1, 10))
        .entry(utils::v6("eth0"))
        .mac("lo", MacAddr::zero())
        .mac("eth0", MacAddr::new(0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff));
    let prober: Arc<dyn ReachabilityProber> = Arc::new(utils::reachable_prober(&listener));

    let mut out: Vec<u8> = Vec::new();
    let report = diagnostics::run(&host, &host, prober, &Config::default(), &mut out, ReportStyle::plain())
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Network Interfaces:\n\
         Interface: eth0\n  IPv4:    192.168.1.10\n  MAC:     aa:bb:cc:dd:ee:ff\n  --------\n\
         \n\
         Internet Access: Available\n"
    );
    assert_eq!(
        report.interfaces,
        vec![InterfaceRecord::new(
            "eth0",
            Ipv4Addr::new(192, 168, 1, 10),
            MacAddr::new(0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff)
        )]
    );
    assert_eq!(report.internet, Reachability::Available);
}

/// Only loopback present and nothing reachable.
#[tokio::test]
async fn no_interfaces_without_internet() {
    let host = FakeHost::default().entry(utils::lo()).mac("lo", MacAddr::zero());
    let prober: Arc<dyn ReachabilityProber> = Arc::new(utils::unreachable_prober());

    let mut out: Vec<u8> = Vec::new();
    let report = diagnostics::run(&host, &host, prober, &Config::default(), &mut out, ReportStyle::plain())
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Network Interfaces:\n\nInternet Access: Unavailable\n"
    );
    assert!(report.interfaces.is_empty());
    assert_eq!(report.internet, Reachability::Unavailable);
}

#[tokio::test]
async fn interfaces_without_mac_or_ipv4_are_left_out() {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    let host = FakeHost::default()
        .entry(utils::v4("tun0", 10, 96, 0, 57))
        .entry(utils::v6("ipv6leakintrf0"))
        .entry(utils::v4("wlan0", 192, 168, 1, 42))
        .mac("ipv6leakintrf0", MacAddr::new(0xd2, 0x25, 0xd4, 0x9f, 0x18, 0xfd))
        .mac("wlan0", MacAddr::new(0x34, 0xcf, 0xf6, 0x9a, 0x11, 0x22));
    let prober: Arc<dyn ReachabilityProber> = Arc::new(utils::reachable_prober(&listener));

    let mut out: Vec<u8> = Vec::new();
    let report = diagnostics::run(&host, &host, prober, &Config::default(), &mut out, ReportStyle::plain())
        .await
        .unwrap();

    let names: Vec<&str> = report.interfaces.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["wlan0"]);
}

#[tokio::test]
async fn report_returns_once_probe_has_answered() {
    let host = FakeHost::default();
    let prober: Arc<dyn ReachabilityProber> = Arc::new(utils::unreachable_prober());
    let cfg = Config {
        report_wait: Duration::from_secs(10),
        ..Config::default()
    };

    let start = Instant::now();
    let mut out: Vec<u8> = Vec::new();
    diagnostics::run(&host, &host, prober, &cfg, &mut out, ReportStyle::plain())
        .await
        .unwrap();

    assert!(start.elapsed() < Duration::from_secs(5));
}

/// Keeps every chunk handed to `write` together with the time it arrived.
#[derive(Default)]
struct TimedWriter {
    chunks: Vec<(Instant, String)>,
}

impl TimedWriter {
    fn first_containing(&self, needle: &str) -> Instant {
        self.chunks
            .iter()
            .find(|(_, chunk)| chunk.contains(needle))
            .map(|(at, _)| *at)
            .unwrap_or_else(|| panic!("nothing containing {needle:?} was written"))
    }
}

impl Write for TimedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.chunks.push((Instant::now(), String::from_utf8_lossy(buf).into_owned()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Answers `true` after `delay` and remembers when it did.
struct DelayedChecker {
    delay: Duration,
    answered_at: Arc<Mutex<Option<Instant>>>,
}

#[async_trait]
impl ReachabilityProber for DelayedChecker {
    async fn probe(&self) -> bool {
        tokio::time::sleep(self.delay).await;
        *self.answered_at.lock().unwrap() = Some(Instant::now());
        true
    }
}

#[tokio::test]
async fn interface_section_is_written_before_reachability_resolves() {
    let host = FakeHost::default()
        .entry(utils::v4("eth0", 192, 168, 1, 10))
        .mac("eth0", MacAddr::new(0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff));
    let answered_at: Arc<Mutex<Option<Instant>>> = Arc::new(Mutex::new(None));
    let checker: Arc<dyn ReachabilityProber> = Arc::new(DelayedChecker {
        delay: Duration::from_millis(500),
        answered_at: Arc::clone(&answered_at),
    });
    let cfg = Config {
        report_wait: Duration::from_secs(2),
        ..Config::default()
    };

    let mut out = TimedWriter::default();
    let report = diagnostics::run(&host, &host, checker, &cfg, &mut out, ReportStyle::plain())
        .await
        .unwrap();

    let answered: Instant = answered_at.lock().unwrap().expect("check never answered");
    assert!(out.first_containing("MAC:") < answered);
    assert!(out.first_containing("Internet Access:") >= answered);
    assert_eq!(report.internet, Reachability::Available);
}
