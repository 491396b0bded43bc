//! UDP syslog forwarding
//!
//! Each record is one datagram: `<PRI>logger[pid]: SEVERITY message`, with
//! facility `user`. Delivery is best effort.

use logkit_core::{context, EnrichedRecord, Severity};
use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use super::Destination;
use crate::error::{LogkitError, Result};

/// `user-level messages`
const FACILITY_USER: u8 = 1;

#[derive(Debug)]
pub struct SyslogDestination {
    socket: UdpSocket,
    target: SocketAddr,
}

impl SyslogDestination {
    /// Resolve `address` (`host:port`) and bind a local socket for it.
    pub fn connect(address: &str) -> Result<Self> {
        let syslog_err = |source: io::Error| LogkitError::Syslog {
            address: address.to_string(),
            source,
        };
        let target = address
            .to_socket_addrs()
            .map_err(syslog_err)?
            .next()
            .ok_or_else(|| {
                syslog_err(io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    "address did not resolve",
                ))
            })?;
        let local = if target.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
        let socket = UdpSocket::bind(local).map_err(syslog_err)?;
        Ok(Self { socket, target })
    }

    pub fn target(&self) -> SocketAddr {
        self.target
    }
}

impl Destination for SyslogDestination {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.socket.send_to(line.as_bytes(), self.target).map(|_| ())
    }
}

/// Builds the datagram payload for a record
#[derive(Debug, Default, Clone, Copy)]
pub struct SyslogFormat;

impl SyslogFormat {
    pub fn payload(&self, record: &EnrichedRecord) -> String {
        let rec = &record.record;
        let mut payload = format!(
            "<{}>{}[{}]: {} {}",
            priority(&rec.severity),
            rec.logger,
            context::defaults().pid,
            rec.severity,
            rec.message
        );
        if let Some(exc) = &rec.exception {
            payload.push_str(&format!(" ({}: {})", exc.type_name, exc.message));
        }
        payload
    }
}

/// RFC 5424 severity code for a level, by rank
fn severity_code(severity: &Severity) -> u8 {
    match severity.value() {
        v if v >= Severity::CRITICAL.value() => 2,
        v if v >= Severity::ERROR.value() => 3,
        v if v >= Severity::WARNING.value() => 4,
        v if v >= Severity::INFO.value() => 6,
        _ => 7,
    }
}

fn priority(severity: &Severity) -> u8 {
    FACILITY_USER * 8 + severity_code(severity)
}
