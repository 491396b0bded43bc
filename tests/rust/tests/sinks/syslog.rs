//! Syslog datagrams

use logkit::{setup_logging, setup_syslog_logger, LogConfig, Severity};
use std::net::UdpSocket;
use std::time::Duration;
use tests::unique_name;

fn listener() -> (UdpSocket, String) {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    socket
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let address = socket.local_addr().unwrap().to_string();
    (socket, address)
}

fn receive(socket: &UdpSocket) -> String {
    let mut buf = [0u8; 2048];
    let (len, _) = socket.recv_from(&mut buf).unwrap();
    String::from_utf8_lossy(&buf[..len]).into_owned()
}

#[test]
fn test_wire_format() {
    let (socket, address) = listener();
    let name = unique_name("syslog");
    let config = LogConfig::new(&name)
        .with_console(false)
        .with_syslog(&address)
        .with_syslog_level(Severity::DEBUG);
    let log = setup_logging(&config).unwrap();

    log.with_context(tests::fields([("user_id", "bob")]))
        .warning("quota exceeded");
    logkit::clear_log_context();

    assert_eq!(
        receive(&socket),
        format!("<12>{}[{}]: WARNING quota exceeded", name, std::process::id())
    );
}

#[test]
fn test_unreachable_endpoint_never_fails_the_caller() {
    // bind and drop to get a port nobody listens on
    let address = {
        let (socket, address) = listener();
        drop(socket);
        address
    };
    let log = setup_syslog_logger(&unique_name("syslog-dead"), Severity::INFO, &address).unwrap();
    for _ in 0..3 {
        log.error("nobody is listening");
    }
}
