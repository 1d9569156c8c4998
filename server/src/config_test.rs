use super::*;

#[test]
fn default_listens_on_localhost_8000() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8000");
    assert_eq!(cfg.site_root, PathBuf::from("target/site"));
}

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), 8000);
    assert_eq!(parse_port(Some("  ")).unwrap(), 8000);
}

#[test]
fn parse_port_reads_value() {
    assert_eq!(parse_port(Some(" 3000 ")).unwrap(), 3000);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_bind_accepts_any_ip() {
    assert_eq!(parse_bind(Some("0.0.0.0")).unwrap().to_string(), "0.0.0.0");
    assert_eq!(parse_bind(Some("::1")).unwrap().to_string(), "::1");
    assert_eq!(parse_bind(None).unwrap().to_string(), "127.0.0.1");
}

#[test]
fn parse_bind_rejects_hostname() {
    let err = parse_bind(Some("localhost")).unwrap_err().to_string();
    assert!(err.contains("invalid JANUS_BIND"));
}
