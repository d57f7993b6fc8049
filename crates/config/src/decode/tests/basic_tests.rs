//! Happy-path and default-handling tests for the root decoder.

use super::decode;
use crate::constants::DEFAULT_SERVICE_NAME;

#[test]
fn test_minimal_document_applies_defaults() {
    let config = decode(
        r#"<loggerServerConfiguration><tcpServerConfig port="9000"/><pipeServerConfig pipeName="svc"/></loggerServerConfiguration>"#,
    )
    .unwrap();

    assert!(config.tcp_server.is_enabled);
    assert_eq!(config.tcp_server.port, 9000);
    assert_eq!(config.tcp_server.service_name, DEFAULT_SERVICE_NAME);

    assert!(config.pipe_server.is_enabled);
    assert_eq!(config.pipe_server.pipe_name, "svc");
    assert_eq!(config.pipe_server.service_name, DEFAULT_SERVICE_NAME);
}

#[test]
fn test_explicit_attributes_override_defaults() {
    let config = decode(
        r#"<loggerServerConfiguration>
            <tcpServerConfig isEnabled="false" port="1514" serviceName="IntakeTcp"/>
            <pipeServerConfig isEnabled="0" pipeName="intake" serviceName="IntakePipe"/>
        </loggerServerConfiguration>"#,
    )
    .unwrap();

    assert!(!config.tcp_server.is_enabled);
    assert_eq!(config.tcp_server.port, 1514);
    assert_eq!(config.tcp_server.service_name, "IntakeTcp");

    assert!(!config.pipe_server.is_enabled);
    assert_eq!(config.pipe_server.pipe_name, "intake");
    assert_eq!(config.pipe_server.service_name, "IntakePipe");
}

#[test]
fn test_children_may_appear_in_any_order() {
    let config = decode(
        r#"<loggerServerConfiguration>
            <pipeServerConfig pipeName="svc"/>
            <tcpServerConfig port="9000"/>
        </loggerServerConfiguration>"#,
    )
    .unwrap();

    assert_eq!(config.tcp_server.port, 9000);
    assert_eq!(config.pipe_server.pipe_name, "svc");
}

#[test]
fn test_declaration_comments_and_whitespace_are_ignored() {
    let config = decode(
        r#"<?xml version="1.0" encoding="utf-8"?>
        <!-- logger server configuration -->
        <loggerServerConfiguration>
            <!-- tcp intake -->
            <tcpServerConfig port="9000"/>

            <pipeServerConfig pipeName="svc"/>
        </loggerServerConfiguration>"#,
    )
    .unwrap();

    assert_eq!(config.tcp_server.port, 9000);
}

#[test]
fn test_open_close_elements_decode_like_self_closing() {
    let config = decode(
        r#"<loggerServerConfiguration>
            <tcpServerConfig port="9000"></tcpServerConfig>
            <pipeServerConfig pipeName="svc"></pipeServerConfig>
        </loggerServerConfiguration>"#,
    )
    .unwrap();

    assert_eq!(config.tcp_server.port, 9000);
    assert_eq!(config.pipe_server.pipe_name, "svc");
}

#[test]
fn test_text_content_inside_a_node_is_ignored() {
    let config = decode(
        r#"<loggerServerConfiguration>
            <tcpServerConfig port="9000">stray text</tcpServerConfig>
            <pipeServerConfig pipeName="svc"/>
        </loggerServerConfiguration>"#,
    )
    .unwrap();

    assert_eq!(config.tcp_server.port, 9000);
}

#[test]
fn test_decoding_is_idempotent() {
    let document = r#"<loggerServerConfiguration>
        <tcpServerConfig isEnabled="true" port="514" serviceName="Syslog"/>
        <pipeServerConfig pipeName="logsrv" serviceName="Pipe"/>
    </loggerServerConfiguration>"#;

    let first = decode(document).unwrap();
    let second = decode(document).unwrap();
    assert_eq!(first, second);
}
