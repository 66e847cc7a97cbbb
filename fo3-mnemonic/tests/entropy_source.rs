//! Tests for remote entropy sources

mod common;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::english;
use fo3_mnemonic::source::{mixed_entropy, HttpEntropySource};
use fo3_mnemonic::{EntropySource, EntropySourceConfig, Error, MnemonicStrength, SourceFactory, SourceType};

fn test_config(base_url: &str) -> EntropySourceConfig {
    EntropySourceConfig {
        source_type: SourceType::Http,
        url: Some(format!("{}/bits", base_url)),
        api_key: Some("test-key".to_string()),
        timeout: Some(5),
    }
}

#[tokio::test]
async fn test_fetch_bits() {
    let server = MockServer::start().await;
    let bits = "10".repeat(64);

    Mock::given(method("GET"))
        .and(path("/bits"))
        .and(query_param("bits", "128"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!("{}\n", bits)))
        .mount(&server)
        .await;

    let source = HttpEntropySource::new(test_config(&server.uri())).unwrap();
    assert_eq!(source.fetch_bits(128).await.unwrap(), bits);
}

#[tokio::test]
async fn test_generate_mixed_with_remote_bits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bits"))
        .respond_with(ResponseTemplate::new(200).set_body_string("0".repeat(256)))
        .mount(&server)
        .await;

    let codec = english();
    let source = SourceFactory::create_source(test_config(&server.uri())).unwrap();
    let phrase = codec
        .generate_mixed(MnemonicStrength::Words24, &*source)
        .await
        .unwrap();

    assert_eq!(phrase.word_count(), 24);
    assert!(codec.validate_mnemonic(&phrase));
}

#[tokio::test]
async fn test_server_error_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bits"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let source = HttpEntropySource::new(test_config(&server.uri())).unwrap();
    let result = mixed_entropy(MnemonicStrength::Words12, &source).await;
    assert!(matches!(result, Err(Error::ExternalEntropyUnavailable(_))));
}

#[tokio::test]
async fn test_malformed_body_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bits"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not a bit string"))
        .mount(&server)
        .await;

    let source = HttpEntropySource::new(test_config(&server.uri())).unwrap();
    let result = source.fetch_bits(128).await;
    assert!(matches!(result, Err(Error::ExternalEntropyUnavailable(_))));
}

#[tokio::test]
async fn test_unreachable_service_is_fatal() {
    let config = EntropySourceConfig {
        source_type: SourceType::Http,
        url: Some("http://127.0.0.1:9/bits".to_string()),
        api_key: None,
        timeout: Some(1),
    };
    let source = HttpEntropySource::new(config).unwrap();
    let result = mixed_entropy(MnemonicStrength::Words12, &source).await;
    assert!(matches!(result, Err(Error::ExternalEntropyUnavailable(_))));
}

#[test]
fn test_http_source_requires_url() {
    let config = EntropySourceConfig {
        source_type: SourceType::Http,
        url: None,
        api_key: None,
        timeout: None,
    };
    assert!(matches!(SourceFactory::create_source(config), Err(Error::Config(_))));
}
