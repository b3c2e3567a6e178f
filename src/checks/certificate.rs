//! TLS certificate retrieval and inspection
//!
//! Connects with a permissive verifier so the handshake completes even for
//! expired, self-signed, or mismatched certificates, then parses the leaf
//! with x509-parser and judges it. Strict verification would reject exactly
//! the certificates this check exists to report on.

use crate::config::settings::CertificateSettings;
use crate::models::{CertificateReport, CheckData, CheckKind, CheckResult};
use crate::utils::CertificateError;
use chrono::{DateTime, TimeZone, Utc};
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, Error as RustlsError, SignatureScheme};
use std::sync::Arc;
use tokio::net::TcpStream;
use x509_parser::prelude::*;

/// A certificate verifier that accepts any certificate, so the certificate
/// itself can be analyzed after the handshake.
#[derive(Debug)]
struct AcceptAnyCertVerifier;

impl ServerCertVerifier for AcceptAnyCertVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, RustlsError> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
            SignatureScheme::ED448,
        ]
    }
}

/// TLS certificate checker
pub struct CertificateChecker {
    settings: CertificateSettings,
}

impl CertificateChecker {
    /// Create a new certificate checker with the given settings
    pub fn new(settings: CertificateSettings) -> Self {
        // Ensure a default crypto provider is installed (needed when multiple
        // providers are available, e.g. when reqwest enables its own)
        let _ = rustls::crypto::ring::default_provider().install_default();
        Self { settings }
    }

    /// Fetch and judge the certificate the host presents for this hostname.
    ///
    /// Retrieval failures (refused connection, no TLS, timeout) are folded
    /// into the returned result as `succeeded = false` rather than
    /// propagated; a host that cannot present a certificate is itself a
    /// signal.
    pub async fn check(&self, hostname: &str) -> CheckResult {
        match self.fetch_report(hostname).await {
            Ok(report) => {
                let outcome = describe_report(hostname, &report);
                CheckResult::success(
                    hostname,
                    CheckKind::Certificate,
                    outcome,
                    CheckData::Certificate(report),
                )
            }
            Err(e) => {
                tracing::warn!("certificate check for {} failed: {}", hostname, e);
                CheckResult::failure(
                    hostname,
                    CheckKind::Certificate,
                    format!("Could not retrieve certificate: {}.", e),
                )
            }
        }
    }

    async fn fetch_report(&self, hostname: &str) -> Result<CertificateReport, CertificateError> {
        let der = self.fetch_leaf(hostname).await?;
        tracing::debug!("retrieved {} byte leaf certificate from {}", der.len(), hostname);
        build_report(hostname, &der)
    }

    /// Connect, shake hands permissively, and return the DER-encoded leaf
    async fn fetch_leaf(&self, hostname: &str) -> Result<Vec<u8>, CertificateError> {
        let config = ClientConfig::builder()
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(AcceptAnyCertVerifier))
            .with_no_client_auth();

        let connector = tokio_rustls::TlsConnector::from(Arc::new(config));
        let port = self.settings.port;

        let stream = tokio::time::timeout(
            self.settings.connect_timeout(),
            TcpStream::connect((hostname, port)),
        )
        .await
        .map_err(|_| CertificateError::ConnectionTimeout {
            host: hostname.to_string(),
            port,
        })?
        .map_err(|e| CertificateError::ConnectionFailed {
            host: hostname.to_string(),
            port,
            message: e.to_string(),
        })?;

        let server_name = ServerName::try_from(hostname.to_string()).map_err(|_| {
            CertificateError::InvalidServerName {
                host: hostname.to_string(),
            }
        })?;

        let tls_stream = tokio::time::timeout(
            self.settings.handshake_timeout(),
            connector.connect(server_name, stream),
        )
        .await
        .map_err(|_| CertificateError::HandshakeTimeout {
            host: hostname.to_string(),
        })?
        .map_err(|e| CertificateError::HandshakeFailed {
            host: hostname.to_string(),
            message: e.to_string(),
        })?;

        let (_, connection) = tls_stream.get_ref();
        connection
            .peer_certificates()
            .and_then(|certs| certs.first())
            .map(|cert| cert.as_ref().to_vec())
            .ok_or_else(|| CertificateError::NoCertificate {
                host: hostname.to_string(),
            })
    }
}

/// Parse the DER-encoded leaf and derive the report fields
fn build_report(hostname: &str, der: &[u8]) -> Result<CertificateReport, CertificateError> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| CertificateError::ParseError {
        message: format!("{:?}", e),
    })?;

    let issuer = extract_cn(&cert.issuer().to_string());
    let subject_cn = extract_cn(&cert.subject().to_string());
    let san = extract_san(&cert);

    let expiration_date = asn1_time_to_datetime(cert.validity().not_after)?;
    let expires_in_days = expiration_date.signed_duration_since(Utc::now()).num_days();
    let is_expired = expires_in_days < 0;

    let domain_matches_certificate = matches_hostname(hostname, &subject_cn, &san);

    Ok(CertificateReport {
        issuer,
        expiration_date,
        is_expired,
        expires_in_days: Some(expires_in_days),
        domain_matches_certificate,
    })
}

/// One-line outcome for a successfully retrieved certificate
fn describe_report(hostname: &str, report: &CertificateReport) -> String {
    if report.is_expired {
        format!(
            "Certificate from {} expired on {}.",
            report.issuer,
            report.expiration_date.format("%Y-%m-%d")
        )
    } else if !report.domain_matches_certificate {
        format!(
            "Certificate from {} does not cover the hostname {}.",
            report.issuer, hostname
        )
    } else {
        format!(
            "Certificate from {} is valid until {} ({} days).",
            report.issuer,
            report.expiration_date.format("%Y-%m-%d"),
            report.expires_in_days.unwrap_or_default()
        )
    }
}

/// Does the certificate cover this hostname? SANs are checked first, then
/// the subject CN, with single-level wildcard support.
fn matches_hostname(hostname: &str, subject_cn: &str, san: &[String]) -> bool {
    let hostname = hostname.to_lowercase();

    for name in san {
        if hostname_matches_pattern(&hostname, &name.to_lowercase()) {
            return true;
        }
    }

    hostname_matches_pattern(&hostname, &subject_cn.to_lowercase())
}

fn hostname_matches_pattern(hostname: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix("*.") {
        // Wildcards cover exactly one label
        match hostname.split_once('.') {
            Some((_, rest)) => rest == suffix,
            None => false,
        }
    } else {
        hostname == pattern
    }
}

fn extract_san(cert: &X509Certificate) -> Vec<String> {
    let mut sans = Vec::new();

    if let Ok(Some(san_ext)) = cert.subject_alternative_name() {
        for name in &san_ext.value.general_names {
            if let GeneralName::DNSName(dns) = name {
                sans.push(dns.to_string());
            }
        }
    }

    sans
}

/// Convert ASN.1 time to chrono DateTime
fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>, CertificateError> {
    let timestamp = time.timestamp();
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .ok_or_else(|| CertificateError::ParseError {
            message: "Invalid timestamp in certificate".to_string(),
        })
}

/// Extract common name from a distinguished name string
fn extract_cn(dn: &str) -> String {
    // DN format: "CN=example.com, O=Example Inc, ..."
    for part in dn.split(',') {
        let part = part.trim();
        if let Some(cn) = part.strip_prefix("CN=") {
            return cn.to_string();
        }
    }
    dn.to_string()
}
