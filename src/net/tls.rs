//! TLS configuration and certificate loading.

use std::path::Path;

use axum_server::tls_rustls::RustlsConfig;

use crate::config::TlsConfig;

/// Load rustls configuration from PEM certificate and key files.
pub async fn load_tls_config(cert_path: &Path, key_path: &Path) -> Result<RustlsConfig, std::io::Error> {
    if !cert_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Certificate file not found: {:?}", cert_path),
        ));
    }
    if !key_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Private key file not found: {:?}", key_path),
        ));
    }

    let config = RustlsConfig::from_pem_file(cert_path, key_path).await?;

    tracing::info!(cert = ?cert_path, "TLS certificate loaded");
    Ok(config)
}

/// Load the rustls configuration described by a `[listener.tls]` table.
pub async fn load_from_config(tls: &TlsConfig) -> Result<RustlsConfig, std::io::Error> {
    load_tls_config(Path::new(&tls.cert_path), Path::new(&tls.key_path)).await
}
