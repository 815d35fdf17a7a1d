use std::collections::BTreeMap;

use gloo_net::http::Request;
use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("el envío de mensajes no está configurado")]
    NotConfigured,
    #[error("no se pudo preparar el mensaje: {0}")]
    Encode(String),
    #[error("error de red: {0}")]
    Network(String),
    #[error("el servicio rechazó el mensaje (estado {0})")]
    Rejected(u16),
}

/// Posts the form mapping as JSON to `endpoint`. Any non-2xx answer counts
/// as a failed delivery.
pub async fn deliver(
    endpoint: Option<&str>,
    fields: &BTreeMap<&'static str, String>,
) -> Result<(), DeliveryError> {
    let Some(endpoint) = endpoint else {
        warn!("Contact endpoint not configured, message not sent");
        return Err(DeliveryError::NotConfigured);
    };

    let request = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(fields)
        .map_err(|e| DeliveryError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    if response.ok() {
        info!("Contact message delivered");
        Ok(())
    } else {
        warn!("Contact delivery failed with status: {}", response.status());
        Err(DeliveryError::Rejected(response.status()))
    }
}
