// ============================================================================
// SOLVER API - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra el solver
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{ErrorBody, StatusResponse};

/// Error de una operación contra el backend
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Respuesta no-2xx del servidor, con cuerpo decodificado si lo hubo
    Server {
        status: u16,
        status_text: String,
        body: Option<ErrorBody>,
    },
    /// Fallo de transporte (request que no llegó a resolverse)
    Network(String),
    /// Respuesta 2xx cuyo cuerpo no se pudo decodificar
    Decode(String),
}

impl ApiError {
    /// Línea principal de la notificación. Los fallos del servidor llevan el
    /// título de la operación con su código de estado; los fallos del lado
    /// cliente llevan siempre el título genérico.
    pub fn message(&self, title: &str) -> String {
        match self {
            ApiError::Server { status, status_text, .. } => {
                format!("{} ({}: {}).", title, status, status_text)
            }
            ApiError::Network(_) | ApiError::Decode(_) => {
                "Failed to process response.".to_string()
            }
        }
    }

    /// Traza para el cuerpo de la notificación
    pub fn stack_trace(&self) -> String {
        match self {
            ApiError::Server { body, .. } => {
                body.as_ref().map(ErrorBody::stack_trace).unwrap_or_default()
            }
            ApiError::Network(detail) | ApiError::Decode(detail) => detail.clone(),
        }
    }
}

/// Cliente del solver - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct SolverApi {
    base_url: String,
}

impl SolverApi {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    /// Obtener el estado actual del solver (snapshot + flag isSolving)
    pub async fn get_status(&self) -> Result<StatusResponse, ApiError> {
        let url = format!("{}/vrp/status", self.base_url);
        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(Self::server_error(response).await);
        }

        let status = response
            .json::<StatusResponse>()
            .await
            .map_err(|e| ApiError::Decode(format!("Parse error: {}", e)))?;

        log::info!(
            "📋 Estado recibido: {} vehículos, {} depósitos, {} rides (solving={})",
            status.solution.vehicle_list.len(),
            status.solution.depot_list.len(),
            status.solution.ride_list.len(),
            status.is_solving
        );

        Ok(status)
    }

    /// Arrancar el solver
    pub async fn solve(&self) -> Result<(), ApiError> {
        log::info!("▶️ Arrancando solver...");
        self.post_command("/vrp/solve").await
    }

    /// Detener el solver
    pub async fn stop_solving(&self) -> Result<(), ApiError> {
        log::info!("⏹️ Deteniendo solver...");
        self.post_command("/vrp/stopSolving").await
    }

    /// POST sin cuerpo; solo interesa el código de estado
    async fn post_command(&self, path: &str) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(Self::server_error(response).await);
        }
        Ok(())
    }

    async fn server_error(response: gloo_net::http::Response) -> ApiError {
        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .ok()
            .as_deref()
            .and_then(ErrorBody::from_raw);
        log::error!("❌ Error del servidor: HTTP {} {}", status, status_text);
        ApiError::Server {
            status,
            status_text,
            body,
        }
    }
}
