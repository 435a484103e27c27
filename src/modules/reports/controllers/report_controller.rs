use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};

use crate::core::{AppError, Result};
use crate::modules::reports::services::{payment_breakdown, ReportPipeline};
use crate::modules::sales::models::DateWindow;

/// Body of the report endpoints
#[derive(Debug, Default, Deserialize)]
pub struct GenerateReportRequest {
    #[serde(default)]
    pub token: Option<String>,
    /// Start of the period (inclusive, format: YYYY-MM-DD)
    #[serde(default)]
    pub data_inicio: Option<String>,
    /// End of the period (inclusive, format: YYYY-MM-DD)
    #[serde(default)]
    pub data_fim: Option<String>,
}

/// A request that passed validation
#[derive(Debug)]
pub struct ReportParams {
    pub token: String,
    pub window: DateWindow,
}

impl GenerateReportRequest {
    pub fn validate(&self) -> Result<ReportParams> {
        let present = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let (Some(token), Some(start), Some(end)) = (
            present(&self.token),
            present(&self.data_inicio),
            present(&self.data_fim),
        ) else {
            return Err(AppError::validation(
                "Parâmetros 'token', 'data_inicio' e 'data_fim' são obrigatórios.",
            ));
        };

        Ok(ReportParams {
            token,
            window: DateWindow::parse(&start, &end)?,
        })
    }
}

/// POST /api/generate-report
///
/// Runs the sales pipeline for the requested period and returns
/// `{total, kpis, data}`.
pub async fn generate_report(
    pipeline: web::Data<ReportPipeline>,
    body: web::Json<GenerateReportRequest>,
) -> Result<HttpResponse> {
    let params = body.validate()?;
    info!(window = %params.window, "Report requested");

    let result = pipeline
        .run(&params.token, params.window.start, params.window.end)
        .await
        .inspect_err(|e| error!(window = %params.window, error = %e, "Report generation failed"))?;

    Ok(HttpResponse::Ok().json(result))
}

/// POST /api/payment-methods
///
/// Same input as the report; returns the per-payment-method totals.
pub async fn get_payment_methods(
    pipeline: web::Data<ReportPipeline>,
    body: web::Json<GenerateReportRequest>,
) -> Result<HttpResponse> {
    let params = body.validate()?;

    let result = pipeline
        .run(&params.token, params.window.start, params.window.end)
        .await
        .inspect_err(|e| error!(window = %params.window, error = %e, "Payment breakdown failed"))?;

    Ok(HttpResponse::Ok().json(payment_breakdown(&result.data)))
}

/// Configure routes for reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/generate-report", web::post().to(generate_report))
            .route("/payment-methods", web::post().to(get_payment_methods)),
    );
}
