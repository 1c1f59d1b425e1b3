//! Modelos de dominio (reseñas de entrada y resultados del análisis).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Polaridad categórica derivada del `compound` score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Una reseña leída del dataset, ya tipada.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRow {
    pub review: String,
    pub rating: Option<f64>,
}

/// Resultado del análisis de una reseña. Se crea por petición y no se persiste.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub id: usize,
    pub review: String,
    pub compound_score: f64,
    pub sentiment: Sentiment,
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
    // Siempre presente en el JSON: `null` si no hay columna o el valor falta.
    pub rating: Option<f64>,
}

/// Cuerpo de `POST /analyze`.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzePayload {
    #[serde(default)]
    pub reviews: Option<Vec<Value>>,
}

/// Convierte cualquier valor JSON en el texto a analizar.
pub fn review_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Un valor numérico no finito (NaN, ±inf) se trata como ausente.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
