//! Clasificador de sentimiento sobre el analizador léxico VADER.
//!
//! El analizador externo devuelve cuatro números (`compound`, `pos`, `neg`,
//! `neu`); aquí solo se traduce `compound` a una etiqueta y se empaqueta el
//! resultado.

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::models::{AnalysisResult, Sentiment};

/// Umbral (inclusive) a partir del cual una reseña es positiva.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Umbral (inclusive) por debajo del cual una reseña es negativa.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

impl Sentiment {
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Las cuatro puntuaciones que entrega el analizador.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarityScores {
    pub compound: f64,
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
}

/// Envoltorio del analizador VADER. Se construye una vez al arrancar y se
/// comparte (solo lectura) entre peticiones.
pub struct SentimentClassifier {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        // Sin tokens no hay nada que puntuar.
        if text.trim().is_empty() {
            return PolarityScores::default();
        }
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or_default();
        let (pos, neg) = (get("pos"), get("neg"));
        // Sin tokens polares la suma es 0: la puntuación (`!`, `?`) no debe
        // desplazar el compound (vader_sentiment le resta el amplificador).
        let compound = if pos == 0.0 && neg == 0.0 {
            0.0
        } else {
            get("compound")
        };
        PolarityScores {
            compound,
            pos,
            neg,
            neu: get("neu"),
        }
    }

    /// Analiza una reseña y construye su `AnalysisResult`.
    pub fn analyze_review(
        &self,
        review: String,
        id: usize,
        rating: Option<f64>,
    ) -> AnalysisResult {
        let scores = self.polarity_scores(&review);
        AnalysisResult {
            id,
            review,
            compound_score: scores.compound,
            sentiment: Sentiment::from_compound(scores.compound),
            pos: scores.pos,
            neg: scores.neg,
            neu: scores.neu,
            rating,
        }
    }

    /// Analiza una lista en orden; los ids son la posición (base 1).
    pub fn analyze_all<I>(&self, reviews: I) -> Vec<AnalysisResult>
    where
        I: IntoIterator<Item = (String, Option<f64>)>,
    {
        reviews
            .into_iter()
            .enumerate()
            .map(|(index, (review, rating))| self.analyze_review(review, index + 1, rating))
            .collect()
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SentimentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentClassifier").finish_non_exhaustive()
    }
}
