use chrono::{DateTime, Utc};

use super::{Advisory, AdvisoryCategory};
use crate::priority::Priority;

const FALLBACK: [(&str, &str, &str, AdvisoryCategory, Priority); 5] = [
    (
        "fallback-seasonal",
        "Preparación Temporada Alta",
        "Faltan 50 días para Navidad. Estimamos que se necesitarán ~5,000 rollos de papel térmico adicionales para cubrir el incremento del 30% en ventas de frutas. Programa tu compra con anticipación.",
        AdvisoryCategory::Seasonal,
        Priority::High,
    ),
    (
        "fallback-maintenance",
        "Mantenimiento Preventivo",
        "La próxima calibración general está programada para el 10 de marzo de 2025. Te recomendamos adelantar mantenciones preventivas antes del 15 de noviembre para evitar paradas en temporada alta.",
        AdvisoryCategory::Maintenance,
        Priority::Medium,
    ),
    (
        "fallback-supply",
        "Alerta de Stock Crítico",
        "El consumo diario de rollos es de 615 unidades y el stock de rollos económicos es de 8,000. Se prevé que se agotará en 13 días. Considera ordenar 10,000 rollos adicionales.",
        AdvisoryCategory::Supply,
        Priority::High,
    ),
    (
        "fallback-optimization",
        "Optimización Autoservicio",
        "El tiempo promedio de pesaje por cliente es de 25–30s. Revisar layouts y capacitaciones podría reducirlo a 20s, aumentando la capacidad de atención en horas punta.",
        AdvisoryCategory::Optimization,
        Priority::Medium,
    ),
    (
        "fallback-fraud",
        "Detección de Anomalías",
        "En el local Recoleta se registran muchas mediciones de 335g, equivalentes a una lata de refresco. Podría indicar fraude en autoservicio; revisa cámaras y refuerza la supervisión.",
        AdvisoryCategory::Fraud,
        Priority::High,
    ),
];

/// Pre-authored advisories served whenever generation fails
pub fn fallback_advisories(created_at: DateTime<Utc>) -> Vec<Advisory> {
    FALLBACK
        .iter()
        .map(|(id, title, content, category, priority)| Advisory {
            id: (*id).to_string(),
            title: (*title).to_string(),
            content: (*content).to_string(),
            category: *category,
            priority: *priority,
            created_at,
        })
        .collect()
}
