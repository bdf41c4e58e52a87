use crate::store::{Store, StoreStatus};

pub const SYSTEM_PROMPT: &str = "Eres un asistente de IA especializado en análisis predictivo para sistemas de balanzas de supermercados Walmart en Chile. Generas insights valiosos basados en datos del sistema.";

/// Fleet condition summary handed to the text generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FleetSnapshot {
    pub total_stores: usize,
    pub offline_stores: usize,
    pub problematic_devices: usize,
    pub total_devices: usize,
}

impl FleetSnapshot {
    pub fn from_stores(stores: &[Store]) -> Self {
        let devices = stores.iter().flat_map(|s| s.devices.iter());
        let (problematic_devices, total_devices) =
            devices.fold((0, 0), |(problematic, total), device| {
                (problematic + usize::from(device.needs_attention()), total + 1)
            });

        Self {
            total_stores: stores.len(),
            offline_stores: stores
                .iter()
                .filter(|s| s.status == StoreStatus::Offline)
                .count(),
            problematic_devices,
            total_devices,
        }
    }

    pub fn context(&self) -> String {
        format!(
            "Sistema BM MANAGER - Datos actuales:\n\
             - Total locales: {}\n\
             - Locales offline: {}\n\
             - Dispositivos con problemas: {} de {}\n\
             - Es temporada de invierno (junio-agosto) en Chile\n\
             - Consumo diario estimado: 615 rollos de papel térmico\n\
             - Stock actual: 8000 rollos económicos\n\
             - Próxima calibración programada: 10 marzo 2025\n",
            self.total_stores, self.offline_stores, self.problematic_devices, self.total_devices
        )
    }

    /// User prompt asking for five structured suggestions
    pub fn prompt(&self) -> String {
        format!(
            r#"{}
Genera 5 predicciones/sugerencias relevantes y accionables para el sistema BM MANAGER. Cada predicción debe:
- Ser específica y basada en los datos proporcionados
- Incluir números/métricas cuando sea apropiado
- Ser útil para la operación diaria
- Estar en español chileno

Responde únicamente con un arreglo JSON con este formato:
[
  {{
    "title": "Título conciso",
    "content": "Descripción detallada con métricas específicas",
    "category": "maintenance|supply|fraud|optimization|seasonal",
    "priority": "high|medium|low"
  }}
]"#,
            self.context()
        )
    }
}
