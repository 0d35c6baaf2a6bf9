use serde::Deserialize;

/// Cuerpo de error estructurado que devuelve el backend en respuestas no-2xx
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub stack: String,
}

impl ErrorBody {
    /// Decodifica el cuerpo crudo de una respuesta de error.
    /// El backend serializa tabs literales dentro del JSON (bug conocido del
    /// lado servidor), así que se eliminan antes de parsear.
    pub fn from_raw(body: &str) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        let sanitized = body.replace('\t', "  ");
        serde_json::from_str(&sanitized).ok()
    }

    /// Texto para mostrar en la notificación: detalle + traza
    pub fn stack_trace(&self) -> String {
        format!("{}\n{}", self.details, self.stack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodifica_cuerpo_con_tabs_literales() {
        // Tabs crudos dentro del string JSON: inválido hasta sanearlo
        let raw = "{\"details\": \"boom\", \"stack\": \"at a\tat b\"}";
        let body = ErrorBody::from_raw(raw).expect("debe parsear tras quitar tabs");
        assert_eq!(body.details, "boom");
        assert_eq!(body.stack, "at a  at b");
    }

    #[test]
    fn cuerpo_vacio_devuelve_none() {
        assert!(ErrorBody::from_raw("").is_none());
    }

    #[test]
    fn cuerpo_no_json_devuelve_none() {
        assert!(ErrorBody::from_raw("<html>502</html>").is_none());
    }

    #[test]
    fn stack_trace_concatena_detalle_y_traza() {
        let body = ErrorBody {
            details: "NullPointerException".to_string(),
            stack: "at org.acme".to_string(),
        };
        assert_eq!(body.stack_trace(), "NullPointerException\nat org.acme");
    }
}
