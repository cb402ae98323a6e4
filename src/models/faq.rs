use serde::{Deserialize, Serialize};

use super::deserialize_cell;

/// A frequently asked question. The answer may embed URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(alias = "categoria", default, deserialize_with = "deserialize_cell")]
    pub category: String,
    #[serde(alias = "pergunta", default, deserialize_with = "deserialize_cell")]
    pub question: String,
    #[serde(alias = "resposta", default, deserialize_with = "deserialize_cell")]
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_faq_row() {
        let json = r#"{
            "categoria": "Financeiro",
            "pergunta": "Como emitir boleto?",
            "resposta": "Acesse https://portal.example.com/boletos"
        }"#;
        let entry: FaqEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.category, "Financeiro");
        assert_eq!(entry.question, "Como emitir boleto?");
        assert!(entry.answer.contains("https://portal.example.com/boletos"));
    }
}
