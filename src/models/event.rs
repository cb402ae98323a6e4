use serde::{Deserialize, Serialize};

use super::deserialize_cell;

/// An academic event, displayed in fetch order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry {
    #[serde(alias = "titulo", alias = "título", default, deserialize_with = "deserialize_cell")]
    pub title: String,
    #[serde(alias = "descricao", alias = "descrição", default, deserialize_with = "deserialize_cell")]
    pub description: String,
    #[serde(alias = "data", default, deserialize_with = "deserialize_cell")]
    pub date: String,
    #[serde(alias = "horario", alias = "horário", default, deserialize_with = "deserialize_cell")]
    pub time: String,
    #[serde(alias = "local", default, deserialize_with = "deserialize_cell")]
    pub location: String,
}
