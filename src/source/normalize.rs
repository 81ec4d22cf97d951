//! Field-name normalization for source headers.
//!
//! Report and spreadsheet headers arrive as free text (`FECHA DE INGRESO`,
//! `N° Contrato`, `Tipo-Empleado (actual)`). They are folded to the
//! lower-case ASCII snake form the record model expects.

use serde_json::{Map, Value};

/// Normalizes a raw header into a record field name.
///
/// Lower-cases, turns spaces and hyphens into underscores, drops `.`, `%`,
/// `(`, `)` and degree/ordinal signs, and folds Spanish accented vowels and
/// `ñ` to ASCII.
///
/// # Example
///
/// ```
/// use rotation_bridge::source::normalize_key;
///
/// assert_eq!(normalize_key("FECHA DE INGRESO"), "fecha_de_ingreso");
/// assert_eq!(normalize_key("Instalación"), "instalacion");
/// assert_eq!(normalize_key("N° Cta."), "n_cta");
/// ```
pub fn normalize_key(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' | '-' => Some('_'),
            '.' | '%' | '(' | ')' | '°' | 'º' => None,
            'á' => Some('a'),
            'é' => Some('e'),
            'í' => Some('i'),
            'ó' => Some('o'),
            'ú' | 'ü' => Some('u'),
            'ñ' => Some('n'),
            other => Some(other),
        })
        .collect()
}

/// Rewrites every key of a JSON object with [`normalize_key`].
///
/// When two raw keys normalize to the same name the later one wins.
pub fn normalize_keys(object: Map<String, Value>) -> Map<String, Value> {
    object
        .into_iter()
        .map(|(key, value)| (normalize_key(&key), value))
        .collect()
}
