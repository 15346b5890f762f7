/// A single (ingredient name, measurement) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measurement: String,
}

/// Encode ingredient pairs into the persisted column format.
/// Pairs are separated by `;`, name and measurement by `:`.
pub fn encode_ingredients(ingredients: &[Ingredient]) -> String {
    ingredients
        .iter()
        .map(|i| format!("{}:{}", i.name, i.measurement))
        .collect::<Vec<_>>()
        .join(";")
}

/// Decode the persisted column format back into ordered pairs.
///
/// Blank or whitespace-only input decodes to the empty list. A pair
/// with no `:` decodes with an empty measurement. Empty pair segments
/// (e.g. from a trailing `;`) are skipped.
pub fn decode_ingredients(encoded: &str) -> Vec<Ingredient> {
    if encoded.trim().is_empty() {
        return Vec::new();
    }

    encoded
        .split(';')
        .filter_map(|pair| {
            let pair = pair.trim();
            if pair.is_empty() {
                return None;
            }

            let (name, measurement) = match pair.split_once(':') {
                Some((name, measurement)) => (name.trim(), measurement.trim()),
                None => (pair, ""),
            };

            Some(Ingredient {
                name: name.to_string(),
                measurement: measurement.to_string(),
            })
        })
        .collect()
}
