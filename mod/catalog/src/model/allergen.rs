/// The 14 regulated INCO allergen labels.
///
/// Products carry a subset of these; membership is not validated on the
/// way in, matching the spreadsheet heritage of the tables.
pub const INCO_ALLERGENS: [&str; 14] = [
    "Gluten",
    "Crustacés",
    "Œufs",
    "Poissons",
    "Arachides",
    "Soja",
    "Lait",
    "Fruits à coque",
    "Céleri",
    "Moutarde",
    "Sésame",
    "Anhydride sulfureux et sulfites",
    "Lupin",
    "Mollusques",
];

/// Split a `;`-joined allergen cell into trimmed, non-empty labels.
pub fn parse_allergens(cell: &str) -> Vec<String> {
    cell.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join allergen labels back into the `;`-separated CSV form.
pub fn join_allergens(allergens: &[String]) -> String {
    allergens.join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_drops_empty_items() {
        assert_eq!(
            parse_allergens(" Gluten ; Lait ;; Œufs "),
            vec!["Gluten".to_string(), "Lait".into(), "Œufs".into()]
        );
        assert!(parse_allergens("").is_empty());
        assert!(parse_allergens(" ; ").is_empty());
    }

    #[test]
    fn join_then_parse_restores_labels() {
        let labels = vec!["Gluten".to_string(), "Fruits à coque".into()];
        assert_eq!(parse_allergens(&join_allergens(&labels)), labels);
    }

    #[test]
    fn vocabulary_has_fourteen_entries() {
        assert_eq!(INCO_ALLERGENS.len(), 14);
    }
}
