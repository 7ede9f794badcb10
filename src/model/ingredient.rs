//! Best-effort parsing of free-text ingredient lines into quantity, unit and name.

use serde::{Deserialize, Serialize};

/// Long unit spellings and the short form they normalize to
const UNIT_ALIASES: &[(&str, &str)] = &[
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("tbsps", "tbsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("tsps", "tsp"),
    ("cups", "cup"),
    ("pounds", "pound"),
];

const UNITS: &[&str] = &["tbsp", "oz", "tsp", "cup", "pound", "kg", "g"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Absent when the line carries no recognizable quantity
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

impl IngredientLine {
    fn unparsed(text: String) -> Self {
        Self {
            count: None,
            unit: String::new(),
            ingredient: text,
        }
    }
}

pub fn parse_ingredients<S: AsRef<str>>(raw_lines: &[S]) -> Vec<IngredientLine> {
    raw_lines.iter().map(|line| parse_line(line.as_ref())).collect()
}

pub fn parse_line(raw: &str) -> IngredientLine {
    let cleaned = strip_annotations(&raw.to_lowercase());
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let unit_index = tokens.iter().position(|t| normalize_unit(t).is_some());

    // "<quantity...> <unit> <name...>"
    if let Some(i) = unit_index.filter(|i| *i > 0) {
        if let Some(count) = parse_quantity(&tokens[..i]) {
            return IngredientLine {
                count: Some(count),
                unit: normalize_unit(tokens[i]).unwrap_or_default().to_string(),
                ingredient: tokens[i + 1..].join(" "),
            };
        }
    }

    // "<quantity...> <name...>" without a known unit
    let numeric_prefix = tokens
        .iter()
        .take(2)
        .take_while(|t| parse_token(t).is_some())
        .count();
    if numeric_prefix > 0 {
        if let Some(count) = parse_quantity(&tokens[..numeric_prefix]) {
            return IngredientLine {
                count: Some(count),
                unit: String::new(),
                ingredient: tokens[numeric_prefix..].join(" "),
            };
        }
    }

    IngredientLine::unparsed(tokens.join(" "))
}

/// Removes `(...)` and `[...]` annotations, including nested ones.
fn strip_annotations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' | '[' => {
                depth += 1;
                out.push(' ');
            }
            ')' | ']' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

fn normalize_unit(token: &str) -> Option<&'static str> {
    let token = token.trim_end_matches([',', '.', ';']);
    UNIT_ALIASES
        .iter()
        .find(|(long, _)| *long == token)
        .map(|(_, short)| *short)
        .or_else(|| UNITS.iter().find(|u| **u == token).copied())
}

/// Sums the quantity tokens, so "4 1/2" becomes 4.5.
fn parse_quantity(tokens: &[&str]) -> Option<f64> {
    if tokens.is_empty() || tokens.len() > 2 {
        return None;
    }
    tokens.iter().map(|t| parse_token(t)).sum()
}

/// Parses "2", "0.5", "1/2", "1-2" (range, averaged) and "1-1/2" (mixed number).
fn parse_token(token: &str) -> Option<f64> {
    if let Some((left, right)) = token.split_once('-') {
        let low = parse_number(left)?;
        let high = parse_number(right)?;
        if right.contains('/') && !left.contains('/') {
            return Some(low + high);
        }
        return Some((low + high) / 2.0);
    }
    parse_number(token)
}

fn parse_number(token: &str) -> Option<f64> {
    if let Some((num, den)) = token.split_once('/') {
        let num = parse_decimal(num)?;
        let den = parse_decimal(den)?;
        if den == 0.0 {
            return None;
        }
        return Some(num / den);
    }
    parse_decimal(token)
}

fn parse_decimal(token: &str) -> Option<f64> {
    let valid = !token.is_empty()
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.chars().any(|c| c.is_ascii_digit());
    if !valid {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(count: Option<f64>, unit: &str, ingredient: &str) -> IngredientLine {
        IngredientLine {
            count,
            unit: unit.to_string(),
            ingredient: ingredient.to_string(),
        }
    }

    #[test]
    fn test_count_unit_and_name() {
        assert_eq!(
            parse_line("2 tbsp olive oil"),
            line(Some(2.0), "tbsp", "olive oil")
        );
    }

    #[test]
    fn test_unparseable_line() {
        assert_eq!(
            parse_line("salt to taste"),
            line(None, "", "salt to taste")
        );
        assert_eq!(
            parse_line("a pinch of salt"),
            line(None, "", "a pinch of salt")
        );
    }

    #[test]
    fn test_unit_aliases_are_normalized() {
        assert_eq!(
            parse_line("3 Tablespoons Butter"),
            line(Some(3.0), "tbsp", "butter")
        );
        assert_eq!(parse_line("2 tbsps sugar").unit, "tbsp");
        assert_eq!(parse_line("1 teaspoon salt").unit, "tsp");
        assert_eq!(parse_line("8 ounces cheese").unit, "oz");
        assert_eq!(parse_line("2 cups, sifted flour").unit, "cup");
    }

    #[test]
    fn test_unit_words_inside_names_are_left_alone() {
        // whole-token matching: "eggs" must not be read as "g"
        assert_eq!(parse_line("2 eggs"), line(Some(2.0), "", "eggs"));
        assert_eq!(
            parse_line("1 cupcake liner"),
            line(Some(1.0), "", "cupcake liner")
        );
    }

    #[test]
    fn test_fractions_ranges_and_mixed_numbers() {
        assert_eq!(parse_line("1/2 cup milk").count, Some(0.5));
        assert_eq!(parse_line("1-2 tsp chili flakes").count, Some(1.5));
        assert_eq!(parse_line("4 1/2 cups flour").count, Some(4.5));
        assert_eq!(parse_line("1-1/2 cups water").count, Some(1.5));
        assert_eq!(parse_line("0.25 kg rice"), line(Some(0.25), "kg", "rice"));
    }

    #[test]
    fn test_annotations_are_stripped() {
        assert_eq!(
            parse_line("4 1/2 cups (20.25 ounces) unbleached high-gluten flour"),
            line(Some(4.5), "cup", "unbleached high-gluten flour")
        );
        assert_eq!(
            parse_line("1 [heaping] tsp (about 5 g) salt"),
            line(Some(1.0), "tsp", "salt")
        );
    }

    #[test]
    fn test_unit_without_quantity_is_unparsed() {
        assert_eq!(
            parse_line("Cup of sugar"),
            line(None, "", "cup of sugar")
        );
    }

    #[test]
    fn test_bad_fraction_and_empty_line() {
        assert_eq!(parse_line("1/0 cup water").count, None);
        assert_eq!(parse_line("   "), line(None, "", ""));
    }

    #[test]
    fn test_parse_ingredients_keeps_order() {
        let parsed = parse_ingredients(&["2 eggs", "1 cup flour"]);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].ingredient, "eggs");
        assert_eq!(parsed[1].unit, "cup");
    }
}
