use crate::model::{IngredientLine, Recipe};
use crate::view::likes::like_button;

/// Largest denominator tried when showing a count as a fraction
const MAX_DENOMINATOR: u32 = 16;

/// Shows a count as a whole number or mixed fraction ("2 1/2", "1/3"),
/// and "?" when there is none.
pub fn format_count(count: Option<f64>) -> String {
    let Some(count) = count.filter(|c| c.is_finite()) else {
        return "?".to_string();
    };
    let count = (count * 10_000.0).round() / 10_000.0;
    let mut whole = count.trunc();
    let frac = count - whole;

    if frac.abs() < 1e-4 {
        return format!("{}", whole);
    }

    for den in 2..=MAX_DENOMINATOR {
        let num = (frac * f64::from(den)).round();
        if (num / f64::from(den) - frac).abs() >= 1e-3 {
            continue;
        }
        if num == 0.0 {
            return format!("{}", whole);
        }
        if num == f64::from(den) {
            whole += 1.0;
            return format!("{}", whole);
        }
        return if whole == 0.0 {
            format!("{}/{}", num, den)
        } else {
            format!("{} {}/{}", whole, num, den)
        };
    }

    let decimal = format!("{:.2}", count);
    decimal.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn render_ingredient(ing: &IngredientLine) -> String {
    let mut line = format!("  - {}", format_count(ing.count));
    if !ing.unit.is_empty() {
        line.push(' ');
        line.push_str(&ing.unit);
    }
    if !ing.ingredient.is_empty() {
        line.push(' ');
        line.push_str(&ing.ingredient);
    }
    line
}

/// Servings line plus the scaled ingredient list
pub fn render_servings(recipe: &Recipe) -> String {
    let mut out = format!("{} servings    [dec] [inc]\n", recipe.servings);
    for ing in &recipe.ingredients {
        out.push_str(&render_ingredient(ing));
        out.push('\n');
    }
    out
}

pub fn render_recipe(recipe: &Recipe, is_liked: bool) -> String {
    let mut out = format!("{} [{}]\n", recipe.title, recipe.id);
    out.push_str(&format!(
        "{} minutes    {}\n",
        recipe.time,
        like_button(is_liked)
    ));
    out.push_str(&render_servings(recipe));
    out.push_str("[add] to shopping list\n");
    out.push_str(&format!(
        "This recipe was carefully designed and tested by {}. Directions: {}",
        recipe.author, recipe.url
    ));
    out
}
