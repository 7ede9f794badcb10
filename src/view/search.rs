use crate::model::RecipeSummary;

/// Titles longer than this are cut at a word boundary
pub const TITLE_LIMIT: usize = 17;

/// Shortens `title` to the words that fit in `limit` characters, followed by " ...".
pub fn limit_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }

    let mut kept = Vec::new();
    let mut acc = 0;
    for word in title.split(' ') {
        let len = word.chars().count();
        if acc + len <= limit {
            kept.push(word);
        }
        acc += len;
    }
    format!("{} ...", kept.join(" "))
}

fn render_result(recipe: &RecipeSummary, selected: bool) -> String {
    let marker = if selected { '>' } else { ' ' };
    format!(
        "{} [{}] {} | {}",
        marker,
        recipe.id,
        limit_title(&recipe.title, TITLE_LIMIT),
        recipe.author
    )
}

/// Renders one page worth of results, marking the selected recipe.
pub fn render_results(results: &[RecipeSummary], selected: Option<&str>) -> String {
    if results.is_empty() {
        return "No recipes found.".to_string();
    }
    results
        .iter()
        .map(|r| render_result(r, selected == Some(r.id.as_str())))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Previous/next buttons for `page` out of `num_pages`.
pub fn render_buttons(page: usize, num_pages: usize) -> String {
    let prev = format!("<< page {}", page.saturating_sub(1));
    let next = format!("page {} >>", page + 1);

    if num_pages <= 1 {
        String::new()
    } else if page <= 1 {
        next
    } else if page < num_pages {
        format!("{prev}    {next}")
    } else {
        prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, title: &str) -> RecipeSummary {
        RecipeSummary {
            id: id.to_string(),
            title: title.to_string(),
            author: "Closet Cooking".to_string(),
            img: String::new(),
        }
    }

    #[test]
    fn test_limit_title() {
        assert_eq!(limit_title("Pizza Dip", TITLE_LIMIT), "Pizza Dip");
        assert_eq!(
            limit_title("Pasta with tomato and spinach", TITLE_LIMIT),
            "Pasta with tomato ..."
        );
        assert_eq!(limit_title("Supercalifragilistic pie", 5), " ...");
    }

    #[test]
    fn test_render_results_marks_selection() {
        let results = vec![summary("1", "Pizza Dip"), summary("2", "Pizza Dough")];
        let out = render_results(&results, Some("2"));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "  [1] Pizza Dip | Closet Cooking");
        assert_eq!(lines[1], "> [2] Pizza Dough | Closet Cooking");
        assert_eq!(render_results(&[], None), "No recipes found.");
    }

    #[test]
    fn test_render_buttons() {
        assert_eq!(render_buttons(1, 1), "");
        assert_eq!(render_buttons(1, 3), "page 2 >>");
        assert_eq!(render_buttons(2, 3), "<< page 1    page 3 >>");
        assert_eq!(render_buttons(3, 3), "<< page 2");
    }
}
