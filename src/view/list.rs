use crate::model::ShoppingListItem;
use crate::view::recipe::format_count;

pub fn render_item(item: &ShoppingListItem) -> String {
    let mut line = format!("  [{}] {}", item.id, format_count(Some(item.count)));
    if !item.unit.is_empty() {
        line.push(' ');
        line.push_str(&item.unit);
    }
    line.push(' ');
    line.push_str(&item.ingredient);
    line
}

pub fn render_buttons() -> String {
    "[empty] the list    [new] item".to_string()
}

pub fn render_list(items: &[ShoppingListItem]) -> String {
    if items.is_empty() {
        return "Shopping list is empty.".to_string();
    }
    items.iter().map(render_item).collect::<Vec<_>>().join("\n")
}
