pub const LOADER: &str = "Loading...";

pub const SEARCH_FAILED: &str = "Something went wrong with the search.";
pub const RECIPE_FAILED: &str = "Error processing recipe!";
pub const NO_RECIPE: &str = "Open a recipe first.";
pub const NO_SEARCH: &str = "Search for recipes first.";
pub const SAVE_FAILED: &str = "Could not save your liked recipes.";
pub const INVALID_QUANTITY: &str = "Please enter a positive quantity.";

pub const HELP: &str = "\
Commands:
  search <query>     search recipes
  page <n>           show page n of the results
  open <id>          open a recipe
  inc | dec          change servings
  add                add the recipe's ingredients to the shopping list
  like               like or unlike the open recipe
  list               show the shopping list
  count <id> <n>     change the quantity of a list item
  del <id>           remove a list item
  new                add an item to the list by hand
  empty              empty the shopping list
  likes              show liked recipes
  help               show this help
  quit               leave";
