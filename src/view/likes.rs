use crate::model::LikedRecipe;
use crate::view::search::{limit_title, TITLE_LIMIT};

pub fn like_button(is_liked: bool) -> String {
    if is_liked {
        "[like] liked".to_string()
    } else {
        "[like] not liked".to_string()
    }
}

/// Menu header; hidden (empty) when nothing is liked
pub fn likes_menu(num_likes: usize) -> String {
    if num_likes == 0 {
        String::new()
    } else {
        format!("Likes ({num_likes})")
    }
}

pub fn render_like(like: &LikedRecipe) -> String {
    format!(
        "  [{}] {} | {}",
        like.id,
        limit_title(&like.title, TITLE_LIMIT),
        like.author
    )
}

pub fn render_likes(likes: &[LikedRecipe]) -> String {
    if likes.is_empty() {
        return "No liked recipes yet.".to_string();
    }
    likes.iter().map(render_like).collect::<Vec<_>>().join("\n")
}
