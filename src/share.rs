use crate::model::SavedRecipe;

/// Which collection a shared recipe lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareKind {
    Favorite,
    Custom,
}

impl ShareKind {
    fn path_segment(&self) -> &'static str {
        match self {
            ShareKind::Favorite => "favorite",
            ShareKind::Custom => "custom",
        }
    }
}

/// Public link for a saved recipe, or `None` if the backend gave it no share token
pub fn share_link(origin: &str, kind: ShareKind, recipe: &SavedRecipe) -> Option<String> {
    let token = recipe.share_token.as_deref().filter(|t| !t.is_empty())?;
    Some(format!(
        "{}/recipe/{}/{}",
        origin.trim_end_matches('/'),
        kind.path_segment(),
        token
    ))
}
