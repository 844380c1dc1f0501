//! Ingredient text and the tags derived from it.
//!
//! The free text is the only stored state. Tags are recomputed from it on
//! every read, so they can never drift out of sync with what the user typed.

use log::debug;

use crate::voice::clean_transcript;

/// Separator used whenever tags are joined back into text
pub const TAG_SEPARATOR: &str = ", ";

/// Split ingredient text into tags: comma separated, trimmed, empty pieces dropped.
///
/// Order follows the text; duplicates are kept.
pub fn tags_from_text(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replace the current text with `new_raw` and derive its tags.
///
/// Any string is valid input.
pub fn apply_text(_current: &str, new_raw: &str) -> (String, Vec<String>) {
    (new_raw.to_string(), tags_from_text(new_raw))
}

/// Remove the tag at `index` and rebuild the canonical text from the rest.
///
/// # Panics
/// If `index` is out of range. Indices come from the displayed tags, so an
/// invalid one is a caller bug.
pub fn remove_tag(tags: &[String], index: usize) -> (Vec<String>, String) {
    assert!(
        index < tags.len(),
        "tag index {} out of range for {} tags",
        index,
        tags.len()
    );
    let remaining: Vec<String> = tags
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, tag)| tag.clone())
        .collect();
    let text = remaining.join(TAG_SEPARATOR);
    (remaining, text)
}

/// Append a spoken transcript to the existing ingredient text.
///
/// The transcript is cleaned first (see [`clean_transcript`]). An empty
/// transcript, or one with nothing left after cleaning, leaves the text as is.
pub fn ingest_voice_transcript(existing: &str, transcript: &str) -> String {
    let cleaned = clean_transcript(transcript);
    if cleaned.is_empty() {
        return existing.to_string();
    }
    if existing.is_empty() {
        cleaned
    } else {
        format!("{}{}{}", existing, TAG_SEPARATOR, cleaned)
    }
}

/// Ingredient input for one search session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientInput {
    text: String,
}

impl IngredientInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> Vec<String> {
        tags_from_text(&self.text)
    }

    /// Replace the whole text, as after a keystroke
    pub fn set_text(&mut self, raw: impl Into<String>) {
        self.text = raw.into();
    }

    /// Dismiss one tag chip. Panics on an out-of-range index, like [`remove_tag`].
    pub fn remove_tag(&mut self, index: usize) -> String {
        let tags = self.tags();
        let removed = tags[index].clone();
        let (_, text) = remove_tag(&tags, index);
        debug!("Removed ingredient tag '{}'", removed);
        self.text = text;
        removed
    }

    pub fn append_transcript(&mut self, transcript: &str) {
        self.text = ingest_voice_transcript(&self.text, transcript);
        debug!("Ingredient text after voice input: {}", self.text);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_apply_text_splits_and_trims() {
        let (text, tags) = apply_text("", " chicken ,rice,, tomatoes , ");
        assert_eq!(text, " chicken ,rice,, tomatoes , ");
        assert_eq!(tags, strings(&["chicken", "rice", "tomatoes"]));
    }

    #[test]
    fn test_apply_text_blank_has_no_tags() {
        assert!(apply_text("chicken", "").1.is_empty());
        assert!(apply_text("chicken", "   ").1.is_empty());
        assert!(apply_text("", ", ,").1.is_empty());
    }

    #[test]
    fn test_apply_text_keeps_duplicates_and_order() {
        let (_, tags) = apply_text("", "rice, egg, rice");
        assert_eq!(tags, strings(&["rice", "egg", "rice"]));
    }

    #[test]
    fn test_remove_tag_rejoins() {
        let (tags, text) = remove_tag(&strings(&["a", "b", "c"]), 1);
        assert_eq!(tags, strings(&["a", "c"]));
        assert_eq!(text, "a, c");
        assert_eq!(tags_from_text(&text), tags);
    }

    #[test]
    fn test_remove_first_tag_after_apply() {
        let (_, tags) = apply_text("", "a, b, c");
        let (tags, text) = remove_tag(&tags, 0);
        assert_eq!(tags, strings(&["b", "c"]));
        assert_eq!(text, "b, c");
    }

    #[test]
    fn test_remove_last_remaining_tag() {
        let (tags, text) = remove_tag(&strings(&["only"]), 0);
        assert!(tags.is_empty());
        assert_eq!(text, "");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_remove_tag_out_of_range_panics() {
        remove_tag(&strings(&["a"]), 1);
    }

    #[test]
    fn test_ingest_voice_into_empty_text() {
        assert_eq!(
            ingest_voice_transcript("", "chicken and rice with garlic"),
            "chicken, rice, garlic"
        );
    }

    #[test]
    fn test_ingest_voice_appends() {
        assert_eq!(
            ingest_voice_transcript("tomatoes", "Spinach and Paneer"),
            "tomatoes, spinach, paneer"
        );
    }

    #[test]
    fn test_ingest_empty_transcript_is_noop() {
        assert_eq!(ingest_voice_transcript("tomatoes", ""), "tomatoes");
        assert_eq!(ingest_voice_transcript("tomatoes", "an of"), "tomatoes");
    }

    #[test]
    fn test_input_lifecycle() {
        let mut input = IngredientInput::new();
        assert!(input.is_empty());

        input.set_text("chicken, rice");
        input.append_transcript("red bell pepper");
        assert_eq!(input.text(), "chicken, rice, red, bell, pepper");
        assert_eq!(input.tags().len(), 5);

        assert_eq!(input.remove_tag(2), "red");
        assert_eq!(input.text(), "chicken, rice, bell, pepper");

        input.clear();
        assert!(input.tags().is_empty());
        assert_eq!(input.text(), "");
    }
}
