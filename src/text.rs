//! Preview truncation for scene text.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

/// Preview length used by the scene review panel.
pub const REVIEW_PREVIEW_LEN: usize = 150;
/// Preview length used by the storyboard grid.
pub const GRID_PREVIEW_LEN: usize = 100;
/// Marker appended to clipped previews.
pub const ELLIPSIS: &str = "...";

/// Clips `text` to `max_len` grapheme clusters, appending [`ELLIPSIS`].
///
/// Text at or below the limit is returned borrowed and unchanged.
pub fn truncate_preview(text: &str, max_len: usize) -> Cow<'_, str> {
    match text.grapheme_indices(true).nth(max_len) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => {
            let mut clipped = String::with_capacity(cut + ELLIPSIS.len());
            clipped.push_str(&text[..cut]);
            clipped.push_str(ELLIPSIS);
            Cow::Owned(clipped)
        }
    }
}

/// Number of grapheme clusters in `text`, the unit used by [`truncate_preview`].
pub fn display_len(text: &str) -> usize {
    text.graphemes(true).count()
}
