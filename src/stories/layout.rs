//! Image/text placement alternation.

use super::Story;

/// Assigns `image_first` so that stories with photos alternate sides.
///
/// The first story with a photo gets `image_first = true`, the next one
/// `false`, and so on. Stories without a photo are always `false` and do not
/// advance the alternation.
///
/// # Examples
///
/// ```
/// use storyfeed::stories::{Story, assign_image_positions};
///
/// let stories = assign_image_positions(vec![
///     Story::new("a", "x").with_image("/a.png"),
///     Story::new("b", "y"),
///     Story::new("c", "z").with_image("/c.png"),
/// ]);
///
/// let flags: Vec<bool> = stories.iter().map(|s| s.image_first).collect();
/// assert_eq!(flags, vec![true, false, false]);
/// ```
#[must_use]
pub fn assign_image_positions(mut stories: Vec<Story>) -> Vec<Story> {
    let mut previous_image_first = false;

    for story in &mut stories {
        if story.has_image() {
            story.image_first = !previous_image_first;
            previous_image_first = story.image_first;
        } else {
            story.image_first = false;
        }
    }

    stories
}
