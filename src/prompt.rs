//! Prompt template for the radio-host track intro.

/// Build the chat prompt for a just-played track.
///
/// Pure function: identical inputs always produce the identical string. The
/// wording is tuned for models that would otherwise pad the reply with
/// reasoning or stage directions.
pub fn build_prompt(artist: &str, track: &str) -> String {
    format!(
        "You are a radio host. Write a 60s (MAX) summary of the artist who just played, \
         going into their history, background etc, in a radio intermission style: '{artist}'. \
         Just played was '{track}'. Keep the style fun but concise, and only include the text. \
         Do not reason, just generate."
    )
}
