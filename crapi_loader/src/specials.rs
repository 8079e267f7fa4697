/* Category membership lists (`<category>_special` files) */

use std::collections::BTreeSet;

/* File name holding the members of a category, e.g. "unpacker" -> "unpacker_special" */
pub fn specials_file_name(category: &str) -> String {
    format!("{}_special", category)
}

/* Parse a specials list: each trimmed line is one function name, `#` comments and
 * blank lines skipped. The result is deduplicated and sorted alphabetically. */
pub fn parse_specials(source: &str) -> BTreeSet<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty() && !name.starts_with('#'))
        .map(str::to_string)
        .collect()
}
