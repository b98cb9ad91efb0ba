//! Reference list detection.

/// Return the non-empty paragraphs that follow the reference list heading.
///
/// The heading is the first paragraph whose lower-cased, trimmed text
/// contains one of `keywords`. The heading itself is excluded, and every
/// non-empty paragraph after it counts as one entry. When no heading is
/// found the result is empty.
pub fn locate_reference_list<S: AsRef<str>>(
    paragraphs: &[String],
    keywords: &[S],
) -> Vec<String> {
    let heading = paragraphs.iter().position(|p| is_heading(p, keywords));

    let Some(heading) = heading else {
        log::debug!("No paragraph matches a reference list heading keyword");
        return Vec::new();
    };

    log::info!(
        "Reference list heading at paragraph {}: {:?}",
        heading,
        paragraphs[heading].trim()
    );

    paragraphs[heading + 1..]
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_heading<S: AsRef<str>>(paragraph: &str, keywords: &[S]) -> bool {
    let lower = paragraph.trim().to_lowercase();
    keywords.iter().any(|kw| {
        let kw = kw.as_ref();
        !kw.is_empty() && lower.contains(kw)
    })
}
