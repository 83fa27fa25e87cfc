use crate::collections::model::EntryMeta;

/// Rank other entries by shared tags, newest first among equals
pub fn related<'a>(
    all: &'a [EntryMeta],
    current_slug: &str,
    tags: &[String],
    limit: usize,
) -> Vec<&'a EntryMeta> {
    let mut scored: Vec<(usize, &EntryMeta)> = all
        .iter()
        .filter(|entry| entry.slug != current_slug)
        .map(|entry| {
            let shared = entry.tags.iter().filter(|tag| tags.contains(*tag)).count();
            (shared, entry)
        })
        .collect();

    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b
            .cmp(score_a)
            .then_with(|| b.date.cmp(&a.date))
            .then_with(|| a.slug.cmp(&b.slug))
    });

    scored.into_iter().take(limit).map(|(_, entry)| entry).collect()
}
