use crate::text::{pick, title_case, tokenize};
use crate::PostInput;

/// Merges user-supplied, topic-derived, and audience-derived tags into a
/// deduplicated, deterministically ordered list capped at `desired_count`.
pub fn build_hashtags(input: &PostInput, seed: u32, desired_count: usize) -> Vec<String> {
    let user_tags = tokenize(&input.hashtags)
        .iter()
        .map(|tag| title_case(&tag.replacen('#', "", 1)))
        .collect::<Vec<_>>();
    let topic_tags = tokenize(&input.topic)
        .iter()
        .take(3)
        .map(|token| title_case(token))
        .collect::<Vec<_>>();
    let audience_tags = tokenize(&input.audience)
        .iter()
        .take(2)
        .map(|token| title_case(token))
        .collect::<Vec<_>>();

    let mut pool: Vec<String> = Vec::new();
    for tag in user_tags
        .into_iter()
        .chain(topic_tags)
        .chain(audience_tags)
    {
        if !tag.is_empty() && !pool.contains(&tag) {
            pool.push(tag);
        }
    }

    if pool.is_empty() {
        return Vec::new();
    }

    let target = pool.len().min(desired_count);
    let mut tags: Vec<String> = Vec::new();
    let mut local_seed = seed;
    while tags.len() < target {
        if let Ok(candidate) = pick(&pool, local_seed) {
            if !tags.contains(candidate) {
                tags.push(candidate.clone());
            }
        }
        local_seed += 13;
        // Safety bound against a non-terminating pick loop.
        if local_seed > 1_000_000 {
            break;
        }
    }

    tags.iter()
        .map(|tag| format!("#{}", tag.split_whitespace().collect::<String>()))
        .collect()
}
