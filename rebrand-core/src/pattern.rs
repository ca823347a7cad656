/// Result of a literal substitution that changed something
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub content: String,
    pub count: usize,
}

/// Replace every non-overlapping occurrence of `search` in `content`.
///
/// Matching is exact and case-sensitive. After each match the scan resumes
/// right after the matched region, so text coming from `replace` is never
/// matched again. Returns `None` when `search` does not occur (or is empty).
pub fn replace_literal(content: &str, search: &str, replace: &str) -> Option<Replacement> {
    if search.is_empty() {
        return None;
    }

    let mut result = String::with_capacity(content.len());
    let mut last_end = 0;
    let mut count = 0;

    for (start, matched) in content.match_indices(search) {
        result.push_str(&content[last_end..start]);
        result.push_str(replace);
        last_end = start + matched.len();
        count += 1;
    }

    if count == 0 {
        return None;
    }

    result.push_str(&content[last_end..]);
    Some(Replacement {
        content: result,
        count,
    })
}
