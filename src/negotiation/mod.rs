use tracing::trace;

/// Lowercases a language tag and folds `_` separators to `-`, so that
/// `pt_BR`, `pt-br` and `PT-BR` all compare equal.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_ascii_lowercase().replace('_', "-")
}

/// Picks the best available language for a client's preference list.
///
/// Preference order wins over availability order: for each preferred tag,
/// an exact match is taken first, then a match on the primary subtag
/// (`en-us` falls back to an available `en`). A bare preferred `en` does
/// not widen to an available `en-us`; only client tags broaden.
#[derive(Debug, Clone, Copy, Default)]
pub struct Negotiator;

impl Negotiator {
    pub fn new() -> Self {
        Self
    }

    pub fn negotiate(&self, preferred: &[String], available: &[String]) -> Option<String> {
        let normalized: Vec<(String, &String)> = available
            .iter()
            .map(|lang| (normalize_tag(lang), lang))
            .collect();

        for tag in preferred {
            let tag = normalize_tag(tag);

            if let Some((_, lang)) = normalized.iter().find(|(norm, _)| *norm == tag) {
                trace!(language = %lang, "exact language match");
                return Some((*lang).clone());
            }

            if let Some(primary) = tag.split('-').next() {
                if primary != tag {
                    if let Some((_, lang)) = normalized.iter().find(|(norm, _)| norm == primary) {
                        trace!(language = %lang, preferred = %tag, "primary subtag match");
                        return Some((*lang).clone());
                    }
                }
            }
        }

        None
    }
}
