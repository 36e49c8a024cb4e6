use crate::node::NodeKind;
use crc32fast::Hasher;

/// Derive an id seed from an arbitrary string using CRC32
pub fn get_seed(source: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(source.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Lowercase a display name and join its words with hyphens
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Sequential id generator for nodes and pages.
///
/// Ids look like `<prefix>-<seed>-<n>`. A generator never hands out the same
/// id twice; generators with different seeds never collide.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u64,
}

impl IdGenerator {
    pub fn new(source: &str) -> Self {
        Self::from_seed(get_seed(source))
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Seed from the wall clock, once. Ids produced afterwards are fixed values.
    pub fn from_clock() -> Self {
        let now = chrono::Utc::now();
        Self::new(&format!(
            "{}-{}",
            now.timestamp_millis(),
            now.timestamp_subsec_nanos()
        ))
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Generate the next node id
    pub fn new_id(&mut self, kind: NodeKind) -> String {
        self.next_with_prefix(&kind.slug())
    }

    /// Generate the next page id from the page's display name
    pub fn new_page_id(&mut self, page_name: &str) -> String {
        let slug = slugify(page_name);
        self.next_with_prefix(if slug.is_empty() { "page" } else { &slug })
    }

    /// Skip past counters already used by ids carrying this generator's seed
    pub fn reserve<'a>(&mut self, existing: impl IntoIterator<Item = &'a str>) {
        let marker = format!("-{}-", self.seed);
        for id in existing {
            let Some(pos) = id.rfind(&marker) else {
                continue;
            };
            if let Ok(n) = id[pos + marker.len()..].parse::<u64>() {
                self.count = self.count.max(n);
            }
        }
    }

    fn next_with_prefix(&mut self, prefix: &str) -> String {
        self.count += 1;
        format!("{}-{}-{}", prefix, self.seed, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_stable() {
        assert_eq!(get_seed("session-a"), get_seed("session-a"));
        assert_ne!(get_seed("session-a"), get_seed("session-b"));
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = IdGenerator::new("test");

        let first = ids.new_id(NodeKind::Text);
        let second = ids.new_id(NodeKind::ProgressBar);

        assert!(first.starts_with("text-"));
        assert!(first.ends_with("-1"));
        assert!(second.starts_with("progress-bar-"));
        assert!(second.ends_with("-2"));
        assert!(first.contains(ids.seed()));
    }

    #[test]
    fn test_reserve_skips_used_counters() {
        let mut ids = IdGenerator::new("test");
        let seed = ids.seed().to_string();
        let used = format!("text-{}-41", seed);

        ids.reserve([used.as_str(), "button-other-99"]);

        assert!(ids.new_id(NodeKind::Text).ends_with("-42"));
    }

    #[test]
    fn test_page_ids_use_slugged_names() {
        let mut ids = IdGenerator::new("test");
        assert!(ids.new_page_id("About Us").starts_with("about-us-"));
        assert!(ids.new_page_id("   ").starts_with("page-"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Contact  Us"), "contact-us");
        assert_eq!(slugify(""), "");
    }
}
