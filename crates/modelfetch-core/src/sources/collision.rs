//! Detection of source entries that map to the same local file.

use std::collections::HashMap;

use super::SourceEntry;

/// A group of source entries whose filenames are equal, ignoring ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// Filename of the first entry in the group.
    pub filename: String,
    /// Positions in the source list, ascending.
    pub indices: Vec<usize>,
    /// No two names in the group are byte-equal; they only clash on case-insensitive filesystems.
    pub case_only: bool,
    /// The same URL is listed more than once.
    pub duplicate_url: bool,
}

/// Finds every group of entries sharing a filename (case-insensitively), in order of first appearance.
pub fn filename_collisions(entries: &[SourceEntry]) -> Vec<Collision> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, e) in entries.iter().enumerate() {
        let key = e.filename.to_ascii_lowercase();
        groups
            .entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(i);
    }

    order
        .into_iter()
        .filter_map(|key| {
            let indices = groups.remove(&key)?;
            if indices.len() < 2 {
                return None;
            }
            let members: Vec<&SourceEntry> = indices.iter().map(|&i| &entries[i]).collect();
            let case_only = !any_pair(&members, |x, y| x.filename == y.filename);
            let duplicate_url = any_pair(&members, |x, y| x.url == y.url);
            Some(Collision {
                filename: members[0].filename.clone(),
                indices,
                case_only,
                duplicate_url,
            })
        })
        .collect()
}

fn any_pair(members: &[&SourceEntry], same: impl Fn(&SourceEntry, &SourceEntry) -> bool) -> bool {
    members
        .iter()
        .enumerate()
        .any(|(a, x)| members[a + 1..].iter().any(|y| same(*x, *y)))
}
