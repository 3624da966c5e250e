//! Conflict resolution (§4.6): a destination claimed by more than one source
//! is dropped from the proposal set entirely, for every kind of pass.

use std::collections::HashMap;
use std::hash::Hash;

/// Drops every `(source, dest)` pair whose `dest` appears more than once.
#[must_use]
pub fn resolve<T: Copy + Eq + Hash>(proposals: Vec<(T, T)>) -> Vec<(T, T)> {
    let mut dest_counts: HashMap<T, usize> = HashMap::new();
    for &(_, dest) in &proposals {
        *dest_counts.entry(dest).or_default() += 1;
    }
    proposals.into_iter().filter(|(_, dest)| dest_counts[dest] == 1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_every_source_pointing_at_a_shared_destination() {
        let proposals = vec![(1, 100), (2, 100), (3, 200)];
        let resolved = resolve(proposals);
        assert_eq!(resolved, vec![(3, 200)]);
    }

    #[test]
    fn keeps_unambiguous_pairs() {
        let proposals = vec![(1, 10), (2, 20)];
        let resolved = resolve(proposals);
        assert_eq!(resolved.len(), 2);
    }
}
