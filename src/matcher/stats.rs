//! End-of-run match statistics (§6): matched/total counts for every real
//! class, method, and field — synthetic shared classes are self-matched by
//! construction and excluded so they don't inflate the ratio.

use crate::model::{Side, World};

/// Matched-vs-total counts for classes, methods, and fields across a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchStats {
    /// Real classes in `A` matched to a real class in `B`.
    pub classes_matched: usize,
    /// Real classes in `A`.
    pub classes_total: usize,
    /// Real methods in `A` matched to a real method in `B`.
    pub methods_matched: usize,
    /// Real methods in `A`.
    pub methods_total: usize,
    /// Real fields in `A` matched to a real field in `B`.
    pub fields_matched: usize,
    /// Real fields in `A`.
    pub fields_total: usize,
}

impl MatchStats {
    /// Tallies the current match state of `world`.
    #[must_use]
    pub fn collect(world: &World) -> Self {
        let mut stats = Self {
            classes_matched: 0,
            classes_total: 0,
            methods_matched: 0,
            methods_total: 0,
            fields_matched: 0,
            fields_total: 0,
        };

        for class in world.classes_on(Side::A).filter(|c| !c.is_shared_synthetic()) {
            stats.classes_total += 1;
            if class.match_cell().get().is_some() {
                stats.classes_matched += 1;
            }
            for &method in class.methods() {
                stats.methods_total += 1;
                if world.method(method).match_cell().get().is_some() {
                    stats.methods_matched += 1;
                }
            }
            for &field in class.fields() {
                stats.fields_total += 1;
                if world.field(field).match_cell().get().is_some() {
                    stats.fields_matched += 1;
                }
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Class, ClassAccessFlags};

    #[test]
    fn collect_counts_matched_and_total_classes() {
        let mut world = World::new();
        let a = world.push_class(|id| Class::new(id, Side::A, "A".to_owned(), ClassAccessFlags::PUBLIC));
        world.push_class(|id| Class::new(id, Side::A, "B".to_owned(), ClassAccessFlags::PUBLIC));
        let matched_b = world.push_class(|id| Class::new(id, Side::B, "A".to_owned(), ClassAccessFlags::PUBLIC));
        world.match_classes(a, matched_b);

        let stats = MatchStats::collect(&world);
        assert_eq!(stats.classes_total, 2);
        assert_eq!(stats.classes_matched, 1);
    }
}
