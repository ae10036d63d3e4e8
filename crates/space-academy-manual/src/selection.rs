#![forbid(unsafe_code)]

//! Selection controller.
//!
//! Exactly one section is selected at any time. The states are the registry
//! keys, the initial state is the registry's default section, and every
//! transition is "the user picked section X". Re-selecting the active
//! section is a no-op.

use crate::registry::{ContentRegistry, SectionId};

/// The currently expanded section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    current: SectionId,
}

impl Selection {
    /// Start at `initial`.
    pub const fn new(initial: SectionId) -> Self {
        Self { current: initial }
    }

    /// Start at the registry's default section.
    pub fn for_registry(registry: &ContentRegistry) -> Self {
        Self::new(registry.default_section())
    }

    /// Select `id`. Returns `true` when the selection changed.
    pub fn select(&mut self, id: SectionId) -> bool {
        let changed = self.current != id;
        self.current = id;
        changed
    }

    /// The selected section.
    pub const fn current(&self) -> SectionId {
        self.current
    }

    /// Whether the tile for `id` shows its body.
    pub fn is_expanded(&self, id: SectionId) -> bool {
        self.current == id
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(SectionId::Intro)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_registry_default() {
        let registry = ContentRegistry::standard();
        let selection = Selection::for_registry(&registry);
        assert_eq!(selection.current(), SectionId::Intro);
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn select_reports_change() {
        let mut selection = Selection::default();
        assert!(selection.select(SectionId::Brain));
        assert_eq!(selection.current(), SectionId::Brain);
        assert!(!selection.select(SectionId::Brain), "re-selection is idempotent");
        assert_eq!(selection.current(), SectionId::Brain);
    }

    #[test]
    fn exactly_one_expanded_after_each_select() {
        let mut selection = Selection::default();
        for id in SectionId::ALL.into_iter().rev() {
            selection.select(id);
            let expanded: Vec<_> = SectionId::ALL
                .into_iter()
                .filter(|&s| selection.is_expanded(s))
                .collect();
            assert_eq!(expanded, vec![id]);
        }
    }

    #[test]
    fn every_state_reachable_from_every_state() {
        for from in SectionId::ALL {
            for to in SectionId::ALL {
                let mut selection = Selection::new(from);
                selection.select(to);
                assert_eq!(selection.current(), to);
            }
        }
    }
}
