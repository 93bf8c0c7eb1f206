use crate::derive::{DerivedView, derive_view};
use crate::params::ViewParameters;
use pokedex_types::Entity;

/// Recomputes the derived view only when its inputs change.
///
/// The catalog is identified by a version number its owner bumps on every
/// replacement; parameters are compared by value. A hit returns the stored
/// view untouched, a miss recomputes from stage 1.
#[derive(Debug, Default)]
pub struct ViewMemo {
    key: Option<(u64, ViewParameters)>,
    view: DerivedView,
    recomputations: usize,
}

impl ViewMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &mut self,
        catalog_version: u64,
        entities: &[Entity],
        params: &ViewParameters,
    ) -> &DerivedView {
        let stale = match &self.key {
            Some((version, cached)) => *version != catalog_version || cached != params,
            None => true,
        };

        if stale {
            self.view = derive_view(entities, params);
            self.key = Some((catalog_version, params.clone()));
            self.recomputations += 1;
        }

        &self.view
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
