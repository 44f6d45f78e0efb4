use std::collections::HashMap;
use std::sync::Arc;

use crate::PrefixCheck;

/// The accumulator a planned checker uses. Each kind is built at most once per planner.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) enum Accumulator {
    U64,
    U128,
    Big,
    Cyclic,
}

pub(crate) struct CheckCache {
    cache: HashMap<Accumulator, Arc<dyn PrefixCheck>>,
}
impl CheckCache {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }
    #[allow(unused)]
    pub fn contains_check(&self, accumulator: Accumulator) -> bool {
        self.cache.contains_key(&accumulator)
    }
    pub fn get(&self, accumulator: Accumulator) -> Option<Arc<dyn PrefixCheck>> {
        self.cache.get(&accumulator).map(Arc::clone)
    }
    pub fn insert(&mut self, accumulator: Accumulator, check: &Arc<dyn PrefixCheck>) {
        self.cache.insert(accumulator, Arc::clone(check));
    }
}
