pub(crate) mod alternating_chains;
pub(crate) mod bivalue_oddagon;
pub(crate) mod guardian;
mod prelude;
pub(crate) mod rectangles;

use super::{StepCollector, StrategySolver};
use crate::errors::Unsolvable;

/// The techniques a [`StrategySolver`] can search for.
///
/// This can be used with [`StrategySolver::find_all`] and [`StrategySolver::find_first`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Strategy {
    /// Unique rectangles with all extra candidates in one cell
    UniqueRectangles,
    /// Avoidable rectangles with all extra candidates in one cell
    AvoidableRectangles,
    /// X-Chains, AICs and discontinuous nice loops over the link graph
    AlternatingInferenceChains,
    /// Odd loops through cells holding the same two digits
    BivalueOddagon,
    /// Odd loops of a single digit
    Guardian,
}

impl Strategy {
    /// Every strategy, roughly by increasing difficulty
    pub const ALL: &'static [Strategy] = &[
        Strategy::UniqueRectangles,
        Strategy::AvoidableRectangles,
        Strategy::AlternatingInferenceChains,
        Strategy::BivalueOddagon,
        Strategy::Guardian,
    ];

    pub(crate) fn deduce(self, solver: &mut StrategySolver, collector: &mut StepCollector) -> Result<(), Unsolvable> {
        use self::Strategy::*;
        match self {
            UniqueRectangles => solver.find_unique_rectangles(collector),
            AvoidableRectangles => solver.find_avoidable_rectangles(collector),
            AlternatingInferenceChains => solver.find_alternating_chains(collector),
            BivalueOddagon => solver.find_bivalue_oddagons(collector),
            Guardian => solver.find_guardians(collector),
        }
    }
}
