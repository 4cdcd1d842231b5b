//! Interactive questions asked during a run

use crate::error::Result;
use crate::filter::{DateSelector, FilterMode};
use crate::operator::Operator;
use crate::partition::PartitionPlan;
use tracing::debug;

/// Whether to filter at all
pub const FILTER_PROMPT: &str = "Filter contacts by date? (yes/no)";

/// Printed above the numbered filter menu
pub const MENU_HEADER: &str = "Choose date filter:";

/// Which filter mode
pub const MODE_PROMPT: &str = "Enter choice (1-4)";

/// First bound of a custom range
pub const RANGE_START_PROMPT: &str = "Enter START date (MM/DD/YYYY)";

/// Second bound of a custom range
pub const RANGE_END_PROMPT: &str = "Enter END date (MM/DD/YYYY)";

/// Number of output files
pub const PARTS_PROMPT: &str = "How many parts do you want to split the contacts into?";

/// Walk the operator through the filter questions.
///
/// Anything other than "yes" (case-insensitive) to the first question means
/// no filtering. An unknown menu choice or a malformed range bound ends the
/// run with an error; both range bounds are asked for before either is
/// checked.
pub fn ask_date_selector<O: Operator + ?Sized>(operator: &mut O) -> Result<DateSelector> {
    let answer = operator.ask(FILTER_PROMPT)?;
    if !answer.trim().eq_ignore_ascii_case("yes") {
        return Ok(DateSelector::None);
    }

    operator.tell(MENU_HEADER)?;
    for (number, label) in FilterMode::MENU {
        operator.tell(&format!("   {number}. {label}"))?;
    }

    let mode: FilterMode = operator.ask(MODE_PROMPT)?.parse()?;
    debug!(?mode, "filter mode chosen");

    match mode.fixed_selector() {
        Some(selector) => Ok(selector),
        None => {
            let start = operator.ask(RANGE_START_PROMPT)?;
            let end = operator.ask(RANGE_END_PROMPT)?;
            DateSelector::range_from_strings(&start, &end)
        }
    }
}

/// Ask for the part count until a positive integer is given.
///
/// Each rejected answer is explained before asking again. There is no retry
/// limit; the loop only ends early if the operator's input closes.
pub fn ask_part_count<O: Operator + ?Sized>(operator: &mut O) -> Result<PartitionPlan> {
    loop {
        let answer = operator.ask(PARTS_PROMPT)?;
        match PartitionPlan::parse(&answer) {
            Ok(plan) => return Ok(plan),
            Err(e) if e.is_recoverable() => {
                debug!(input = %answer, "rejected part count");
                operator.tell(&e.to_string())?;
            }
            Err(e) => return Err(e),
        }
    }
}
