use crate::compose::{SlotOutcome, SlotReport};

/// Counts of what happened to the slots of a generated sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridStatistics {
    /// Slots with a drawn source page
    pub placed: usize,
    /// Slots whose source could not be drawn
    pub failed: usize,
    /// Slots with no item assigned
    pub empty: usize,
    /// Items past the ninth
    pub ignored: usize,
}

impl GridStatistics {
    pub fn from_reports(reports: &[SlotReport], ignored: usize) -> Self {
        let mut stats = Self {
            ignored,
            ..Default::default()
        };

        for report in reports {
            match report.outcome {
                SlotOutcome::Placed(_) => stats.placed += 1,
                SlotOutcome::Failed { .. } => stats.failed += 1,
                SlotOutcome::Empty { .. } => stats.empty += 1,
            }
        }

        stats
    }

    /// Slots that had an item assigned
    pub fn occupied(&self) -> usize {
        self.placed + self.failed
    }
}
