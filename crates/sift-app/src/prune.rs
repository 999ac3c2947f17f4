//! Count-then-confirm workflow for pruning unprioritized content

/// Details of a prune waiting for y/n
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub item_count: usize,
    pub age_days: Option<u32>,
}

impl PendingConfirmation {
    /// Prompt shown while waiting for the answer
    pub fn prompt(&self) -> String {
        let scope = match self.age_days {
            Some(days) => format!(" older than {} days", days),
            None => String::new(),
        };
        format!(
            "Delete {} unprioritized {}{}? (y/n)",
            self.item_count,
            if self.item_count == 1 { "item" } else { "items" },
            scope
        )
    }
}

/// Prune workflow state.
///
/// `Idle → Counting → AwaitingConfirmation → Executing → Idle`. Cancelling
/// from `AwaitingConfirmation` returns straight to `Idle`; a zero count
/// never enters `AwaitingConfirmation`, and a forced prune goes from `Idle`
/// to `Executing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruneWorkflow {
    #[default]
    Idle,
    Counting {
        age_days: Option<u32>,
    },
    AwaitingConfirmation(PendingConfirmation),
    Executing {
        age_days: Option<u32>,
    },
}

impl PruneWorkflow {
    pub fn pending_confirmation(&self) -> Option<&PendingConfirmation> {
        match self {
            PruneWorkflow::AwaitingConfirmation(pending) => Some(pending),
            _ => None,
        }
    }

    /// A count or deletion is in flight
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            PruneWorkflow::Counting { .. } | PruneWorkflow::Executing { .. }
        )
    }
}

/// Parse the optional age argument: `30` or `30d`
pub fn parse_age(arg: Option<&str>) -> Result<Option<u32>, String> {
    let Some(arg) = arg else {
        return Ok(None);
    };
    let digits = arg.strip_suffix(['d', 'D']).unwrap_or(arg);
    match digits.parse::<u32>() {
        Ok(0) => Err("age must be at least 1 day".to_string()),
        Ok(days) => Ok(Some(days)),
        Err(_) => Err(format!("invalid age '{}'", arg)),
    }
}
