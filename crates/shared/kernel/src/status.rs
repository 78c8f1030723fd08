//! Shared status skeleton with per-kind vocabulary.
//!
//! ```text
//! [created] -----------------> [active]
//!     |  \--review/intermediate--/ |
//!     +-------- delete ------------+--> [cancelled] (terminal)
//! ```

use serde::Serialize;

/// Status literals of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusVocabulary {
    pub initial: &'static str,
    /// Optional `(pending review, reviewed)` pair, reachable only through `update`.
    pub review: Option<(&'static str, &'static str)>,
    /// Domain-specific values reachable only through `update`.
    pub intermediate: &'static [&'static str],
    pub active: &'static str,
    pub cancelled: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LifecycleStage {
    Created,
    InReview,
    Reviewed,
    Intermediate,
    Active,
    Cancelled,
}

impl LifecycleStage {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl StatusVocabulary {
    /// The common `PENDING → APPROVED → CANCELLED` vocabulary.
    #[must_use]
    pub const fn simple(initial: &'static str, active: &'static str) -> Self {
        Self { initial, review: None, intermediate: &[], active, cancelled: "CANCELLED" }
    }

    #[must_use]
    pub const fn with_review(mut self, pending: &'static str, reviewed: &'static str) -> Self {
        self.review = Some((pending, reviewed));
        self
    }

    #[must_use]
    pub const fn with_intermediate(mut self, values: &'static [&'static str]) -> Self {
        self.intermediate = values;
        self
    }

    #[must_use]
    pub const fn cancelled_as(mut self, cancelled: &'static str) -> Self {
        self.cancelled = cancelled;
        self
    }

    /// Classifies a status literal; `None` when it is not part of this vocabulary.
    #[must_use]
    pub fn stage(&self, status: &str) -> Option<LifecycleStage> {
        if status == self.initial {
            Some(LifecycleStage::Created)
        } else if status == self.active {
            Some(LifecycleStage::Active)
        } else if status == self.cancelled {
            Some(LifecycleStage::Cancelled)
        } else if self.review.is_some_and(|(pending, _)| pending == status) {
            Some(LifecycleStage::InReview)
        } else if self.review.is_some_and(|(_, reviewed)| reviewed == status) {
            Some(LifecycleStage::Reviewed)
        } else if self.intermediate.contains(&status) {
            Some(LifecycleStage::Intermediate)
        } else {
            None
        }
    }

    /// Whether `activate` may run from `from`. `Active` itself is handled as a no-op by callers.
    ///
    /// Review is an optional step: a kind with a review pair activates from any live stage.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn can_activate(&self, from: LifecycleStage) -> bool {
        !matches!(from, LifecycleStage::Active | LifecycleStage::Cancelled)
    }

    /// Whether an `update` may move the status from `from` to `to`.
    #[must_use]
    pub const fn can_move(&self, from: LifecycleStage, to: LifecycleStage) -> bool {
        use LifecycleStage::{Active, Cancelled, Created, InReview, Intermediate, Reviewed};

        match (from, to) {
            (Active | Cancelled, _) | (_, Active | Cancelled) => false,
            (Created, Created) => true,
            (_, Created) => false,
            (Created | Intermediate | InReview, InReview) => true,
            (InReview | Reviewed, Reviewed) => true,
            (Created | Intermediate | Reviewed, Intermediate) => true,
            _ => false,
        }
    }

    /// Every literal of the vocabulary must be distinct and non-empty.
    pub(crate) fn check(&self) -> Result<(), String> {
        let mut literals = vec![self.initial, self.active, self.cancelled];
        if let Some((pending, reviewed)) = self.review {
            literals.extend([pending, reviewed]);
        }
        literals.extend(self.intermediate.iter().copied());

        for (i, literal) in literals.iter().enumerate() {
            if literal.trim().is_empty() {
                return Err("status literals must not be empty".to_owned());
            }
            if literals[..i].contains(literal) {
                return Err(format!("status '{literal}' appears twice in the vocabulary"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSPORT: StatusVocabulary = StatusVocabulary::simple("REQUESTED", "APPROVED")
        .with_intermediate(&["SCHEDULED", "CONFIRMED"]);
    const REVIEWED: StatusVocabulary =
        StatusVocabulary::simple("PENDING", "ACTIVE").with_review("PENDING_REVIEW", "REVIEWED");

    #[test]
    fn stages_are_classified() {
        assert_eq!(TRANSPORT.stage("REQUESTED"), Some(LifecycleStage::Created));
        assert_eq!(TRANSPORT.stage("SCHEDULED"), Some(LifecycleStage::Intermediate));
        assert_eq!(TRANSPORT.stage("APPROVED"), Some(LifecycleStage::Active));
        assert_eq!(TRANSPORT.stage("CANCELLED"), Some(LifecycleStage::Cancelled));
        assert_eq!(TRANSPORT.stage("LOST"), None);
        assert_eq!(REVIEWED.stage("PENDING_REVIEW"), Some(LifecycleStage::InReview));
        assert_eq!(REVIEWED.stage("REVIEWED"), Some(LifecycleStage::Reviewed));
    }

    #[test]
    fn every_live_stage_activates() {
        assert!(REVIEWED.can_activate(LifecycleStage::Created));
        assert!(REVIEWED.can_activate(LifecycleStage::InReview));
        assert!(REVIEWED.can_activate(LifecycleStage::Reviewed));
        assert!(!REVIEWED.can_activate(LifecycleStage::Cancelled));

        assert!(TRANSPORT.can_activate(LifecycleStage::Created));
        assert!(TRANSPORT.can_activate(LifecycleStage::Intermediate));
        assert!(!TRANSPORT.can_activate(LifecycleStage::Cancelled));
    }

    #[test]
    fn terminal_and_reserved_stages_block_moves() {
        use LifecycleStage::*;

        assert!(!TRANSPORT.can_move(Cancelled, Intermediate));
        assert!(!TRANSPORT.can_move(Active, Intermediate));
        assert!(!TRANSPORT.can_move(Created, Active));
        assert!(!TRANSPORT.can_move(Intermediate, Cancelled));
        assert!(!TRANSPORT.can_move(Intermediate, Created));
        assert!(TRANSPORT.can_move(Created, Intermediate));
        assert!(TRANSPORT.can_move(Intermediate, Intermediate));

        assert!(!REVIEWED.can_move(Created, Reviewed));
        assert!(REVIEWED.can_move(Created, InReview));
        assert!(REVIEWED.can_move(InReview, Reviewed));
    }

    #[test]
    fn duplicate_literals_are_rejected() {
        let broken = StatusVocabulary::simple("PENDING", "PENDING");
        assert!(broken.check().is_err());
        assert!(TRANSPORT.check().is_ok());
        assert!(REVIEWED.check().is_ok());
    }
}
