/// Step cursor for the wizard. Forward transitions are guarded by
/// [`super::WizardController`]; backward transitions always move exactly one
/// step and are a no-op from the entry point. There is no sixth step: past
/// [`Step::Review`] the only transition is the terminal [`Step::Submitted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Details,
    Schedule,
    Venue,
    Texts,
    Review,
    Submitted,
}

impl Step {
    /// One-based position shown in the step chrome, 1..=5.
    pub fn index(self) -> u8 {
        match self {
            Step::Details => 1,
            Step::Schedule => 2,
            Step::Venue => 3,
            Step::Texts => 4,
            Step::Review | Step::Submitted => 5,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Details => Some(Step::Schedule),
            Step::Schedule => Some(Step::Venue),
            Step::Venue => Some(Step::Texts),
            Step::Texts => Some(Step::Review),
            Step::Review | Step::Submitted => None,
        }
    }

    pub fn prev(self) -> Option<Step> {
        match self {
            Step::Details | Step::Submitted => None,
            Step::Schedule => Some(Step::Details),
            Step::Venue => Some(Step::Schedule),
            Step::Texts => Some(Step::Venue),
            Step::Review => Some(Step::Texts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_chain_reaches_review_in_four_moves() {
        let mut step = Step::Details;
        for _ in 0..4 {
            step = step.next().unwrap();
        }
        assert_eq!(step, Step::Review);
        assert!(step.next().is_none());
    }

    #[test]
    fn backward_stops_at_the_entry_step() {
        assert_eq!(Step::Schedule.prev(), Some(Step::Details));
        assert!(Step::Details.prev().is_none());
    }

    #[test]
    fn indices_span_one_to_five() {
        assert_eq!(Step::Details.index(), 1);
        assert_eq!(Step::Review.index(), 5);
        assert_eq!(Step::Submitted.index(), 5);
    }
}
