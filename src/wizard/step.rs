/// The six wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    #[default]
    Business,
    Products,
    Design,
    Integrations,
    Content,
    Launch,
}

impl WizardStep {
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Business,
            WizardStep::Products,
            WizardStep::Design,
            WizardStep::Integrations,
            WizardStep::Content,
            WizardStep::Launch,
        ]
    }

    /// 1-based step number
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Business => 1,
            WizardStep::Products => 2,
            WizardStep::Design => 3,
            WizardStep::Integrations => 4,
            WizardStep::Content => 5,
            WizardStep::Launch => 6,
        }
    }

    pub fn from_number(number: usize) -> Option<WizardStep> {
        Self::all().get(number.checked_sub(1)?).copied()
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Business => "Business Setup",
            WizardStep::Products => "Products",
            WizardStep::Design => "Design",
            WizardStep::Integrations => "Integrations",
            WizardStep::Content => "Content",
            WizardStep::Launch => "Launch",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Business => "Configure your business details",
            WizardStep::Products => "Set up your product catalog",
            WizardStep::Design => "Choose your store theme",
            WizardStep::Integrations => "Connect payment & shipping",
            WizardStep::Content => "Generate marketing content",
            WizardStep::Launch => "Review & launch your store",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<WizardStep> {
        Self::from_number(self.number() - 1)
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers_are_sequential() {
        for (i, step) in WizardStep::all().iter().enumerate() {
            assert_eq!(step.number(), i + 1);
            assert_eq!(WizardStep::from_number(i + 1), Some(*step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(7), None);
    }

    #[test]
    fn test_first_and_last() {
        assert!(WizardStep::Business.is_first());
        assert_eq!(WizardStep::Business.previous(), None);
        assert!(WizardStep::Launch.is_last());
        assert_eq!(WizardStep::Launch.next(), None);
        assert_eq!(WizardStep::Content.next(), Some(WizardStep::Launch));
    }
}
