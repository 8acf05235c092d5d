use crate::domain::method::PaymentMethod;

/// One screen of the linear wizard, in order.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Step {
    SelectMethod,
    Instructions,
    Upload,
    Done,
}

impl Step {
    /// Ordinal position in the chain, 0 through 3.
    pub fn ordinal(&self) -> u8 {
        match self {
            Step::SelectMethod => 0,
            Step::Instructions => 1,
            Step::Upload => 2,
            Step::Done => 3,
        }
    }

    fn previous(&self) -> Option<Step> {
        match self {
            Step::SelectMethod => None,
            Step::Instructions => Some(Step::SelectMethod),
            Step::Upload => Some(Step::Instructions),
            Step::Done => Some(Step::Upload),
        }
    }
}

/// State of the wizard: current step plus the method chosen on step 0.
///
/// The state only changes through the transition methods below. The chain is
/// strictly linear (0 → 1 → 2 → 3); `back` walks it in reverse one step at a
/// time and `reset` is the only transition out of the terminal step.
/// `select_method` is the sole way past step 0, so steps 1 and 2 always have
/// a method available.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FlowState {
    step: Step,
    selected_method: Option<PaymentMethod>,
}

impl Default for FlowState {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowState {
    pub fn new() -> Self {
        Self {
            step: Step::SelectMethod,
            selected_method: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn selected_method(&self) -> Option<PaymentMethod> {
        self.selected_method
    }

    /// Stores the chosen method and advances to the instructions step.
    /// Choosing again from step 0 (after `back`) overwrites the previous
    /// choice; downstream state holds nothing else to discard.
    pub fn select_method(&mut self, method: PaymentMethod) {
        self.selected_method = Some(method);
        self.step = Step::Instructions;
    }

    /// Advances from the instructions step to the upload step. Calling it
    /// from any other step is a caller error and leaves the state alone.
    pub fn confirm_payment(&mut self) {
        if self.step == Step::Instructions {
            self.step = Step::Upload;
        }
    }

    /// Advances from the upload step to the terminal success step.
    pub fn complete_upload(&mut self) {
        if self.step == Step::Upload {
            self.step = Step::Done;
        }
    }

    /// Steps backwards once; a no-op on the first step. The selected method
    /// is kept so the user can move forward again without re-choosing.
    pub fn back(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    /// Returns to the initial state, clearing the selected method.
    pub fn reset(&mut self) {
        self.step = Step::SelectMethod;
        self.selected_method = None;
    }
}
