//! Multi-step form wizards.
//!
//! A wizard walks an ordered list of steps, collecting user input into a
//! draft. Moving forward is gated by a per-step predicate over the draft;
//! moving back is always allowed. Submitting on the last step turns the
//! draft into a finalized record and parks the machine in
//! [`WizardState::Submitted`] until it is [`reset`](WizardFlow::reset).
//!
//! ```text
//!            advance (gated)        advance (gated)          submit (gated)
//!  steps[0] ───────────────▶ steps[1] ──────▶ … steps[n-1] ───────────────▶ Submitted
//!      ▲  ◀─────────────────          ◀──────                                    │
//!      │        retreat                                                         │
//!      └──────────────────────────────── reset ─────────────────────────────────┘
//! ```
//!
//! [`WizardFlow`] is the machine; a [`WizardSpec`] supplies the step list,
//! the gates, the patch merge and the finalization for one concrete wizard.
//! The two wizards of the app live in [`listing`] and [`group`].
//!
//! Refused transitions are not errors: they return `false` (or `None`) and
//! leave the state untouched. Callers keep their controls disabled by asking
//! [`WizardFlow::can_advance`] up front.

use std::fmt;

use log::{debug, info};

use crate::error::{Result, SoukError};

pub mod group;
pub mod listing;


pub use group::{GroupDraft, GroupPatch, GroupStep, GroupWizard};
pub use listing::{parse_price, ListingDraft, ListingPatch, ListingStep, ListingWizard};

/// Definition of one concrete wizard.
pub trait WizardSpec {
    /// Closed step enum.
    type Step: Copy + Eq + fmt::Debug + fmt::Display + 'static;
    /// Accumulated user input; `Default` is the empty draft.
    type Draft: Default;
    /// Partial update merged into the draft.
    type Patch;
    /// Finalized output of a successful submit.
    type Record;

    /// Ordered steps; must not be empty.
    fn steps(&self) -> &'static [Self::Step];

    /// Whether the draft satisfies the gate of `step`.
    fn can_advance(&self, step: Self::Step, draft: &Self::Draft) -> bool;

    /// Merge a patch into the draft. Never validates.
    fn apply(&self, draft: &mut Self::Draft, patch: Self::Patch);

    /// Build the record from a draft whose gates all hold.
    fn finalize(&self, draft: &Self::Draft) -> Self::Record;

    /// Why the gate of `step` refuses the draft, for user-facing messages.
    fn explain(&self, step: Self::Step, draft: &Self::Draft) -> Option<String> {
        (!self.can_advance(step, draft)).then(|| format!("the {step} step is incomplete"))
    }
}

/// Where a wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState<S> {
    /// On one of the steps
    At(S),
    /// Record emitted; inert until reset
    Submitted,
}

impl<S> WizardState<S> {
    /// The step, if not yet submitted.
    pub fn step(self) -> Option<S> {
        match self {
            WizardState::At(step) => Some(step),
            WizardState::Submitted => None,
        }
    }
}

/// Generic step machine driven by a [`WizardSpec`].
pub struct WizardFlow<W: WizardSpec> {
    spec: W,
    /// Index into `spec.steps()`, `None` once submitted
    position: Option<usize>,
    draft: W::Draft,
}

impl<W: WizardSpec> WizardFlow<W> {
    /// Opens a wizard on its first step with an empty draft.
    ///
    /// # Errors
    ///
    /// Returns `SoukError::InvalidInput` if the spec defines no steps.
    pub fn new(spec: W) -> Result<Self> {
        if spec.steps().is_empty() {
            return Err(SoukError::invalid_input("steps")
                .with_reason("a wizard needs at least one step"));
        }
        Ok(Self {
            spec,
            position: Some(0),
            draft: W::Draft::default(),
        })
    }

    pub fn spec(&self) -> &W {
        &self.spec
    }

    pub fn steps(&self) -> &'static [W::Step] {
        self.spec.steps()
    }

    pub fn current(&self) -> WizardState<W::Step> {
        match self.position {
            Some(index) => WizardState::At(self.spec.steps()[index]),
            None => WizardState::Submitted,
        }
    }

    /// Zero-based index of the current step, `None` once submitted.
    pub fn step_index(&self) -> Option<usize> {
        self.position
    }

    pub fn is_submitted(&self) -> bool {
        self.position.is_none()
    }

    /// Whether the current step is the last one.
    pub fn is_terminal(&self) -> bool {
        self.position == Some(self.last_index())
    }

    pub fn draft(&self) -> &W::Draft {
        &self.draft
    }

    /// Gate of the current step; `false` once submitted.
    pub fn can_advance(&self) -> bool {
        self.current()
            .step()
            .is_some_and(|step| self.spec.can_advance(step, &self.draft))
    }

    /// Reason the current step's gate refuses, if it does.
    pub fn blocker(&self) -> Option<String> {
        self.current()
            .step()
            .and_then(|step| self.spec.explain(step, &self.draft))
    }

    /// Moves to the next step if the current gate holds.
    ///
    /// Returns `false` without changing anything when the gate fails, on the
    /// last step, or after submission.
    pub fn advance(&mut self) -> bool {
        let Some(index) = self.position else {
            return false;
        };
        let step = self.spec.steps()[index];
        if index == self.last_index() {
            return false;
        }
        if !self.spec.can_advance(step, &self.draft) {
            debug!("Advance refused at step {step}");
            return false;
        }
        self.position = Some(index + 1);
        debug!("Advanced from {step} to {}", self.spec.steps()[index + 1]);
        true
    }

    /// Moves to the previous step. Never validated.
    ///
    /// Returns `false` on the first step and after submission.
    pub fn retreat(&mut self) -> bool {
        match self.position {
            Some(index) if index > 0 => {
                self.position = Some(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Merges a partial update into the draft. Ignored after submission.
    pub fn update(&mut self, patch: W::Patch) {
        if self.is_submitted() {
            debug!("Ignoring draft update on a submitted wizard");
            return;
        }
        self.spec.apply(&mut self.draft, patch);
    }

    /// Whether [`submit`](Self::submit) would succeed right now.
    ///
    /// Requires the terminal step and every step's gate, including gates
    /// already passed, since the draft stays editable on later steps.
    pub fn can_submit(&self) -> bool {
        self.is_terminal()
            && self
                .spec
                .steps()
                .iter()
                .all(|step| self.spec.can_advance(*step, &self.draft))
    }

    /// Finalizes the draft into a record.
    ///
    /// On success the draft is discarded and the machine moves to
    /// [`WizardState::Submitted`]; otherwise nothing changes and `None` is
    /// returned.
    pub fn submit(&mut self) -> Option<W::Record> {
        if !self.can_submit() {
            debug!("Submit refused at {:?}", self.current());
            return None;
        }
        let record = self.spec.finalize(&self.draft);
        self.draft = W::Draft::default();
        self.position = None;
        info!("Wizard submitted");
        Some(record)
    }

    /// Like [`submit`](Self::submit), handing the record to `accept`.
    ///
    /// Returns whether a record was emitted.
    pub fn submit_to<F>(&mut self, accept: F) -> bool
    where
        F: FnOnce(W::Record),
    {
        match self.submit() {
            Some(record) => {
                accept(record);
                true
            }
            None => false,
        }
    }

    /// Returns to the first step with an empty draft.
    pub fn reset(&mut self) {
        self.position = Some(0);
        self.draft = W::Draft::default();
    }

    fn last_index(&self) -> usize {
        self.spec.steps().len() - 1
    }
}

impl<W> fmt::Debug for WizardFlow<W>
where
    W: WizardSpec,
    W::Draft: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardFlow")
            .field("current", &self.current())
            .field("draft", &self.draft)
            .finish()
    }
}

/// Record ids carry the creation time in unix milliseconds.
pub(crate) fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", jiff::Timestamp::now().as_millisecond())
}
