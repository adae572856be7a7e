//! Wizard session: answers in, next question out

use tracing::{debug, info, warn};

use crate::config::WizardConfig;
use crate::error::{Error, Result};
use crate::form::{Answer, AnswerSource, FocusEvent, FormView, Presenter};
use crate::node_id::NodeId;
use crate::store::{MatInfo, NodeInfo};
use crate::tree::{Next, TraversalState, next_node};

/// One pass over a matrix hierarchy, root first.
#[derive(Debug, Clone)]
pub struct Wizard {
    config: WizardConfig,
    store: MatInfo,
    state: TraversalState,
    /// `None` once every matrix has been asked about.
    current: Option<NodeId>,
}

impl Wizard {
    pub fn new(config: WizardConfig) -> Self {
        Self {
            config,
            store: MatInfo::new(),
            state: TraversalState::new(),
            current: Some(NodeId::root()),
        }
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    pub fn current(&self) -> Option<&NodeId> {
        self.current.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    pub fn store(&self) -> &MatInfo {
        &self.store
    }

    pub fn into_store(self) -> MatInfo {
        self.store
    }

    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    /// Focus event for the current matrix.
    pub fn focus_event(&self) -> FocusEvent {
        match &self.current {
            None => FocusEvent::Done,
            Some(id) if id.is_root() && !self.state.started() => {
                FocusEvent::FirstVisit { id: id.clone() }
            }
            Some(id) => FocusEvent::Node {
                id: id.clone(),
                info: self.store.get(id).copied(),
            },
        }
    }

    /// Form for the current matrix, with the log-structured question hidden
    /// at the depth limit. `None` once finished.
    pub fn form(&self) -> Option<FormView> {
        let mut form = FormView::for_event(&self.focus_event())?;
        form.set_split_allowed(self.config.can_split_at(form.id.depth()));
        Some(form)
    }

    /// Record the answers for the current matrix and move to the next one.
    pub fn answer(&mut self, answer: Answer) -> Result<FocusEvent> {
        let current = self.current.clone().ok_or(Error::Finished)?;

        let mut info = NodeInfo::from(answer);
        if info.logstruc && !self.config.can_split_at(current.depth()) {
            warn!(id = %current, "depth limit reached, not splitting");
            info.logstruc = false;
            info.blocks = 0;
        }
        self.store
            .record(&current, info, self.config.effective_max_blocks())?;
        debug!(id = %current, ?info, "recorded answer");

        match next_node(&current, &self.store, &mut self.state)? {
            Next::Node(next) => {
                self.store.create(&next)?;
                self.current = Some(next);
            }
            Next::Done => {
                info!(matrices = self.store.len(), "all matrices answered");
                self.current = None;
            }
        }
        Ok(self.focus_event())
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(WizardConfig::default())
    }
}

/// Drive `wizard` to completion, showing each question through `presenter`
/// and filling it from `source`.
pub fn run<P, A>(wizard: &mut Wizard, presenter: &mut P, source: &mut A) -> Result<()>
where
    P: Presenter + ?Sized,
    A: AnswerSource + ?Sized,
{
    run_with(wizard, &mut Pair { presenter, source })
}

/// `run` for a collaborator that both shows and answers the questions.
pub fn run_with<C>(wizard: &mut Wizard, ui: &mut C) -> Result<()>
where
    C: Presenter + AnswerSource + ?Sized,
{
    loop {
        ui.focus(&wizard.focus_event())?;
        let Some(form) = wizard.form() else {
            return Ok(());
        };
        let answer = ui
            .next_answer(&form)?
            .ok_or_else(|| Error::InputClosed(form.id.clone()))?;
        wizard.answer(answer)?;
    }
}

struct Pair<'a, P: ?Sized, A: ?Sized> {
    presenter: &'a mut P,
    source: &'a mut A,
}

impl<P: Presenter + ?Sized, A: ?Sized> Presenter for Pair<'_, P, A> {
    fn focus(&mut self, event: &FocusEvent) -> std::io::Result<()> {
        self.presenter.focus(event)
    }
}

impl<P: ?Sized, A: AnswerSource + ?Sized> AnswerSource for Pair<'_, P, A> {
    fn next_answer(&mut self, form: &FormView) -> Result<Option<Answer>> {
        self.source.next_answer(form)
    }
}
