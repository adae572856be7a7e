//! The question form shown for the focused matrix
//!
//! The core never renders anything. It emits a [`FocusEvent`] for whichever
//! matrix comes next and describes the form state in a [`FormView`]; a
//! [`Presenter`] shows it and an [`AnswerSource`] fills it in.

use std::io;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::node_id::NodeId;
use crate::store::NodeInfo;

/// Signal sent to the presenter whenever the focused matrix changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusEvent {
    /// The root is asked about first and has no defaults yet.
    FirstVisit { id: NodeId },
    /// A block, with whatever defaults were set when it was created.
    Node { id: NodeId, info: Option<NodeInfo> },
    /// No matrices left; hide the questions.
    Done,
}

impl FocusEvent {
    pub fn id(&self) -> Option<&NodeId> {
        match self {
            FocusEvent::FirstVisit { id } | FocusEvent::Node { id, .. } => Some(id),
            FocusEvent::Done => None,
        }
    }
}

/// The answers given for one matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Answer {
    pub symm: bool,
    pub posdef: bool,
    pub logstruc: bool,
    pub blocks: usize,
}

impl From<Answer> for NodeInfo {
    fn from(answer: Answer) -> Self {
        NodeInfo {
            symm: answer.symm,
            posdef: answer.posdef,
            logstruc: answer.logstruc,
            blocks: if answer.logstruc { answer.blocks } else { 0 },
        }
        .normalized()
    }
}

/// Field values and visibility for the question form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub id: NodeId,
    pub title: String,
    pub symm: bool,
    pub posdef: bool,
    pub posdef_visible: bool,
    pub logstruc: bool,
    /// Hidden when the matrix may not be split any further.
    pub logstruc_visible: bool,
    pub blocks_visible: bool,
    pub blocks: usize,
}

impl FormView {
    /// A blank form for `id`: everything unchecked, optional rows hidden.
    pub fn blank(id: &NodeId) -> Self {
        Self {
            id: id.clone(),
            title: format!("Currently asking for matrix {}", id.label()),
            symm: false,
            posdef: false,
            posdef_visible: false,
            logstruc: false,
            logstruc_visible: true,
            blocks_visible: false,
            blocks: 0,
        }
    }

    /// Form state for a focus event; `None` once the walk is done.
    ///
    /// Symmetry defaults are pre-filled for blocks. The log-structured box
    /// always starts unchecked.
    pub fn for_event(event: &FocusEvent) -> Option<Self> {
        match event {
            FocusEvent::Done => None,
            FocusEvent::FirstVisit { id } => Some(Self::blank(id)),
            FocusEvent::Node { id, info } => {
                let mut form = Self::blank(id);
                if let Some(info) = info {
                    form.set_symm(info.symm);
                    form.set_posdef(info.posdef);
                }
                Some(form)
            }
        }
    }

    /// Checking symmetric reveals the positive-definite row; unchecking hides
    /// and clears it.
    pub fn set_symm(&mut self, symm: bool) {
        self.symm = symm;
        self.posdef_visible = symm;
        if !symm {
            self.posdef = false;
        }
    }

    /// Ignored while the row is hidden.
    pub fn set_posdef(&mut self, posdef: bool) {
        if self.posdef_visible {
            self.posdef = posdef;
        }
    }

    /// Show or hide the log-structured question. Hiding it also clears the
    /// answer and the block count.
    pub fn set_split_allowed(&mut self, allowed: bool) {
        if !allowed {
            self.set_logstruc(false);
        }
        self.logstruc_visible = allowed;
    }

    /// Checking log-structured reveals the field-split block count. Ignored
    /// while the question is hidden.
    pub fn set_logstruc(&mut self, logstruc: bool) {
        if !self.logstruc_visible {
            return;
        }
        self.logstruc = logstruc;
        self.blocks_visible = logstruc;
        if !logstruc {
            self.blocks = 0;
        }
    }

    pub fn set_blocks(&mut self, blocks: usize) {
        if self.blocks_visible {
            self.blocks = blocks;
        }
    }

    pub fn answer(&self) -> Answer {
        Answer {
            symm: self.symm,
            posdef: self.posdef,
            logstruc: self.logstruc,
            blocks: self.blocks,
        }
    }
}

/// Receives focus changes from the wizard.
pub trait Presenter {
    fn focus(&mut self, event: &FocusEvent) -> io::Result<()>;
}

/// Supplies answers for the focused form. `Ok(None)` means input ran out.
pub trait AnswerSource {
    fn next_answer(&mut self, form: &FormView) -> Result<Option<Answer>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::parse(s).unwrap()
    }

    #[test]
    fn test_first_visit_is_blank() {
        let form = FormView::for_event(&FocusEvent::FirstVisit { id: NodeId::root() }).unwrap();
        assert_eq!(form.title, "Currently asking for matrix A0");
        assert!(!form.symm && !form.posdef && !form.logstruc);
        assert!(!form.posdef_visible && !form.blocks_visible);
    }

    #[test]
    fn test_node_prefills_symmetry_but_not_logstruc() {
        let info = NodeInfo {
            symm: true,
            posdef: true,
            logstruc: true,
            blocks: 2,
        };
        let form = FormView::for_event(&FocusEvent::Node {
            id: id("01"),
            info: Some(info),
        })
        .unwrap();
        assert!(form.symm);
        assert!(form.posdef_visible);
        assert!(form.posdef);
        assert!(!form.logstruc);
        assert!(!form.blocks_visible);
        assert_eq!(form.blocks, 0);
    }

    #[test]
    fn test_done_has_no_form() {
        assert!(FormView::for_event(&FocusEvent::Done).is_none());
    }

    #[test]
    fn test_unchecking_symm_clears_posdef() {
        let mut form = FormView::blank(&NodeId::root());
        form.set_symm(true);
        form.set_posdef(true);
        form.set_symm(false);
        assert!(!form.posdef);
        assert!(!form.posdef_visible);
    }

    #[test]
    fn test_posdef_ignored_while_hidden() {
        let mut form = FormView::blank(&NodeId::root());
        form.set_posdef(true);
        assert!(!form.posdef);
    }

    #[test]
    fn test_logstruc_toggles_block_field() {
        let mut form = FormView::blank(&NodeId::root());
        form.set_blocks(3);
        assert_eq!(form.blocks, 0);
        form.set_logstruc(true);
        form.set_blocks(3);
        assert_eq!(form.answer().blocks, 3);
        form.set_logstruc(false);
        assert!(!form.blocks_visible);
        assert_eq!(form.answer().blocks, 0);
    }

    #[test]
    fn test_split_not_allowed_hides_logstruc() {
        let mut form = FormView::blank(&NodeId::root());
        form.set_logstruc(true);
        form.set_blocks(2);
        form.set_split_allowed(false);
        assert!(!form.logstruc_visible);
        assert!(!form.blocks_visible);
        assert_eq!(form.answer(), Answer::default());

        form.set_logstruc(true);
        assert!(!form.logstruc);
    }

    #[test]
    fn test_answer_without_logstruc_drops_blocks() {
        let answer = Answer {
            blocks: 4,
            posdef: true,
            ..Default::default()
        };
        let info = NodeInfo::from(answer);
        assert_eq!(info.blocks, 0);
        assert!(!info.posdef);
    }
}
