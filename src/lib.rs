//! matwiz - ask about a block-structured matrix hierarchy one matrix at a time

pub mod config;
pub mod console;
pub mod error;
pub mod form;
pub mod node_id;
pub mod output;
pub mod store;
pub mod tree;
pub mod wizard;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{MAX_BLOCKS, WizardConfig};
pub use console::{ConsolePrompt, LogPresenter, ScriptedAnswers};
pub use error::{Error, Result};
pub use form::{Answer, AnswerSource, FocusEvent, FormView, Presenter};
pub use node_id::NodeId;
pub use output::{OutputConfig, TreeFormatter, print_json, to_json};
pub use store::{MatInfo, NodeInfo, NodeStore};
pub use tree::{MatrixTree, Next, TraversalState, TreeNode, next_node, next_node_str};
pub use wizard::{Wizard, run, run_with};
