//! Platform-agnostic picker logic: the bundled dataset, the derived view
//! model and the selection state machine. Nothing here touches Dioxus
//! rendering, so it is exercised directly by unit tests.

pub mod collation;
pub mod dataset;
pub mod selection;
pub mod view_model;

pub use dataset::{Dataset, DatasetError, TranslationRecord};
pub use selection::{LeadFormValues, SelectionMode, SelectionState};
pub use view_model::{LanguageIndex, ViewModel};
