use uuid::Uuid;

use crate::export::{Dataset, ExportFormat};
use crate::markup::Markup;
use crate::notice::Toast;

/// Events emitted by the controller.
/// The view subscribes to these and mirrors them onto the page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Submit button disabled with a busy label
    QueryBusy(bool),

    /// Full-screen loading overlay
    Loading(bool),

    /// A result card was added at the top of the feed
    CardPrepended(Card),

    /// Feed emptied and results section hidden
    FeedCleared,

    /// Session query count changed
    QueryCount(u32),

    /// Total employees known to the backend
    EmployeeTotal(usize),

    Toast(Toast),

    Modal(ModalState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Query,
    Employees,
    Activities,
    Benchmark,
}

/// One rendered block of the result feed
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: Uuid,
    pub kind: CardKind,
    pub markup: Markup,
}

impl Card {
    pub fn new(kind: CardKind, markup: Markup) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            markup,
        }
    }
}

/// Export dialog state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    /// `pending` holds the export currently being downloaded, if any
    Open {
        pending: Option<(Dataset, ExportFormat)>,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }
}
