/// Settle policy for overlapping requests
///
/// Every coordinator asks for a [`Ticket`] when it starts and presents it
/// again when its response arrives. Whether a late response may still
/// touch the session is decided here and nowhere else.

/// The kinds of request a coordinator can have in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Upload,
    Save,
    Refresh,
    Load,
    Clear,
}

impl OperationKind {
    const COUNT: usize = 5;

    fn index(self) -> usize {
        match self {
            OperationKind::Upload => 0,
            OperationKind::Save => 1,
            OperationKind::Refresh => 2,
            OperationKind::Load => 3,
            OperationKind::Clear => 4,
        }
    }
}

/// How settlements of overlapping requests are reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettlePolicy {
    /// Every response is applied; whichever settles last wins
    #[default]
    LastWriteWins,
    /// Responses older than the newest request of the same kind are dropped
    DiscardStale,
}

/// Issued when a request starts, checked when it settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: OperationKind,
    pub epoch: u64,
}

/// Per-kind request epochs plus the active policy
#[derive(Debug, Default)]
pub struct SettleGuard {
    policy: SettlePolicy,
    latest: [u64; OperationKind::COUNT],
}

impl SettleGuard {
    pub fn new(policy: SettlePolicy) -> Self {
        Self {
            policy,
            latest: [0; OperationKind::COUNT],
        }
    }

    pub fn policy(&self) -> SettlePolicy {
        self.policy
    }

    /// Start a new request of `kind`; epochs increase monotonically per kind
    pub fn issue(&mut self, kind: OperationKind) -> Ticket {
        let slot = &mut self.latest[kind.index()];
        *slot += 1;
        Ticket { kind, epoch: *slot }
    }

    /// Whether a settling request may still update the session
    pub fn admit(&self, ticket: &Ticket) -> bool {
        match self.policy {
            SettlePolicy::LastWriteWins => true,
            SettlePolicy::DiscardStale => self.latest[ticket.kind.index()] == ticket.epoch,
        }
    }
}
