/// Passcode gate in front of deletions.
///
/// One shared passcode for everyone. It keeps guests from removing
/// each other's photos by accident; it does not protect anything.

/// Outcome of a passcode prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Approved,
    /// Wrong passcode, tell the guest
    Rejected,
    /// Prompt dismissed, say nothing
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct DeleteGate {
    passcode: String,
    /// Item waiting for confirmation and the text typed so far
    pending: Option<PendingDelete>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub item_id: String,
    pub input: String,
}

impl DeleteGate {
    pub fn new(passcode: impl Into<String>) -> Self {
        Self {
            passcode: passcode.into(),
            pending: None,
        }
    }

    /// Compare a prompt answer with the passcode. `None` means cancelled.
    pub fn check(&self, input: Option<&str>) -> GateDecision {
        match input {
            None => GateDecision::Cancelled,
            Some(answer) if answer == self.passcode => GateDecision::Approved,
            Some(_) => GateDecision::Rejected,
        }
    }

    /// Open the prompt for `item_id`, replacing any earlier request
    pub fn request(&mut self, item_id: impl Into<String>) {
        self.pending = Some(PendingDelete {
            item_id: item_id.into(),
            input: String::new(),
        });
    }

    pub fn pending(&self) -> Option<&PendingDelete> {
        self.pending.as_ref()
    }

    pub fn set_input(&mut self, input: String) {
        if let Some(pending) = &mut self.pending {
            pending.input = input;
        }
    }

    /// Submit the typed passcode. Closes the prompt.
    ///
    /// Returns the decision and, when approved, the id to delete.
    pub fn submit(&mut self) -> Option<(GateDecision, String)> {
        let pending = self.pending.take()?;
        Some((self.check(Some(&pending.input)), pending.item_id))
    }

    /// Dismiss the prompt
    pub fn cancel(&mut self) -> GateDecision {
        self.pending = None;
        self.check(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_passcode_is_approved() {
        let gate = DeleteGate::new("6666");
        assert_eq!(gate.check(Some("6666")), GateDecision::Approved);
    }

    #[test]
    fn test_anything_else_is_rejected() {
        let gate = DeleteGate::new("6666");
        for answer in ["", "666", "66666", " 6666", "6666 ", "abcd"] {
            assert_eq!(gate.check(Some(answer)), GateDecision::Rejected, "{answer:?}");
        }
    }

    #[test]
    fn test_dismissed_prompt_is_cancelled() {
        let gate = DeleteGate::new("6666");
        assert_eq!(gate.check(None), GateDecision::Cancelled);
    }

    #[test]
    fn test_prompt_flow() {
        let mut gate = DeleteGate::new("6666");
        gate.request("abc");
        gate.set_input("6666".to_string());

        assert_eq!(gate.submit(), Some((GateDecision::Approved, "abc".to_string())));
        assert!(gate.pending().is_none());
        assert_eq!(gate.submit(), None);
    }

    #[test]
    fn test_new_request_clears_input() {
        let mut gate = DeleteGate::new("6666");
        gate.request("abc");
        gate.set_input("66".to_string());
        gate.request("def");

        let pending = gate.pending().unwrap();
        assert_eq!(pending.item_id, "def");
        assert!(pending.input.is_empty());
    }

    #[test]
    fn test_cancel_closes_prompt() {
        let mut gate = DeleteGate::new("6666");
        gate.request("abc");
        assert_eq!(gate.cancel(), GateDecision::Cancelled);
        assert!(gate.pending().is_none());
    }
}
