//! This module provides ways to tweak mocked servers, so that they can return errors on some tests

use crate::error::TaskActionError;

/// This stores some behaviour tweaks, that describe how a mocked instance will behave during a given test
///
/// So that a functions fails _n_ times after _m_ initial successes, set `(m, n)` for the suited parameter
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    /// If this is true, every action will be allowed
    pub is_suspended: bool,

    pub update_priority_behaviour: (u32, u32),
    pub move_tomorrow_behaviour: (u32, u32),
    pub delete_behaviour: (u32, u32),
    pub toggle_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// All actions will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            is_suspended: false,
            update_priority_behaviour: (0, n_fails),
            move_tomorrow_behaviour: (0, n_fails),
            delete_behaviour: (0, n_fails),
            toggle_behaviour: (0, n_fails),
        }
    }

    /// Suspend this mock behaviour until you call `resume`
    pub fn suspend(&mut self) {
        self.is_suspended = true;
    }
    /// Make this behaviour active again
    pub fn resume(&mut self) {
        self.is_suspended = false;
    }

    pub fn can_update_priority(&mut self) -> Result<(), TaskActionError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.update_priority_behaviour, "update_task_priority")
    }
    pub fn can_move_tomorrow(&mut self) -> Result<(), TaskActionError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.move_tomorrow_behaviour, "move_task_tomorrow")
    }
    pub fn can_delete(&mut self) -> Result<(), TaskActionError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.delete_behaviour, "delete_task_completely")
    }
    pub fn can_toggle(&mut self) -> Result<(), TaskActionError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.toggle_behaviour, "toggle_task")
    }
}


/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), TaskActionError> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 -= 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else if remaining_failures > 0 {
        value.1 -= 1;
        log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
        Err(TaskActionError::Mocked(format!("{} ({:?})", descr, value)))
    } else {
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mock_behaviour() {
        let mut ok = MockBehaviour::new();
        assert!(ok.can_toggle().is_ok());
        assert!(ok.can_toggle().is_ok());
        assert!(ok.can_delete().is_ok());
        assert!(ok.can_update_priority().is_ok());

        let mut now = MockBehaviour::fail_now(2);
        assert!(now.can_toggle().is_err());
        assert!(now.can_delete().is_err());
        assert!(now.can_delete().is_err());
        assert!(now.can_toggle().is_err());
        assert!(now.can_toggle().is_ok());
        assert!(now.can_toggle().is_ok());
        assert!(now.can_delete().is_ok());

        let mut custom = MockBehaviour{
            toggle_behaviour: (0,1),
            move_tomorrow_behaviour: (1,3),
            ..MockBehaviour::default()
        };
        assert!(custom.can_toggle().is_err());
        assert!(custom.can_toggle().is_ok());
        assert!(custom.can_toggle().is_ok());
        assert!(custom.can_move_tomorrow().is_ok());
        assert!(custom.can_move_tomorrow().is_err());
        assert!(custom.can_move_tomorrow().is_err());
        assert!(custom.can_move_tomorrow().is_err());
        assert!(custom.can_move_tomorrow().is_ok());

        let mut suspended = MockBehaviour::fail_now(1);
        suspended.suspend();
        assert!(suspended.can_update_priority().is_ok());
        suspended.resume();
        assert!(suspended.can_update_priority().is_err());
    }
}
