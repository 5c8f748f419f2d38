use super::session::SessionState;

/// What a key press asks the session to do
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
    TogglePause,
    Restart,
}

impl Command {
    /// Map a `KeyboardEvent.key` value, anything unbound is `None`
    pub fn from_key(key: &str) -> Option<Command> {
        match key {
            "a" => Some(Command::MoveLeft),
            "d" => Some(Command::MoveRight),
            " " => Some(Command::Fire),
            "Escape" | "p" => Some(Command::TogglePause),
            "r" => Some(Command::Restart),
            _ => None,
        }
    }

    /// ┌──────────────┬─────────┬─────────┬────────┬──────┐
    /// │ Command      │ Loading │ Playing │ Paused │ Over │
    /// ├──────────────┼─────────┼─────────┼────────┼──────┤
    /// │ Move / Fire  │         │    ✓    │        │      │
    /// │ TogglePause  │         │    ✓    │   ✓    │      │
    /// │ Restart      │         │    ✓    │   ✓    │  ✓   │
    /// └──────────────┴─────────┴─────────┴────────┴──────┘
    pub fn allowed_in(&self, state: SessionState) -> bool {
        use SessionState::*;
        match self {
            Command::MoveLeft | Command::MoveRight | Command::Fire => state == Playing,
            Command::TogglePause => matches!(state, Playing | Paused),
            Command::Restart => matches!(state, Playing | Paused | Over),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(Command::from_key("a"), Some(Command::MoveLeft));
        assert_eq!(Command::from_key("d"), Some(Command::MoveRight));
        assert_eq!(Command::from_key(" "), Some(Command::Fire));
        assert_eq!(Command::from_key("Escape"), Some(Command::TogglePause));
        assert_eq!(Command::from_key("p"), Some(Command::TogglePause));
        assert_eq!(Command::from_key("r"), Some(Command::Restart));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        for key in ["A", "D", "Space", "ArrowLeft", "Enter", "", "P"] {
            assert_eq!(Command::from_key(key), None, "key {key:?}");
        }
    }

    #[test]
    fn nothing_is_accepted_while_loading() {
        for command in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::Fire,
            Command::TogglePause,
            Command::Restart,
        ] {
            assert!(!command.allowed_in(SessionState::Loading));
        }
    }

    #[test]
    fn pause_and_restart_reach_out_of_paused() {
        assert!(Command::TogglePause.allowed_in(SessionState::Paused));
        assert!(Command::Restart.allowed_in(SessionState::Paused));
        assert!(!Command::Fire.allowed_in(SessionState::Paused));
        assert!(!Command::TogglePause.allowed_in(SessionState::Over));
        assert!(Command::Restart.allowed_in(SessionState::Over));
    }
}
