/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reload the word source and start a fresh round.
    NewRound,
    Quit,
}
