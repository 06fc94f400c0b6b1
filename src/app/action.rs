/// Side effects the handler asks the main loop to perform. State mutation
/// happens in the handler itself; only loop-level effects travel as actions.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
}
