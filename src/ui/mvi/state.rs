/// Reducer-owned state. `Default` is the value `dispatch_mvi!` swaps in
/// while the reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
