use yewdux::prelude::*;

/// Global dashboard state.
///
/// Server data is never cached here. Views fetch what they show and re-fetch
/// whenever `data_revision` changes, which every successful mutation bumps.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub data_revision: u64,
}

impl State {
    /// Mark all fetched data as outdated.
    pub fn data_changed(&mut self) {
        self.data_revision = self.data_revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_changed_bumps_revision() {
        let mut state = State::default();
        state.data_changed();
        state.data_changed();
        assert_eq!(state.data_revision, 2);
    }
}
