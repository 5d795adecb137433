use dualstack_common::network::subnet::Subnet;
use dualstack_core::simulator::SimulationObserver;
use dualstack_core::translator::TranslationResult;

/// Keeps every simulation event for later inspection.
#[derive(Default)]
pub struct RecordingObserver {
    pub started: Vec<(Subnet, usize)>,
    pub pairs: Vec<TranslationResult>,
    pub communications: Vec<TranslationResult>,
}

impl SimulationObserver for RecordingObserver {
    fn on_start(&mut self, subnet: &Subnet, pairs: usize) {
        self.started.push((*subnet, pairs));
    }

    fn on_pair(&mut self, pair: &TranslationResult) {
        self.pairs.push(*pair);
    }

    fn on_communication(&mut self, pair: &TranslationResult) {
        self.communications.push(*pair);
    }
}
